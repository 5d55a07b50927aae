//! Load loan parameters from JSON and CSV files

use csv::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::{LoanParameters, RepaymentType};
use crate::LoanResult;

/// Raw CSV row; the repayment type arrives as free text
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    principal: f64,
    annual_interest_rate: f64,
    term_years: u32,
    annual_inflation_rate: f64,
    deduction_years: u32,
    tax_rate: f64,
    #[serde(default)]
    deduction_linear_phase_out: bool,
    #[serde(default)]
    deduction_end_rate: f64,
    repayment_type: String,
    #[serde(default)]
    investment_return_rate: f64,
    #[serde(default)]
    wealth_tax_rate: f64,
    #[serde(default)]
    borrowing_cost_rate: f64,
}

impl CsvRow {
    fn into_parameters(self) -> LoanResult<LoanParameters> {
        let repayment_type: RepaymentType = self.repayment_type.parse()?;

        Ok(LoanParameters {
            principal: self.principal,
            annual_interest_rate: self.annual_interest_rate,
            term_years: self.term_years,
            annual_inflation_rate: self.annual_inflation_rate,
            deduction_years: self.deduction_years,
            tax_rate: self.tax_rate,
            deduction_linear_phase_out: self.deduction_linear_phase_out,
            deduction_end_rate: self.deduction_end_rate,
            repayment_type,
            investment_return_rate: self.investment_return_rate,
            wealth_tax_rate: self.wealth_tax_rate,
            borrowing_cost_rate: self.borrowing_cost_rate,
        })
    }
}

/// Load a single parameter set from a JSON file
pub fn load_parameters_json<P: AsRef<Path>>(path: P) -> LoanResult<LoanParameters> {
    let file = File::open(path)?;
    let params = serde_json::from_reader(BufReader::new(file))?;
    Ok(params)
}

/// Load a batch of parameter sets from a CSV file, one loan per row
pub fn load_parameters_csv<P: AsRef<Path>>(path: P) -> LoanResult<Vec<LoanParameters>> {
    let file = File::open(path)?;
    load_parameters_from_reader(file)
}

/// Load parameter sets from any CSV reader
pub fn load_parameters_from_reader<R: std::io::Read>(reader: R) -> LoanResult<Vec<LoanParameters>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut loans = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        loans.push(row.into_parameters()?);
    }

    log::debug!("loaded {} loan parameter sets", loans.len());
    Ok(loans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoanError;

    const BATCH: &str = "\
principal,annual_interest_rate,term_years,annual_inflation_rate,deduction_years,tax_rate,deduction_linear_phase_out,deduction_end_rate,repayment_type,investment_return_rate,wealth_tax_rate,borrowing_cost_rate
300000,4,30,2,30,37,false,0,annuity,5,1.2,6
250000,3.5,20,2.5,10,36.93,true,0,lineair,4,1.2,5
";

    #[test]
    fn test_load_from_reader() {
        let loans = load_parameters_from_reader(BATCH.as_bytes()).unwrap();
        assert_eq!(loans.len(), 2);

        assert_eq!(loans[0].principal, 300_000.0);
        assert_eq!(loans[0].repayment_type, RepaymentType::Annuity);

        assert_eq!(loans[1].term_years, 20);
        assert!(loans[1].deduction_linear_phase_out);
        assert_eq!(loans[1].repayment_type, RepaymentType::Linear);
    }

    #[test]
    fn test_unknown_repayment_type() {
        let data = "\
principal,annual_interest_rate,term_years,annual_inflation_rate,deduction_years,tax_rate,repayment_type
100000,4,10,2,10,37,interest-only
";
        let err = load_parameters_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoanError::UnknownRepaymentType(_)));
    }

    #[test]
    fn test_load_json_file() {
        let path = std::env::temp_dir()
            .join(format!("mortgage_calculator_loader_{}.json", std::process::id()));
        // Binary-exact rates so the float comparison below is not at the mercy of parsing
        let params = LoanParameters {
            principal: 250_000.0,
            annual_interest_rate: 4.5,
            term_years: 25,
            annual_inflation_rate: 2.0,
            deduction_years: 10,
            tax_rate: 37.5,
            deduction_linear_phase_out: true,
            deduction_end_rate: 12.5,
            repayment_type: RepaymentType::Linear,
            investment_return_rate: 5.0,
            wealth_tax_rate: 1.25,
            borrowing_cost_rate: 6.0,
        };
        std::fs::write(&path, serde_json::to_string(&params).unwrap()).unwrap();

        let loaded = load_parameters_json(&path).unwrap();
        assert_eq!(loaded, params);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file() {
        let err = load_parameters_csv("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, LoanError::Io(_)));
    }
}
