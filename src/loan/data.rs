//! Loan parameter structures and input validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LoanError;
use crate::LoanResult;

/// Repayment scheme of the loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepaymentType {
    /// Fixed total monthly payment
    Annuity,
    /// Fixed monthly principal repayment
    Linear,
}

impl RepaymentType {
    /// The repayment type this one is compared against
    pub fn alternate(self) -> Self {
        match self {
            RepaymentType::Annuity => RepaymentType::Linear,
            RepaymentType::Linear => RepaymentType::Annuity,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RepaymentType::Annuity => "annuity",
            RepaymentType::Linear => "linear",
        }
    }
}

impl fmt::Display for RepaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepaymentType {
    type Err = LoanError;

    /// Accepts the English names as well as the Dutch `annuiteit` / `lineair`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annuity" | "annuiteit" => Ok(RepaymentType::Annuity),
            "linear" | "lineair" => Ok(RepaymentType::Linear),
            other => Err(LoanError::UnknownRepaymentType(other.to_string())),
        }
    }
}

/// Input parameters for a single mortgage calculation.
///
/// All rates are whole percentages (4.0 = 4%); the engine normalizes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Loan amount
    pub principal: f64,

    /// Nominal annual interest rate (%)
    pub annual_interest_rate: f64,

    /// Loan term in whole years
    pub term_years: u32,

    /// Expected annual inflation (%)
    pub annual_inflation_rate: f64,

    /// Number of years interest is tax deductible
    pub deduction_years: u32,

    /// Marginal tax rate applied to deductible interest (%)
    pub tax_rate: f64,

    /// Phase the deduction rate out linearly over the deduction window
    #[serde(default)]
    pub deduction_linear_phase_out: bool,

    /// Deduction rate reached in the last month of the window (%)
    #[serde(default)]
    pub deduction_end_rate: f64,

    pub repayment_type: RepaymentType,

    /// Annual return on the side investment account (%)
    #[serde(default)]
    pub investment_return_rate: f64,

    /// Annual wealth tax on a positive investment balance (%)
    #[serde(default)]
    pub wealth_tax_rate: f64,

    /// Annual cost of carrying a negative investment balance (%)
    #[serde(default)]
    pub borrowing_cost_rate: f64,
}

/// Longest term and deduction window accepted by [`LoanParameters::validate`]
pub const MAX_TERM_YEARS: u32 = 100;

impl Default for LoanParameters {
    fn default() -> Self {
        Self {
            principal: 670_000.0,
            annual_interest_rate: 4.32,
            term_years: 30,
            annual_inflation_rate: 2.0,
            deduction_years: 10,
            tax_rate: 36.93,
            deduction_linear_phase_out: false,
            deduction_end_rate: 0.0,
            repayment_type: RepaymentType::Annuity,
            investment_return_rate: 5.0,
            wealth_tax_rate: 1.2,
            borrowing_cost_rate: 6.0,
        }
    }
}

impl LoanParameters {
    /// Total number of monthly payments
    pub fn total_months(&self) -> u32 {
        self.term_years.saturating_mul(12)
    }

    /// Number of months in which the interest deduction applies
    pub fn deduction_months(&self) -> u32 {
        self.deduction_years.saturating_mul(12)
    }

    /// Copy of these parameters with a different repayment type
    pub fn with_repayment_type(&self, repayment_type: RepaymentType) -> Self {
        Self {
            repayment_type,
            ..self.clone()
        }
    }

    /// Check that the engine can run on these parameters.
    ///
    /// The engine itself never fails; every rejected combination here would
    /// otherwise produce a meaningless or non-finite schedule.
    pub fn validate(&self) -> LoanResult<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(LoanError::invalid("principal", "must be a positive amount"));
        }
        if self.term_years == 0 {
            return Err(LoanError::invalid("term_years", "must be at least one year"));
        }
        if self.term_years > MAX_TERM_YEARS {
            return Err(LoanError::invalid("term_years", "must be at most 100 years"));
        }
        if self.deduction_years > MAX_TERM_YEARS {
            return Err(LoanError::invalid("deduction_years", "must be at most 100 years"));
        }
        if !self.annual_interest_rate.is_finite() || self.annual_interest_rate < 0.0 {
            return Err(LoanError::invalid(
                "annual_interest_rate",
                "must be zero or a positive percentage",
            ));
        }
        if !self.annual_inflation_rate.is_finite() || self.annual_inflation_rate <= -100.0 {
            return Err(LoanError::invalid(
                "annual_inflation_rate",
                "must be greater than -100%",
            ));
        }
        check_percentage("tax_rate", self.tax_rate)?;
        check_percentage("deduction_end_rate", self.deduction_end_rate)?;
        if self.deduction_linear_phase_out && self.deduction_years == 0 {
            return Err(LoanError::invalid(
                "deduction_years",
                "linear phase-out needs a deduction window of at least one year",
            ));
        }
        for (field, value) in [
            ("investment_return_rate", self.investment_return_rate),
            ("wealth_tax_rate", self.wealth_tax_rate),
            ("borrowing_cost_rate", self.borrowing_cost_rate),
        ] {
            if !value.is_finite() {
                return Err(LoanError::invalid(field, "must be a finite percentage"));
            }
        }

        if self.deduction_years > self.term_years {
            log::warn!(
                "deduction window of {} years exceeds the {} year term; benefit stops at loan end",
                self.deduction_years,
                self.term_years
            );
        }
        if self.deduction_linear_phase_out && self.deduction_end_rate > self.tax_rate {
            log::warn!(
                "deduction end rate {}% is above the start rate {}%; phase-out will increase the benefit",
                self.deduction_end_rate,
                self.tax_rate
            );
        }

        Ok(())
    }
}

fn check_percentage(field: &str, value: f64) -> LoanResult<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(LoanError::invalid(field, "must be between 0 and 100"));
    }
    Ok(())
}
