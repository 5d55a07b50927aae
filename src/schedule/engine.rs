//! Core amortization engine for monthly mortgage schedules

use crate::comparison::linear_extra_costs;
use crate::investment::simulate_investment;
use crate::loan::{LoanParameters, RepaymentType};
use crate::LoanResult;
use super::deduction::DeductionSchedule;
use super::inflation::InflationCurve;
use super::records::{MonthRecord, ScheduleResult};
use super::state::{LegMonth, LoanLeg};

/// Configuration for a schedule run
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Run a shadow leg of the alternate repayment type and record the monthly delta
    pub compare_alternate: bool,

    /// Fold the monthly deltas into the investment account simulation.
    /// Needs `compare_alternate`.
    pub simulate_investment: bool,

    /// Attach the extra cost of a linear loan when annuity is chosen
    pub linear_extra_costs: bool,
}

impl ScheduleConfig {
    /// Only the chosen schedule, no comparison outputs
    pub fn schedule_only() -> Self {
        Self {
            compare_alternate: false,
            simulate_investment: false,
            linear_extra_costs: false,
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            compare_alternate: true,
            simulate_investment: true,
            linear_extra_costs: true,
        }
    }
}

/// Main amortization engine
#[derive(Debug, Clone, Default)]
pub struct ScheduleEngine {
    config: ScheduleConfig,
}

impl ScheduleEngine {
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Compute the full schedule.
    ///
    /// Expects parameters that passed [`LoanParameters::validate`]; over that
    /// domain every output is finite.
    pub fn compute(&self, params: &LoanParameters) -> ScheduleResult {
        let months = params.total_months();
        let deduction = DeductionSchedule::from_parameters(params);
        let inflation = InflationCurve::from_percentage(params.annual_inflation_rate);

        let mut primary = LoanLeg::new(params, params.repayment_type);
        let mut shadow = self
            .config
            .compare_alternate
            .then(|| LoanLeg::new(params, params.repayment_type.alternate()));

        let mut records = Vec::with_capacity(months as usize);
        let mut total_nominal = 0.0;
        let mut total_real = 0.0;

        for month in 1..=months {
            let leg = primary.advance(month, &deduction);
            let alternate = shadow.as_mut().map(|s| s.advance(month, &deduction));

            let record = self.build_record(month, &leg, alternate.as_ref(), &inflation);
            total_nominal += leg.net_payment;
            total_real += record.net_payment_real;
            records.push(record);
        }

        let first_month_payment = match params.repayment_type {
            RepaymentType::Annuity => primary.annuity_payment,
            RepaymentType::Linear => records
                .first()
                .map(|r| r.principal_paid + r.net_interest + r.tax_benefit)
                .unwrap_or(0.0),
        };

        // Validation rejects empty terms; the floor keeps the averages finite regardless
        let n = months.max(1) as f64;
        let surplus_nominal = total_nominal - params.principal;
        let surplus_real = total_real - params.principal;

        let mut result = ScheduleResult {
            repayment_type: params.repayment_type,
            first_month_payment,
            real_average_payment: total_real / n,
            total_nominal,
            total_real,
            surplus_nominal,
            surplus_real,
            surplus_nominal_per_month: surplus_nominal / n,
            surplus_real_per_month: surplus_real / n,
            months: records,
            investment: None,
            linear_comparison: None,
        };

        if self.config.simulate_investment {
            if self.config.compare_alternate {
                result.investment = Some(simulate_investment(params, &result.months));
            } else {
                log::debug!("investment simulation skipped: alternate comparison is disabled");
            }
        }

        if self.config.linear_extra_costs && params.repayment_type == RepaymentType::Annuity {
            result.linear_comparison = Some(linear_extra_costs(params));
        }

        log::debug!(
            "{} schedule over {} months: total {:.2} nominal, {:.2} real, first payment {:.2}",
            params.repayment_type,
            months,
            result.total_nominal,
            result.total_real,
            result.first_month_payment
        );

        result
    }

    /// Build the record for one month, deflating every amount by the month's price factor
    fn build_record(
        &self,
        month: u32,
        leg: &LegMonth,
        alternate: Option<&LegMonth>,
        inflation: &InflationCurve,
    ) -> MonthRecord {
        let factor = inflation.factor(month);
        let mut record = MonthRecord::new(month);

        record.principal_paid = leg.principal_paid;
        record.gross_interest = leg.interest_due;
        record.net_interest = leg.net_interest;
        record.tax_benefit = leg.tax_benefit;
        record.net_payment = leg.net_payment;
        record.balance = leg.balance;

        record.principal_paid_real = leg.principal_paid / factor;
        record.net_interest_real = leg.net_interest / factor;
        record.tax_benefit_real = leg.tax_benefit / factor;
        record.net_payment_real = leg.net_payment / factor;
        record.cumulative_inflation_percent = (factor - 1.0) * 100.0;

        if let Some(alternate) = alternate {
            record.alternate_total = alternate.net_total();
            record.alternate_total_real = record.alternate_total / factor;
            record.delta = leg.net_total() - record.alternate_total;
            record.delta_real = record.delta / factor;
        }

        record
    }
}

/// Validate the parameters, then compute the schedule with the default configuration
pub fn calculate(params: &LoanParameters) -> LoanResult<ScheduleResult> {
    params.validate()?;
    Ok(ScheduleEngine::default().compute(params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_params(repayment_type: RepaymentType) -> LoanParameters {
        LoanParameters {
            principal: 300_000.0,
            annual_interest_rate: 4.0,
            term_years: 30,
            annual_inflation_rate: 2.0,
            deduction_years: 30,
            tax_rate: 37.0,
            deduction_linear_phase_out: false,
            deduction_end_rate: 0.0,
            repayment_type,
            investment_return_rate: 5.0,
            wealth_tax_rate: 1.2,
            borrowing_cost_rate: 6.0,
        }
    }

    #[test]
    fn test_annuity_reference_scenario() {
        let result = calculate(&reference_params(RepaymentType::Annuity)).unwrap();

        assert_eq!(result.months.len(), 360);
        assert!((result.first_month_payment - 1432.25).abs() < 0.01);

        let first = &result.months[0];
        assert!((first.gross_interest - 1000.0).abs() < 1e-9);
        assert!((first.tax_benefit - 370.0).abs() < 1e-9);
        assert!((first.principal_paid - 432.2458863963616).abs() < 1e-6);

        assert_relative_eq!(result.total_nominal, 435_833.36703469063, max_relative = 1e-9);
        assert_relative_eq!(result.total_real, 323_582.1569906699, max_relative = 1e-9);
    }

    #[test]
    fn test_annuity_balance_reaches_zero() {
        let params = reference_params(RepaymentType::Annuity);
        let result = ScheduleEngine::default().compute(&params);

        let final_balance = result.months.last().unwrap().balance;
        assert!(final_balance.abs() < 1e-6 * params.principal);
        assert!((result.summary().total_principal - params.principal).abs() < 1e-6 * params.principal);
    }

    #[test]
    fn test_linear_reference_scenario() {
        let result = calculate(&reference_params(RepaymentType::Linear)).unwrap();

        let first = &result.months[0];
        let last = result.months.last().unwrap();
        assert!((first.principal_paid - 833.33).abs() < 0.01);
        assert!((first.gross_interest - 1000.0).abs() < 1e-9);
        assert!((last.gross_interest - 2.78).abs() < 0.01);

        // Linear first payment is the month 1 gross payment
        assert!((result.first_month_payment - 1833.3333333333335).abs() < 1e-6);
        assert_relative_eq!(result.total_nominal, 413_715.0, max_relative = 1e-9);
    }

    #[test]
    fn test_linear_principal_constant_and_interest_decreasing() {
        let result = ScheduleEngine::default().compute(&reference_params(RepaymentType::Linear));

        let principal = result.months[0].principal_paid;
        for pair in result.months.windows(2) {
            assert_eq!(pair[1].principal_paid, principal);
            assert!(pair[1].gross_interest < pair[0].gross_interest);
        }
    }

    #[test]
    fn test_totals_are_consistent() {
        for repayment_type in [RepaymentType::Annuity, RepaymentType::Linear] {
            let params = reference_params(repayment_type);
            let result = ScheduleEngine::default().compute(&params);
            let n = params.total_months() as f64;

            assert!((params.principal + result.surplus_nominal - result.total_nominal).abs() < 1e-6);
            assert!((result.real_average_payment * n - result.total_real).abs() < 1e-6);
            assert!((result.surplus_nominal_per_month * n - result.surplus_nominal).abs() < 1e-6);
            assert!((result.surplus_real_per_month * n - result.surplus_real).abs() < 1e-6);
        }
    }

    #[test]
    fn test_no_benefit_after_deduction_window() {
        let params = LoanParameters {
            deduction_years: 10,
            ..reference_params(RepaymentType::Annuity)
        };
        let result = ScheduleEngine::default().compute(&params);

        assert!(result.months[119].tax_benefit > 0.0);
        for record in &result.months[120..] {
            assert_eq!(record.tax_benefit, 0.0);
            assert_eq!(record.net_interest, record.gross_interest);
        }
    }

    #[test]
    fn test_linear_phase_out() {
        let params = LoanParameters {
            deduction_years: 10,
            tax_rate: 36.93,
            deduction_linear_phase_out: true,
            deduction_end_rate: 0.0,
            ..reference_params(RepaymentType::Annuity)
        };
        let result = calculate(&params).unwrap();

        assert!((result.months[0].tax_benefit - 369.3).abs() < 1e-9);
        assert!((result.months[59].tax_benefit - 168.74127397636187).abs() < 1e-6);
        assert!(result.months[119].tax_benefit.abs() < 1e-9);
        assert_eq!(result.months[120].tax_benefit, 0.0);
    }

    #[test]
    fn test_zero_inflation_real_equals_nominal() {
        let params = LoanParameters {
            annual_inflation_rate: 0.0,
            ..reference_params(RepaymentType::Linear)
        };
        let result = ScheduleEngine::default().compute(&params);

        for record in &result.months {
            assert_eq!(record.principal_paid_real, record.principal_paid);
            assert_eq!(record.net_interest_real, record.net_interest);
            assert_eq!(record.tax_benefit_real, record.tax_benefit);
            assert_eq!(record.net_payment_real, record.net_payment);
            assert_eq!(record.cumulative_inflation_percent, 0.0);
        }
        assert_eq!(result.total_real, result.total_nominal);
    }

    #[test]
    fn test_zero_interest_rate() {
        let params = LoanParameters {
            annual_interest_rate: 0.0,
            annual_inflation_rate: 0.0,
            ..reference_params(RepaymentType::Annuity)
        };
        let result = calculate(&params).unwrap();

        assert!((result.first_month_payment - 833.3333333333334).abs() < 1e-9);
        assert!((result.total_nominal - 300_000.0).abs() < 1e-6);
        assert!(result.surplus_nominal.abs() < 1e-6);
        assert!(result.months.iter().all(|r| r.tax_benefit == 0.0));
    }

    #[test]
    fn test_delta_sign_flips_with_repayment_type() {
        let annuity = ScheduleEngine::default().compute(&reference_params(RepaymentType::Annuity));
        let linear = ScheduleEngine::default().compute(&reference_params(RepaymentType::Linear));

        // Linear costs more in month 1 because it repays more principal
        assert!(linear.months[0].delta > 0.0);
        assert!((linear.months[0].delta - 401.0874469369719).abs() < 1e-6);

        for (a, l) in annuity.months.iter().zip(&linear.months) {
            assert!((l.delta + a.delta).abs() < 1e-9, "month {}", a.month);
            assert!((a.alternate_total - l.chosen_total()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_schedule_only_config() {
        let engine = ScheduleEngine::new(ScheduleConfig::schedule_only());
        let result = engine.compute(&reference_params(RepaymentType::Annuity));

        assert!(result.investment.is_none());
        assert!(result.linear_comparison.is_none());
        assert!(result.months.iter().all(|r| r.delta == 0.0 && r.alternate_total == 0.0));
    }

    #[test]
    fn test_linear_comparison_only_for_annuity() {
        let annuity = calculate(&reference_params(RepaymentType::Annuity)).unwrap();
        let linear = calculate(&reference_params(RepaymentType::Linear)).unwrap();

        assert!(annuity.linear_comparison.is_some());
        assert!(linear.linear_comparison.is_none());
        assert!(annuity.investment.is_some());
        assert!(linear.investment.is_some());
    }

    #[test]
    fn test_invalid_parameters_fail_fast() {
        let params = LoanParameters {
            term_years: 0,
            ..reference_params(RepaymentType::Annuity)
        };
        assert!(calculate(&params).is_err());

        let huge_window = LoanParameters {
            deduction_years: 400_000_000,
            ..reference_params(RepaymentType::Annuity)
        };
        assert!(calculate(&huge_window).is_err());
    }

    #[test]
    fn test_deduction_window_longer_than_term() {
        let params = LoanParameters {
            term_years: 5,
            deduction_years: 100,
            ..reference_params(RepaymentType::Linear)
        };
        let result = calculate(&params).unwrap();
        assert_eq!(result.months.len(), 60);
        assert!(result.months.iter().all(|m| m.tax_benefit > 0.0));
    }

    #[test]
    fn test_yearly_overview() {
        let result = calculate(&reference_params(RepaymentType::Annuity)).unwrap();
        let years = result.yearly_overview();

        assert_eq!(years.len(), 30);
        assert_eq!(years[0].year, 1);
        assert_eq!(years[29].year, 30);

        let principal: f64 = years.iter().map(|y| y.principal_paid).sum();
        assert!((principal - 300_000.0).abs() < 1e-3);

        // 2% inflation over the first full year
        assert!((years[0].cumulative_inflation_percent - 2.0).abs() < 1e-9);
    }
}
