//! Running state of one amortizing loan leg

use crate::loan::{LoanParameters, RepaymentType};
use super::deduction::DeductionSchedule;

/// Amounts produced by one month of an amortizing leg
#[derive(Debug, Clone, Copy, Default)]
pub struct LegMonth {
    pub principal_paid: f64,
    pub interest_due: f64,
    pub gross_payment: f64,
    pub tax_benefit: f64,
    pub net_interest: f64,
    pub net_payment: f64,
    /// Outstanding balance after this month's repayment
    pub balance: f64,
}

impl LegMonth {
    /// Principal plus interest after the tax benefit
    pub fn net_total(&self) -> f64 {
        self.principal_paid + self.net_interest
    }
}

/// Outstanding balance and fixed terms of a loan being repaid month by month.
///
/// The engine runs one leg for the chosen repayment type and, when comparing,
/// a second leg for the alternate type with its own balance.
#[derive(Debug, Clone)]
pub struct LoanLeg {
    pub repayment_type: RepaymentType,

    /// Outstanding balance at the start of the next month
    pub balance: f64,

    /// Monthly interest rate (fraction)
    pub monthly_rate: f64,

    /// Fixed annuity payment, principal plus interest
    pub annuity_payment: f64,

    /// Fixed linear principal repayment
    pub linear_principal: f64,
}

impl LoanLeg {
    pub fn new(params: &LoanParameters, repayment_type: RepaymentType) -> Self {
        let months = params.total_months();
        let monthly_rate = params.annual_interest_rate / 100.0 / 12.0;

        Self {
            repayment_type,
            balance: params.principal,
            monthly_rate,
            annuity_payment: annuity_payment(params.principal, monthly_rate, months),
            linear_principal: params.principal / months as f64,
        }
    }

    /// Repay one month and return its amounts
    pub fn advance(&mut self, month: u32, deduction: &DeductionSchedule) -> LegMonth {
        let interest_due = self.balance * self.monthly_rate;

        let (principal_paid, gross_payment) = match self.repayment_type {
            RepaymentType::Annuity => (self.annuity_payment - interest_due, self.annuity_payment),
            RepaymentType::Linear => (self.linear_principal, self.linear_principal + interest_due),
        };

        let tax_benefit = deduction.benefit(interest_due, month);
        self.balance -= principal_paid;

        LegMonth {
            principal_paid,
            interest_due,
            gross_payment,
            tax_benefit,
            net_interest: interest_due - tax_benefit,
            net_payment: gross_payment - tax_benefit,
            balance: self.balance,
        }
    }
}

/// Fixed monthly payment `P·r / (1 − (1+r)^−n)`.
///
/// At a zero rate this is the algebraic limit `P/n`.
pub fn annuity_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return principal;
    }
    if monthly_rate.abs() < 1e-12 {
        return principal / months as f64;
    }
    let n = i32::try_from(months).unwrap_or(i32::MAX);
    principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powi(-n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annuity_payment_formula() {
        let payment = annuity_payment(300_000.0, 0.04 / 12.0, 360);
        assert!((payment - 1432.2458863963616).abs() < 1e-6);
    }

    #[test]
    fn test_zero_rate_limit() {
        assert_eq!(annuity_payment(120_000.0, 0.0, 120), 1000.0);
    }

    #[test]
    fn test_leg_tracks_own_balance() {
        let params = LoanParameters {
            principal: 12_000.0,
            annual_interest_rate: 6.0,
            term_years: 1,
            deduction_years: 0,
            ..LoanParameters::default()
        };
        let deduction = DeductionSchedule::from_parameters(&params);
        let mut leg = LoanLeg::new(&params, RepaymentType::Linear);

        let first = leg.advance(1, &deduction);
        assert!((first.principal_paid - 1000.0).abs() < 1e-9);
        assert!((first.interest_due - 60.0).abs() < 1e-9);
        assert!((first.balance - 11_000.0).abs() < 1e-9);
        assert_eq!(first.tax_benefit, 0.0);

        let second = leg.advance(2, &deduction);
        assert!((second.interest_due - 55.0).abs() < 1e-9);
        assert!((second.net_payment - 1055.0).abs() < 1e-9);
    }
}
