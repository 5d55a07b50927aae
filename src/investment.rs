//! Side investment account fed by the monthly cost difference between repayment types
//!
//! Each year's summed difference is deposited (or withdrawn) and the balance at
//! the start of the year earns a return and pays wealth tax when positive, or
//! pays borrowing cost when negative. Two real figures are reported: the
//! nominal trajectory deflated once at the end of the term, and a running
//! track compounded on already-deflated monthly differences.

use serde::{Deserialize, Serialize};

use crate::loan::{LoanParameters, RepaymentType};
use crate::schedule::{InflationCurve, MonthRecord};

/// One year of the investment account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentYear {
    pub year: u32,
    /// Deposit for the year (negative = withdrawal)
    pub delta: f64,
    pub delta_real: f64,
    pub return_earned: f64,
    pub wealth_tax: f64,
    pub borrowing_cost: f64,
    /// Nominal balance at year end
    pub balance: f64,
    /// Running real-track balance at year end
    pub balance_real_running: f64,
}

/// Result of the investment simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentOutcome {
    /// Final nominal balance
    pub balance_nominal: f64,
    /// Final nominal balance deflated by total inflation over the term
    pub balance_real: f64,
    /// Final balance of the running real track
    pub balance_real_running: f64,
    pub years: Vec<InvestmentYear>,
}

/// Annual rates applied to the start-of-year balance
#[derive(Debug, Clone, Copy)]
struct AccountRates {
    return_rate: f64,
    wealth_tax_rate: f64,
    borrowing_cost_rate: f64,
}

impl AccountRates {
    /// (return, wealth tax, borrowing cost) on a start-of-year balance
    fn charges(&self, balance: f64) -> (f64, f64, f64) {
        if balance > 0.0 {
            (balance * self.return_rate, balance * self.wealth_tax_rate, 0.0)
        } else if balance < 0.0 {
            (0.0, 0.0, balance.abs() * self.borrowing_cost_rate)
        } else {
            (0.0, 0.0, 0.0)
        }
    }
}

/// Monthly deposit into the account.
///
/// Linear uses the recorded delta (linear minus annuity). Annuity uses the
/// opposite sign, alternate minus chosen, which is the same linear-minus-annuity
/// difference seen from the other side.
fn monthly_deposit(repayment_type: RepaymentType, record: &MonthRecord) -> (f64, f64) {
    match repayment_type {
        RepaymentType::Linear => (record.delta, record.delta_real),
        RepaymentType::Annuity => (
            record.alternate_total - record.chosen_total(),
            record.alternate_total_real - record.chosen_total_real(),
        ),
    }
}

/// Run the investment account over the schedule's months in yearly buckets.
///
/// Expects records computed with the alternate comparison enabled.
pub fn simulate_investment(params: &LoanParameters, months: &[MonthRecord]) -> InvestmentOutcome {
    let rates = AccountRates {
        return_rate: params.investment_return_rate / 100.0,
        wealth_tax_rate: params.wealth_tax_rate / 100.0,
        borrowing_cost_rate: params.borrowing_cost_rate / 100.0,
    };
    let inflation = InflationCurve::from_percentage(params.annual_inflation_rate);

    let mut balance = 0.0;
    let mut balance_real_running = 0.0;
    let mut years = Vec::with_capacity(months.len().div_ceil(12));

    for (index, bucket) in months.chunks(12).enumerate() {
        let (delta, delta_real) = bucket
            .iter()
            .map(|record| monthly_deposit(params.repayment_type, record))
            .fold((0.0, 0.0), |(n, r), (dn, dr)| (n + dn, r + dr));

        let (return_earned, wealth_tax, borrowing_cost) = rates.charges(balance);
        let (return_real, wealth_tax_real, borrowing_cost_real) = rates.charges(balance_real_running);

        balance += delta + return_earned - wealth_tax - borrowing_cost;
        balance_real_running += delta_real + return_real - wealth_tax_real - borrowing_cost_real;

        years.push(InvestmentYear {
            year: index as u32 + 1,
            delta,
            delta_real,
            return_earned,
            wealth_tax,
            borrowing_cost,
            balance,
            balance_real_running,
        });
    }

    let total_years = months.len() as f64 / 12.0;
    let balance_real = balance / inflation.factor_at_years(total_years);

    log::debug!(
        "investment account after {} years: {:.2} nominal, {:.2} real, {:.2} running real",
        years.len(),
        balance,
        balance_real,
        balance_real_running
    );

    InvestmentOutcome {
        balance_nominal: balance,
        balance_real,
        balance_real_running,
        years,
    }
}
