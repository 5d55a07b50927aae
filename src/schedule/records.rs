//! Schedule output structures

use serde::{Deserialize, Serialize};

use crate::comparison::LinearComparison;
use crate::investment::InvestmentOutcome;
use crate::loan::RepaymentType;

/// One month of the amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthRecord {
    // Timing
    pub month: u32,
    pub year: u32,

    // Nominal amounts
    pub principal_paid: f64,
    pub gross_interest: f64,
    pub net_interest: f64,
    pub tax_benefit: f64,
    pub net_payment: f64,
    pub balance: f64,

    // Real (time-zero) amounts
    pub principal_paid_real: f64,
    pub net_interest_real: f64,
    pub tax_benefit_real: f64,
    pub net_payment_real: f64,
    pub cumulative_inflation_percent: f64,

    // Comparison with the alternate repayment type (zero when not compared)
    pub alternate_total: f64,
    pub alternate_total_real: f64,
    /// Chosen total minus alternate total; positive when the chosen type costs more
    pub delta: f64,
    pub delta_real: f64,
}

impl MonthRecord {
    /// Create a record with all amounts zeroed
    pub fn new(month: u32) -> Self {
        Self {
            month,
            year: (month.saturating_sub(1)) / 12 + 1,
            principal_paid: 0.0,
            gross_interest: 0.0,
            net_interest: 0.0,
            tax_benefit: 0.0,
            net_payment: 0.0,
            balance: 0.0,
            principal_paid_real: 0.0,
            net_interest_real: 0.0,
            tax_benefit_real: 0.0,
            net_payment_real: 0.0,
            cumulative_inflation_percent: 0.0,
            alternate_total: 0.0,
            alternate_total_real: 0.0,
            delta: 0.0,
            delta_real: 0.0,
        }
    }

    /// Principal plus net interest for the chosen repayment type
    pub fn chosen_total(&self) -> f64 {
        self.principal_paid + self.net_interest
    }

    pub fn chosen_total_real(&self) -> f64 {
        self.principal_paid_real + self.net_interest_real
    }
}

/// Complete schedule for one parameter set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub repayment_type: RepaymentType,

    /// Annuity: the fixed payment. Linear: month 1 gross payment.
    pub first_month_payment: f64,

    /// Average real monthly payment after the tax benefit
    pub real_average_payment: f64,

    pub total_nominal: f64,
    pub total_real: f64,

    /// Total paid above the principal
    pub surplus_nominal: f64,
    pub surplus_real: f64,
    pub surplus_nominal_per_month: f64,
    pub surplus_real_per_month: f64,

    pub months: Vec<MonthRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment: Option<InvestmentOutcome>,

    /// Extra cost of a linear loan; only present when annuity is chosen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linear_comparison: Option<LinearComparison>,
}

impl ScheduleResult {
    /// Aggregate month records into calendar years of the loan
    pub fn yearly_overview(&self) -> Vec<YearSummary> {
        let mut years: Vec<YearSummary> = Vec::new();

        for record in &self.months {
            if years.last().map(|y| y.year) != Some(record.year) {
                years.push(YearSummary::new(record.year));
            }
            if let Some(year) = years.last_mut() {
                year.add(record);
            }
        }

        years
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            total_months: self.months.len() as u32,
            total_principal: self.months.iter().map(|r| r.principal_paid).sum(),
            total_gross_interest: self.months.iter().map(|r| r.gross_interest).sum(),
            total_tax_benefit: self.months.iter().map(|r| r.tax_benefit).sum(),
            total_nominal: self.total_nominal,
            total_real: self.total_real,
            final_balance: self.months.last().map(|r| r.balance).unwrap_or(0.0),
        }
    }
}

/// Yearly totals of the schedule
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: u32,
    pub principal_paid: f64,
    pub net_interest: f64,
    pub tax_benefit: f64,
    pub principal_paid_real: f64,
    pub net_interest_real: f64,
    pub tax_benefit_real: f64,
    /// Cumulative inflation at the last month of the year
    pub cumulative_inflation_percent: f64,
}

impl YearSummary {
    fn new(year: u32) -> Self {
        Self { year, ..Default::default() }
    }

    fn add(&mut self, record: &MonthRecord) {
        self.principal_paid += record.principal_paid;
        self.net_interest += record.net_interest;
        self.tax_benefit += record.tax_benefit;
        self.principal_paid_real += record.principal_paid_real;
        self.net_interest_real += record.net_interest_real;
        self.tax_benefit_real += record.tax_benefit_real;
        self.cumulative_inflation_percent = record.cumulative_inflation_percent;
    }

    pub fn total(&self) -> f64 {
        self.principal_paid + self.net_interest
    }

    pub fn total_real(&self) -> f64 {
        self.principal_paid_real + self.net_interest_real
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_months: u32,
    pub total_principal: f64,
    pub total_gross_interest: f64,
    pub total_tax_benefit: f64,
    pub total_nominal: f64,
    pub total_real: f64,
    pub final_balance: f64,
}
