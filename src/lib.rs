//! Mortgage Calculator - amortization engine for annuity and linear mortgages
//!
//! This library provides:
//! - Month-by-month annuity and linear amortization schedules
//! - Interest deduction benefit over a bounded window, optionally phased out linearly
//! - Inflation-adjusted (real) counterparts of every nominal amount
//! - Per-month comparison against the alternate repayment type
//! - A side investment account simulation fed by the monthly difference
//! - Currency/percentage formatting and Dutch/English label tables for presentation

pub mod error;
pub mod loan;
pub mod schedule;
pub mod comparison;
pub mod investment;
pub mod format;
pub mod i18n;

// Re-export commonly used types
pub use error::LoanError;
pub use loan::{LoanParameters, RepaymentType};
pub use schedule::{calculate, MonthRecord, ScheduleConfig, ScheduleEngine, ScheduleResult};
pub use comparison::{linear_extra_costs, LinearComparison};
pub use investment::{simulate_investment, InvestmentOutcome};

/// Standard result type for mortgage calculations
pub type LoanResult<T> = Result<T, LoanError>;
