//! Amortization engine for annuity and linear schedules

mod state;
mod engine;
mod records;
mod deduction;
mod inflation;

pub use state::{annuity_payment, LegMonth, LoanLeg};
pub use engine::{calculate, ScheduleConfig, ScheduleEngine};
pub use records::{MonthRecord, ScheduleResult, ScheduleSummary, YearSummary};
pub use deduction::DeductionSchedule;
pub use inflation::InflationCurve;
