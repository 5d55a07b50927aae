//! What a linear loan would cost instead of the chosen one
//!
//! Independent of the per-month shadow leg: this reruns the whole schedule
//! with the repayment type forced to linear and reports its cost above principal.

use serde::{Deserialize, Serialize};

use crate::loan::{LoanParameters, RepaymentType};
use crate::schedule::{ScheduleConfig, ScheduleEngine};

/// Cost of a linear loan above its principal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearComparison {
    pub extra_costs: f64,
    pub extra_costs_real: f64,
    pub extra_costs_monthly: f64,
    pub extra_costs_real_monthly: f64,
}

/// Recompute the schedule as a linear loan and return its surplus over principal.
///
/// Comparison outputs are disabled for the rerun so it never recurses.
pub fn linear_extra_costs(params: &LoanParameters) -> LinearComparison {
    let linear = params.with_repayment_type(RepaymentType::Linear);
    let schedule = ScheduleEngine::new(ScheduleConfig::schedule_only()).compute(&linear);

    LinearComparison {
        extra_costs: schedule.surplus_nominal,
        extra_costs_real: schedule.surplus_real,
        extra_costs_monthly: schedule.surplus_nominal_per_month,
        extra_costs_real_monthly: schedule.surplus_real_per_month,
    }
}
