//! Interest deduction window with optional linear phase-out

use serde::{Deserialize, Serialize};

use crate::loan::LoanParameters;

/// Tax benefit on paid interest for a bounded number of months
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeductionSchedule {
    /// Deduction rate in month 1 (fraction)
    pub start_rate: f64,

    /// Deduction rate in the last month of the window (fraction).
    /// Only used when `linear_phase_out` is set.
    pub end_rate: f64,

    /// Length of the window in months; month `months` still receives the benefit
    pub months: u32,

    pub linear_phase_out: bool,
}

impl DeductionSchedule {
    pub fn from_parameters(params: &LoanParameters) -> Self {
        Self {
            start_rate: params.tax_rate / 100.0,
            end_rate: params.deduction_end_rate / 100.0,
            months: params.deduction_months(),
            linear_phase_out: params.deduction_linear_phase_out,
        }
    }

    /// Deduction rate applicable in `month` (1-indexed), zero outside the window
    pub fn rate(&self, month: u32) -> f64 {
        if month > self.months {
            return 0.0;
        }
        if !self.linear_phase_out {
            return self.start_rate;
        }

        // A one-month window has no slope; it stays at the start rate
        let progress = if self.months > 1 {
            (month - 1) as f64 / (self.months - 1) as f64
        } else {
            0.0
        };
        self.start_rate - (self.start_rate - self.end_rate) * progress
    }

    /// Tax benefit on `interest` paid in `month`
    pub fn benefit(&self, interest: f64, month: u32) -> f64 {
        interest * self.rate(month)
    }
}
