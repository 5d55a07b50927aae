//! Inflation discounting from nominal to real (time-zero) amounts

use serde::{Deserialize, Serialize};

/// Constant annual inflation used to deflate nominal cashflows
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InflationCurve {
    /// Annual inflation as a fraction (0.02 = 2%)
    pub annual_rate: f64,
}

impl InflationCurve {
    pub fn new(annual_rate: f64) -> Self {
        Self { annual_rate }
    }

    /// Build from a whole-percentage input
    pub fn from_percentage(percentage: f64) -> Self {
        Self::new(percentage / 100.0)
    }

    /// Cumulative price factor after `years`, fractional years allowed
    pub fn factor_at_years(&self, years: f64) -> f64 {
        (1.0 + self.annual_rate).powf(years)
    }

    /// Price factor at the end of `month` (1-indexed).
    ///
    /// Elapsed fractional years are used as the exponent, so month 6 at 2%
    /// is 1.02^0.5 rather than (1 + 0.02/12)^6.
    pub fn factor(&self, month: u32) -> f64 {
        self.factor_at_years(month as f64 / 12.0)
    }

    /// Deflate a nominal amount paid in `month`
    pub fn to_real(&self, amount: f64, month: u32) -> f64 {
        amount / self.factor(month)
    }

    /// Cumulative inflation in percent at `month`
    pub fn cumulative_percent(&self, month: u32) -> f64 {
        (self.factor(month) - 1.0) * 100.0
    }
}
