use serde::{Deserialize, Serialize};

/// Inputs of a single SIP projection.
///
/// No range checks are applied: zero, negative and fractional values are all
/// computed as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipRequest {
    /// Contribution per month, in currency units.
    pub monthly_investment: f64,
    /// Expected return, percent per year (`12.0` means 12%).
    pub annual_rate: f64,
    /// Investment horizon in years.
    pub time_period: f64,
}

impl SipRequest {
    pub fn new(monthly_investment: f64, annual_rate: f64, time_period: f64) -> Self {
        Self {
            monthly_investment,
            annual_rate,
            time_period,
        }
    }
}
