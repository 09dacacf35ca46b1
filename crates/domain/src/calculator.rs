//! SIP future value projection.

use crate::math::annuity::{future_value_annuity_due, monthly_rate, number_of_months};
use crate::value_objects::{SipRequest, SipResult};

/// Computes the future value of a fixed monthly contribution.
///
/// Stateless; one instance can serve any number of callers concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct SipCalculator;

impl SipCalculator {
    /// Creates a new calculator.
    pub fn new() -> Self {
        Self
    }

    /// Projects a SIP using monthly annuity-due compounding.
    ///
    /// Total over finite input. Extreme horizons or rates may overflow to
    /// infinity or NaN, which is returned as is.
    #[must_use]
    pub fn compute(&self, request: &SipRequest) -> SipResult {
        calculate_sip(
            request.monthly_investment,
            request.annual_rate,
            request.time_period,
        )
    }
}

/// Calculates future value, invested amount and estimated gain (unrounded).
///
/// # Arguments
///
/// * `monthly_investment` - Contribution per month
/// * `annual_rate` - Expected annual return in percent
/// * `time_period` - Horizon in years
#[must_use]
pub fn calculate_sip(monthly_investment: f64, annual_rate: f64, time_period: f64) -> SipResult {
    let rate = monthly_rate(annual_rate);
    let months = number_of_months(time_period);

    let future_value = future_value_annuity_due(monthly_investment, rate, months);
    let invested_amount = monthly_investment * months;

    SipResult {
        future_value,
        invested_amount,
        estimated_gain: future_value - invested_amount,
    }
}
