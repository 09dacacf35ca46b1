//! Cent rounding for published monetary figures.

use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::*;

/// Number of decimal places published for every monetary field.
pub const CENT_DECIMALS: u32 = 2;

/// Rounds a monetary value to 2 decimal places, ties away from zero.
///
/// The value goes through its shortest decimal representation before rounding, so
/// `1.005` rounds to `1.01` rather than to the binary neighbour `1.00`.
/// Magnitudes `Decimal` cannot hold fall back to float scaling; NaN and the
/// infinities are returned unchanged.
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    Decimal::from_str(&value.to_string())
        .ok()
        .map(|d| d.round_dp_with_strategy(CENT_DECIMALS, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or_else(|| round_float(value))
}

// Above 2^53 an f64 has no fractional part left at cent scale.
const MAX_EXACT_SCALED: f64 = 9_007_199_254_740_992.0;

fn round_float(value: f64) -> f64 {
    let scale = 10f64.powi(CENT_DECIMALS as i32);
    let scaled = value * scale;
    if scaled.abs() >= MAX_EXACT_SCALED {
        value
    } else {
        scaled.round() / scale
    }
}
