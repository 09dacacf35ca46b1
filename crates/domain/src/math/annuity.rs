//! Monthly compounding helpers.

/// Months in a year, used for both rate and period conversion.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Converts an annual percentage rate (e.g. `12.0` for 12%) into a monthly decimal rate.
///
/// formula: i = (annual_rate / 100) / 12
#[must_use]
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    (annual_rate_percent / 100.0) / MONTHS_PER_YEAR
}

/// Converts a horizon in years into a (possibly fractional) number of monthly periods.
#[must_use]
pub fn number_of_months(years: f64) -> f64 {
    years * MONTHS_PER_YEAR
}

/// Future value of a series of equal contributions made at the start of each period.
///
/// formula: FV = P * ((1 + i)^n - 1) / i * (1 + i)
///
/// When `rate` is exactly zero the compound expression degenerates to 0/0, so the
/// limit `P * n` is returned instead.
///
/// # Arguments
///
/// * `payment` - Contribution per period
/// * `rate` - Decimal rate per period (e.g. `0.01` for 1%)
/// * `periods` - Number of periods, fractional values allowed
#[must_use]
pub fn future_value_annuity_due(payment: f64, rate: f64, periods: f64) -> f64 {
    if rate == 0.0 {
        return payment * periods;
    }

    let growth = (1.0 + rate).powf(periods);
    payment * ((growth - 1.0) / rate) * (1.0 + rate)
}
