/// Annuity-due future value formula and period conversions.
pub mod annuity;
/// Rounding of monetary figures to cents.
pub mod rounding;
