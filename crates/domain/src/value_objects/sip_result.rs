use crate::math::rounding::round_to_cents;
use serde::{Deserialize, Serialize};

/// Projected outcome of a SIP.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipResult {
    /// Portfolio value at the end of the horizon.
    pub future_value: f64,
    /// Total principal contributed.
    pub invested_amount: f64,
    /// `future_value - invested_amount`.
    pub estimated_gain: f64,
}

impl SipResult {
    /// Returns a copy with every field rounded to cents independently.
    ///
    /// Because each field is rounded on its own, the rounded gain may differ from
    /// the difference of the rounded value and principal by one cent.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            future_value: round_to_cents(self.future_value),
            invested_amount: round_to_cents(self.invested_amount),
            estimated_gain: round_to_cents(self.estimated_gain),
        }
    }
}
