//! API request/response models.

use serde::{Deserialize, Serialize};
use sipcalc_domain::SipResult;
use utoipa::ToSchema;

/// Body of `POST /calculate`.
///
/// Only used for documentation: the handler reads the body as untyped JSON so
/// that every malformed input maps to the same error. Numeric strings such as
/// `"1000"` are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculateRequest {
    /// Contribution per month.
    #[schema(example = 1000.0)]
    pub monthly_investment: f64,
    /// Expected annual return in percent.
    #[schema(example = 12.0)]
    pub annual_rate: f64,
    /// Investment horizon in years.
    #[schema(example = 1.0)]
    pub time_period: f64,
}

/// Successful projection, every field rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalculateResponse {
    /// Portfolio value at the end of the horizon.
    #[schema(example = 12809.33)]
    pub future_value: f64,
    /// Total principal contributed.
    #[schema(example = 12000.0)]
    pub invested_amount: f64,
    /// Future value minus invested amount.
    #[schema(example = 809.33)]
    pub estimated_gain: f64,
}

impl From<SipResult> for CalculateResponse {
    fn from(result: SipResult) -> Self {
        let rounded = result.rounded();
        Self {
            future_value: rounded.future_value,
            invested_amount: rounded.invested_amount,
            estimated_gain: rounded.estimated_gain,
        }
    }
}

/// Error payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable message.
    #[schema(example = "Invalid input parameters")]
    pub error: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
}
