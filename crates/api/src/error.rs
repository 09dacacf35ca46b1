//! API error type and its HTTP mapping.

use crate::handlers::INVALID_INPUT_MESSAGE;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors surfaced by the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A calculation field was missing, null, of the wrong type or not numeric.
    /// Every cause collapses to the same message.
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput,
    /// The front-end page could not be read.
    #[error("Front end unavailable")]
    FrontendUnavailable(#[source] std::io::Error),
    /// Invalid server configuration.
    #[error("Configuration error: {0}")]
    Config(String),
    /// Socket or filesystem failure while running the server.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::FrontendUnavailable(_) | Self::Config(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({ "error": self.to_string() });

        (status, axum::Json(body)).into_response()
    }
}
