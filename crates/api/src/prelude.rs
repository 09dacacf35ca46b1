//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use sipcalc_api::prelude::*;
//! ```

pub use crate::error::ApiError;
pub use crate::handlers::{INVALID_INPUT_MESSAGE, coerce_number, parse_sip_request};
pub use crate::models::{CalculateRequest, CalculateResponse, ErrorResponse, HealthResponse};
pub use crate::routes::create_router;
pub use crate::server::{ApiServer, ServerConfig};
pub use crate::state::AppState;
