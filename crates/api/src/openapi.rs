//! OpenAPI documentation configuration.
//!
//! The document is generated with utoipa and served at `/api-docs/openapi.json`.

use crate::handlers;
use crate::models::{CalculateRequest, CalculateResponse, ErrorResponse, HealthResponse};
use utoipa::OpenApi;

/// OpenAPI documentation structure.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SIP Calculator API",
        version = "0.1.0",
        description = "Projects the future value of a Systematic Investment Plan \
                       from a monthly contribution, an annual rate of return and \
                       an investment horizon.",
        license(
            name = "MIT OR Apache-2.0",
            url = "https://github.com/joaquinbejar/sipcalc"
        ),
        contact(
            name = "Joaquín Béjar García",
            email = "jb@taunais.com"
        )
    ),
    tags(
        (name = "Calculator", description = "SIP projection"),
        (name = "Frontend", description = "Static calculator page"),
        (name = "Health", description = "Health check")
    ),
    paths(
        handlers::calculate,
        handlers::serve_frontend,
        handlers::health_check,
    ),
    components(
        schemas(
            CalculateRequest,
            CalculateResponse,
            ErrorResponse,
            HealthResponse,
        )
    )
)]
pub struct ApiDoc;

/// Returns the OpenAPI JSON specification.
#[must_use]
pub fn openapi_json() -> String {
    ApiDoc::openapi().to_json().unwrap_or_default()
}
