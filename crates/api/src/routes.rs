//! Route definitions.

use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Builds the application router.
///
/// Cross-origin requests are allowed from any origin.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::serve_frontend))
        .route("/calculate", post(handlers::calculate))
        .route("/health", get(handlers::health_check))
        .route("/api-docs/openapi.json", get(handlers::openapi_spec))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
