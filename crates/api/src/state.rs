//! Application state.

use crate::server::ServerConfig;
use sipcalc_domain::SipCalculator;
use std::path::Path;
use std::sync::Arc;

/// State shared by every handler.
///
/// Immutable after startup, so cloning it per request needs no coordination.
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    calculator: SipCalculator,
}

impl AppState {
    /// Creates the state for a server configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            calculator: SipCalculator::new(),
        }
    }

    /// Calculator used by the projection endpoint.
    #[must_use]
    pub fn calculator(&self) -> &SipCalculator {
        &self.calculator
    }

    /// Location of the front-end page served at `/`.
    #[must_use]
    pub fn frontend_path(&self) -> &Path {
        &self.config.frontend_path
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
