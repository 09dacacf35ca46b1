//! Server configuration and startup.

use crate::error::ApiError;
use crate::routes::create_router;
use crate::state::AppState;
use axum::Router;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Environment variable for the bind address.
pub const ENV_HOST: &str = "SIPCALC_HOST";
/// Environment variable for the listening port.
pub const ENV_PORT: &str = "SIPCALC_PORT";
/// Environment variable for the front-end page location.
pub const ENV_FRONTEND: &str = "SIPCALC_FRONTEND";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Listening port.
    pub port: u16,
    /// HTML page served at `/`, read on every request.
    pub frontend_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            frontend_path: PathBuf::from("frontend.html"),
        }
    }
}

impl ServerConfig {
    /// Loads the configuration from `SIPCALC_*` environment variables, falling
    /// back to defaults for unset ones.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(ENV_HOST) {
            config.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ApiError::Config(format!("invalid {ENV_PORT} value '{port}'")))?;
        }
        if let Some(path) = lookup(ENV_FRONTEND) {
            config.frontend_path = PathBuf::from(path);
        }

        Ok(config)
    }

    /// Sets the bind address.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the listening port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the front-end page location.
    #[must_use]
    pub fn with_frontend_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.frontend_path = path.into();
        self
    }

    /// `host:port` string for binding.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// HTTP server hosting the calculator.
pub struct ApiServer {
    config: ServerConfig,
}

impl ApiServer {
    /// Creates a new server.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Builds the router without binding a socket.
    pub fn router(&self) -> Router {
        create_router(AppState::new(self.config.clone()))
    }

    /// Binds the listener and serves until Ctrl-C.
    pub async fn run(self) -> Result<(), ApiError> {
        let address = self.config.bind_address();
        if !self.config.frontend_path.exists() {
            warn!(
                path = %self.config.frontend_path.display(),
                "Front-end page not found, / will answer 500"
            );
        }

        let router = self.router();
        let listener = TcpListener::bind(&address).await?;
        info!("SIP calculator listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
