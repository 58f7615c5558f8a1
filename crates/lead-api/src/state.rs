//! # Application State
//!
//! Shared state for the Axum application. The sink handle is constructed
//! once at startup and injected here — route handlers never build their own
//! clients and there is no module-level singleton.

use std::sync::Arc;

use lead_sheets::LeadSink;

/// Server configuration read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the server binds to.
    pub port: u16,
}

impl AppConfig {
    const ENV_PORT: &'static str = "LEAD_API_PORT";
    const DEFAULT_PORT: u16 = 8080;

    /// Read the configuration from the environment, falling back to
    /// defaults for absent or unparseable values.
    pub fn from_env() -> Self {
        let port = std::env::var(Self::ENV_PORT)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Self::DEFAULT_PORT);
        Self { port }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
        }
    }
}

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// The append-only lead store. Initialize-once, read-many; safe for
    /// concurrent reuse across requests.
    pub sink: Arc<dyn LeadSink>,
    /// Server configuration.
    pub config: AppConfig,
}

impl AppState {
    /// State with default configuration.
    pub fn new(sink: Arc<dyn LeadSink>) -> Self {
        Self::with_config(sink, AppConfig::default())
    }

    /// State with explicit configuration.
    pub fn with_config(sink: Arc<dyn LeadSink>, config: AppConfig) -> Self {
        Self { sink, config }
    }
}
