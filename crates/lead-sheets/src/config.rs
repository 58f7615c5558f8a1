//! # Sink Configuration
//!
//! Environment-driven configuration for the sheets client. The destination
//! identifier and credentials are opaque to the rest of the stack — nothing
//! validates them beyond the sink's own failure signaling. Credential
//! *exchange* (service account → access token) happens out-of-band; the
//! client receives a ready bearer token.

use thiserror::Error;

/// Spreadsheet to append lead rows to.
pub const ENV_SHEETS_ID: &str = "GOOGLE_SHEETS_ID";
/// Bearer token authorizing writes to the spreadsheet.
pub const ENV_API_TOKEN: &str = "GOOGLE_API_TOKEN";
/// Optional API base URL override (used by tests and proxies).
pub const ENV_BASE_URL: &str = "GOOGLE_SHEETS_BASE_URL";

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Configuration problem detected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("{0} environment variable is required")]
    Missing(&'static str),
}

/// Connection settings for the sheets API.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// Spreadsheet identifier (the destination of all appends).
    pub spreadsheet_id: String,
    /// Bearer token for the API.
    pub api_token: String,
    /// API base URL, without trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl SheetsConfig {
    /// Default per-request timeout.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Configuration with the production base URL and default timeout.
    pub fn new(spreadsheet_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read the configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let spreadsheet_id = require_env(ENV_SHEETS_ID)?;
        let api_token = require_env(ENV_API_TOKEN)?;
        let base_url = std::env::var(ENV_BASE_URL)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            spreadsheet_id,
            api_token,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Replace the base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}
