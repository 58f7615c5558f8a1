//! # lead-server entry point
//!
//! Initializes tracing, reads configuration, constructs the sheets sink
//! handle once, and serves the submission API.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use lead_api::{app, AppConfig, AppState};
use lead_sheets::{SheetsClient, SheetsConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let sheets_config = SheetsConfig::from_env()?;
    let sink = SheetsClient::new(sheets_config)?;
    let state = AppState::with_config(Arc::new(sink), config.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "lead-server listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}
