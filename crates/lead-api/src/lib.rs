//! # lead-api — Axum Submission Service
//!
//! The server side of the lead capture funnel. One business route —
//! `POST /api/submit` — plus unauthenticated health probes.
//!
//! ## Pipeline
//!
//! ```text
//! bytes → JSON parse → full-form validation → sink append → envelope
//!   400 ↲        400 (field map) ↲      status by sink kind ↲   200
//! ```
//!
//! ## Architecture
//!
//! - Each request is handled independently and statelessly; the only shared
//!   state is the injected sink handle in [`AppState`].
//! - All errors map to the uniform `{ success, message, errors? }` envelope
//!   via [`AppError`]; transport/internal detail never reaches the caller.
//! - No business logic in the handler beyond orchestration — validation
//!   lives in `lead-core`, the sink boundary in `lead-sheets`.

pub mod error;
pub mod response;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use response::ApiResponse;
pub use state::{AppConfig, AppState};

/// Assemble the full application router.
///
/// Body size limit: 2 MiB — far above any legitimate form payload, low
/// enough to stop oversized bodies before parsing. Health probes stay
/// outside the business routes so they never depend on sink health.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::submit::router())
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health/liveness — process is up.
async fn liveness() -> &'static str {
    "ok"
}

/// GET /health/readiness — ready to accept submissions.
async fn readiness() -> &'static str {
    "ready"
}
