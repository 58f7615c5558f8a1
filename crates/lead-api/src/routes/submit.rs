//! # Submission Endpoint
//!
//! `POST /api/submit` — parse, validate, append, respond.
//!
//! Server-side validation is authoritative: it re-runs the full-form schema
//! independently of whatever the client checked. Either every field passes
//! and the normalized lead is forwarded to the sink, or nothing is.

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{Local, Utc};

use lead_core::{validate_form, FormDraft};

use crate::error::AppError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Confirmation message shown to the user after a successful submission.
const SUCCESS_MESSAGE: &str =
    "Ihre Anfrage wurde erfolgreich übermittelt. Wir melden uns in Kürze bei Ihnen.";

/// Router for the submission endpoint. Every verb other than POST answers
/// with the fixed 405 envelope and never touches the body.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/submit",
        post(submit_lead).fallback(method_not_allowed),
    )
}

/// POST /api/submit — accept one lead submission.
async fn submit_lead(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse>, AppError> {
    // 1. Parse. Unknown extra fields are ignored by the draft's serde shape.
    let draft: FormDraft = serde_json::from_slice(&body).map_err(AppError::InvalidJson)?;

    // 2. Validate against the full-form schema; day granularity, local time.
    let today = Local::now().date_naive();
    let lead = validate_form(&draft, today).map_err(AppError::Validation)?;

    // 3. Forward the normalized lead with the server-generated timestamp.
    state.sink.append_lead(&lead, Utc::now()).await?;

    tracing::info!(land = %lead.land, "lead accepted");
    Ok(Json(ApiResponse::ok(SUCCESS_MESSAGE)))
}

/// Any non-POST verb on the submission endpoint.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
