//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps parse failures, field validation failures, and the sink's closed
//! error taxonomy to HTTP status codes and response envelopes. Internal
//! detail is logged, never returned to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use lead_core::FieldErrors;
use lead_sheets::{SheetsError, SinkErrorKind};

use crate::response::ApiResponse;

/// Application-level error type for the submission pipeline.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body was not parseable JSON (400).
    #[error("invalid JSON in request body: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// One or more fields failed validation (400, with field map).
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// The sink rejected or failed the append; status by error kind.
    #[error("sink error: {0}")]
    Sink(#[from] SheetsError),

    /// Wrong HTTP verb on the submission endpoint (405).
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Anything unexpected (500). Detail is logged, not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status and client-facing message for this error.
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidJson(_) => (StatusCode::BAD_REQUEST, "Invalid JSON in request body"),
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "Validation failed"),
            Self::Sink(err) => match err.kind() {
                SinkErrorKind::Authentication => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service temporarily unavailable. Please try again later.",
                ),
                SinkErrorKind::Validation => {
                    (StatusCode::BAD_REQUEST, "Invalid data provided.")
                }
                SinkErrorKind::Quota => (
                    StatusCode::TOO_MANY_REQUESTS,
                    "Service temporarily unavailable due to high demand. Please try again later.",
                ),
                SinkErrorKind::Network => (
                    StatusCode::BAD_GATEWAY,
                    "Network error occurred. Please try again.",
                ),
                SinkErrorKind::Unknown => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while processing your request.",
                ),
            },
            Self::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred. Please try again later.",
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        // Server-side failures are logged with full detail; the client only
        // ever sees the generic message.
        match &self {
            Self::Sink(err) => {
                tracing::error!(error = %err, kind = %err.kind(), "sink append failed")
            }
            Self::Internal(detail) => tracing::error!(%detail, "internal server error"),
            Self::InvalidJson(err) => tracing::debug!(error = %err, "unparseable request body"),
            Self::Validation(errors) => {
                tracing::debug!(fields = errors.len(), "submission failed validation")
            }
            Self::MethodNotAllowed => {}
        }

        let body = match self {
            Self::Validation(errors) => ApiResponse::validation_failure(message, errors),
            _ => ApiResponse::failure(message),
        };
        (status, Json(body)).into_response()
    }
}
