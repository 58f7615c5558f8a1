//! # Response Envelope
//!
//! Every submission endpoint response — success or failure — uses the same
//! `{ success, message, errors? }` envelope. The `errors` map is present
//! only for field validation failures.

use serde::{Deserialize, Serialize};

use lead_core::FieldErrors;

/// The submission endpoint's uniform response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the submission was accepted.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
    /// Field-scoped validation messages, keyed by wire field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ApiResponse {
    /// Success envelope.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: None,
        }
    }

    /// Failure envelope without a field map.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }

    /// Failure envelope carrying the field → message map.
    pub fn validation_failure(message: impl Into<String>, errors: FieldErrors) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Some(errors),
        }
    }
}
