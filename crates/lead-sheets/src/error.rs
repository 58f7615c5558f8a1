//! # Sink Error Taxonomy
//!
//! Typed errors from the sheets boundary. The submission pipeline maps
//! these to HTTP statuses by [`SinkErrorKind`], a closed set — new failure
//! modes must be classified here, not upstream.

use std::fmt;

use thiserror::Error;

/// Closed classification of sink failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkErrorKind {
    /// Credentials rejected by the sheets service.
    Authentication,
    /// The data (or destination) was rejected as invalid.
    Validation,
    /// API quota exceeded.
    Quota,
    /// Transport-level failure or upstream outage.
    Network,
    /// Anything that does not fit the above.
    Unknown,
}

impl fmt::Display for SinkErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Authentication => "AUTHENTICATION",
            Self::Validation => "VALIDATION",
            Self::Quota => "QUOTA",
            Self::Network => "NETWORK",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// Error from a sheets operation.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// Credentials were rejected (HTTP 401/403 from the API).
    #[error("authentication with the sheets service failed: {0}")]
    Authentication(String),

    /// The row or destination was rejected (missing sheet, oversized cell,
    /// row failing the pre-write guard).
    #[error("sheet rejected the data: {0}")]
    Validation(String),

    /// API quota exhausted (HTTP 429).
    #[error("sheets API quota exceeded: {0}")]
    Quota(String),

    /// The service was unreachable or answered with a 5xx.
    #[error("network error reaching the sheets service: {0}")]
    Network(String),

    /// Unclassified API response.
    #[error("sheets API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Unclassified local failure.
    #[error("unexpected sheets error: {0}")]
    Unknown(String),
}

impl SheetsError {
    /// Classification used for the HTTP status mapping.
    pub fn kind(&self) -> SinkErrorKind {
        match self {
            Self::Authentication(_) => SinkErrorKind::Authentication,
            Self::Validation(_) => SinkErrorKind::Validation,
            Self::Quota(_) => SinkErrorKind::Quota,
            Self::Network(_) => SinkErrorKind::Network,
            Self::Api { .. } | Self::Unknown(_) => SinkErrorKind::Unknown,
        }
    }

    /// Classify a non-2xx response from the sheets API.
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::Authentication(format!(
                "sheets API returned {status}; check the configured credentials"
            )),
            404 => Self::Validation(
                "sheet not found; check the configured spreadsheet id".to_string(),
            ),
            429 => Self::Quota(format!("sheets API returned {status}")),
            500 | 502 | 503 => Self::Network(format!(
                "sheets API is temporarily unavailable (status {status})"
            )),
            _ => Self::Api {
                status,
                message: body,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(
            SheetsError::from_status(401, String::new()).kind(),
            SinkErrorKind::Authentication
        );
        assert_eq!(
            SheetsError::from_status(403, String::new()).kind(),
            SinkErrorKind::Authentication
        );
        assert_eq!(
            SheetsError::from_status(404, String::new()).kind(),
            SinkErrorKind::Validation
        );
        assert_eq!(
            SheetsError::from_status(429, String::new()).kind(),
            SinkErrorKind::Quota
        );
        for status in [500, 502, 503] {
            assert_eq!(
                SheetsError::from_status(status, String::new()).kind(),
                SinkErrorKind::Network
            );
        }
        assert_eq!(
            SheetsError::from_status(418, "teapot".into()).kind(),
            SinkErrorKind::Unknown
        );
    }

    #[test]
    fn api_error_keeps_status_and_body() {
        let err = SheetsError::from_status(418, "teapot".into());
        let text = err.to_string();
        assert!(text.contains("418"));
        assert!(text.contains("teapot"));
    }

    #[test]
    fn kind_display_is_the_wire_name() {
        assert_eq!(SinkErrorKind::Authentication.to_string(), "AUTHENTICATION");
        assert_eq!(SinkErrorKind::Unknown.to_string(), "UNKNOWN");
    }
}
