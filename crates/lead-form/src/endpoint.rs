//! # Submission Endpoint Adapter
//!
//! The network boundary of the form state machine. [`SubmitEndpoint`]
//! abstracts the submission endpoint so the machine can be driven in tests
//! without a server; [`HttpSubmitEndpoint`] is the real client posting the
//! wire JSON to `/api/submit`.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use lead_core::LeadForm;

/// Why a submission did not go through.
///
/// The state machine consumes this only as "failed" (boolean-only contract);
/// the distinction exists for logging.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never produced a response.
    #[error("network error reaching {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("submission rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// The submission endpoint as seen by the form state machine.
#[async_trait]
pub trait SubmitEndpoint: Send + Sync {
    /// Submit a validated lead. `Ok(())` means the endpoint accepted it.
    async fn submit_lead(&self, lead: &LeadForm) -> Result<(), SubmitError>;
}

/// HTTP client for the lead submission endpoint.
#[derive(Debug, Clone)]
pub struct HttpSubmitEndpoint {
    client: reqwest::Client,
    url: String,
}

impl HttpSubmitEndpoint {
    /// Default per-request timeout. No automatic retry — retry is left to
    /// the user.
    const TIMEOUT_SECS: u64 = 30;

    /// Build a client for the given submission URL.
    pub fn new(url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl SubmitEndpoint for HttpSubmitEndpoint {
    async fn submit_lead(&self, lead: &LeadForm) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.url)
            .json(lead)
            .send()
            .await
            .map_err(|source| SubmitError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Pull the envelope message out of the failure body when present.
        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("submission failed")
                .to_string(),
            Err(_) => "submission failed".to_string(),
        };
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_error_carries_status_and_message() {
        let err = SubmitError::Rejected {
            status: 429,
            message: "high demand".into(),
        };
        let text = err.to_string();
        assert!(text.contains("429"));
        assert!(text.contains("high demand"));
    }

    #[tokio::test]
    async fn transport_error_on_closed_port() {
        let endpoint = HttpSubmitEndpoint::new("http://127.0.0.1:1/api/submit").unwrap();
        let lead = LeadForm {
            unternehmen: "Test GmbH".into(),
            plz: "12345".into(),
            land: lead_core::Country::De,
            name: "Max Mustermann".into(),
            telefonnummer: "017612345678".into(),
            emailadresse: "max@test.com".into(),
            dsb_vorhanden: lead_core::DsbStatus::Nein,
            start: chrono::NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            unternehmensgroesse: lead_core::CompanySize::From11To50,
            gdpr_consent: true,
        };
        let err = endpoint.submit_lead(&lead).await.unwrap_err();
        assert!(matches!(err, SubmitError::Transport { .. }));
    }
}
