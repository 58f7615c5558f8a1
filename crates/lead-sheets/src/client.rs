//! # Sheets HTTP Client
//!
//! [`LeadSink`] is the append-only boundary the submission pipeline talks
//! to; [`SheetsClient`] is the real implementation over the sheets REST API.
//!
//! The client wraps a `reqwest::Client` with the configured base URL,
//! bearer token, and per-request timeout. It never retries; retry policy
//! belongs to the caller.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use lead_core::LeadForm;

use crate::config::SheetsConfig;
use crate::error::SheetsError;
use crate::row::{LeadRow, HEADERS, HEADER_RANGE, SHEET_RANGE};

/// The append-only row store as seen by the submission pipeline.
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Append one validated lead with the server-generated timestamp.
    /// Atomic from the pipeline's perspective: the row is either fully
    /// appended or not written at all.
    async fn append_lead(
        &self,
        lead: &LeadForm,
        submitted_at: DateTime<Utc>,
    ) -> Result<(), SheetsError>;
}

/// HTTP client for the sheets API. Cheap to clone; safe for concurrent
/// reuse across requests.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: reqwest::Client,
    config: SheetsConfig,
}

impl SheetsClient {
    /// Build a client from the given configuration.
    pub fn new(config: SheetsConfig) -> Result<Self, SheetsError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SheetsError::Unknown(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    fn values_url(&self, range: &str, verb: Option<&str>) -> String {
        let SheetsConfig {
            base_url,
            spreadsheet_id,
            ..
        } = &self.config;
        match verb {
            Some(verb) => format!(
                "{base_url}/v4/spreadsheets/{spreadsheet_id}/values/{range}:{verb}?valueInputOption=RAW"
            ),
            None => format!(
                "{base_url}/v4/spreadsheets/{spreadsheet_id}/values/{range}?valueInputOption=RAW"
            ),
        }
    }

    fn transport_error(err: reqwest::Error) -> SheetsError {
        SheetsError::Network(err.to_string())
    }

    async fn check_response(response: reqwest::Response) -> Result<(), SheetsError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(SheetsError::from_status(status.as_u16(), body))
    }

    /// Write the header row (out-of-band provisioning, used by the CLI).
    pub async fn write_headers(&self) -> Result<(), SheetsError> {
        let url = self.values_url(HEADER_RANGE, None);
        let body = serde_json::json!({ "values": [HEADERS] });
        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.config.api_token)
            .json(&body)
            .send()
            .await
            .map_err(Self::transport_error)?;
        Self::check_response(response).await?;
        tracing::info!(spreadsheet_id = %self.config.spreadsheet_id, "sheet headers written");
        Ok(())
    }

    /// Verify the configured credentials can read the spreadsheet.
    /// Returns the spreadsheet title.
    pub async fn check_access(&self) -> Result<String, SheetsError> {
        let SheetsConfig {
            base_url,
            spreadsheet_id,
            ..
        } = &self.config;
        let url =
            format!("{base_url}/v4/spreadsheets/{spreadsheet_id}?fields=properties.title");
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.api_token)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::from_status(status.as_u16(), body));
        }
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SheetsError::Unknown(format!("unreadable metadata response: {e}")))?;
        Ok(body["properties"]["title"]
            .as_str()
            .unwrap_or_default()
            .to_string())
    }
}

#[async_trait]
impl LeadSink for SheetsClient {
    async fn append_lead(
        &self,
        lead: &LeadForm,
        submitted_at: DateTime<Utc>,
    ) -> Result<(), SheetsError> {
        let row = LeadRow::new(lead, submitted_at)?;
        let url = self.values_url(SHEET_RANGE, Some("append"));
        let body = serde_json::json!({ "values": [row.values()] });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_token)
            .json(&body)
            .send()
            .await
            .map_err(Self::transport_error)?;
        Self::check_response(response).await?;

        tracing::info!(
            spreadsheet_id = %self.config.spreadsheet_id,
            unternehmen = %lead.unternehmen,
            "lead row appended"
        );
        Ok(())
    }
}
