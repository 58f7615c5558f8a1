//! # Integration Tests for lead-api
//!
//! Drives the assembled router through `tower::ServiceExt::oneshot` with a
//! stub sink: happy path, consent gating, parse failures, method gating,
//! sink error kind → HTTP status mapping, and health probes.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{DateTime, Duration, Local, Utc};
use http_body_util::BodyExt;
use parking_lot::Mutex;
use tower::ServiceExt;

use lead_api::{app, ApiResponse, AppState};
use lead_core::LeadForm;
use lead_sheets::{LeadSink, SheetsError};

/// Sink double: records appended leads, or fails with a configured error.
#[derive(Default)]
struct StubSink {
    fail_with: Option<fn() -> SheetsError>,
    appended: Mutex<Vec<LeadForm>>,
}

#[async_trait]
impl LeadSink for StubSink {
    async fn append_lead(
        &self,
        lead: &LeadForm,
        _submitted_at: DateTime<Utc>,
    ) -> Result<(), SheetsError> {
        if let Some(fail) = self.fail_with {
            return Err(fail());
        }
        self.appended.lock().push(lead.clone());
        Ok(())
    }
}

fn test_app() -> (axum::Router, Arc<StubSink>) {
    let sink = Arc::new(StubSink::default());
    (app(AppState::new(sink.clone())), sink)
}

fn failing_app(fail: fn() -> SheetsError) -> axum::Router {
    let sink = Arc::new(StubSink {
        fail_with: Some(fail),
        appended: Mutex::new(Vec::new()),
    });
    app(AppState::new(sink))
}

/// A payload that passes every validation rule (start date is tomorrow).
fn valid_payload() -> serde_json::Value {
    let tomorrow = (Local::now().date_naive() + Duration::days(1)).to_string();
    serde_json::json!({
        "unternehmen": "Test GmbH",
        "plz": "12345",
        "land": "DE",
        "name": "Max Mustermann",
        "telefonnummer": "017612345678",
        "emailadresse": "max@test.com",
        "dsbVorhanden": "nein",
        "start": tomorrow,
        "unternehmensgroesse": "11-50",
        "gdprConsent": true
    })
}

fn post_submit(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/submit")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn envelope(response: axum::http::Response<Body>) -> ApiResponse {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// -- Happy path ---------------------------------------------------------------

#[tokio::test]
async fn valid_submission_returns_200_and_appends() {
    let (app, sink) = test_app();
    let response = app
        .oneshot(post_submit(valid_payload().to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = envelope(response).await;
    assert!(body.success);
    assert!(body.message.contains("erfolgreich übermittelt"));
    assert!(body.errors.is_none());

    let appended = sink.appended.lock();
    assert_eq!(appended.len(), 1);
    assert_eq!(appended[0].unternehmen, "Test GmbH");
}

#[tokio::test]
async fn email_is_stored_lowercase() {
    let (app, sink) = test_app();
    let mut payload = valid_payload();
    payload["emailadresse"] = "Max.Mustermann@TEST.COM".into();
    let response = app.oneshot(post_submit(payload.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        sink.appended.lock()[0].emailadresse,
        "max.mustermann@test.com"
    );
}

#[tokio::test]
async fn unknown_extra_fields_are_ignored() {
    let (app, _sink) = test_app();
    let mut payload = valid_payload();
    payload["utm_source"] = "newsletter".into();
    let response = app.oneshot(post_submit(payload.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// -- Validation failures ------------------------------------------------------

#[tokio::test]
async fn missing_consent_returns_400_with_field_error() {
    let (app, sink) = test_app();
    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("gdprConsent");
    let response = app.oneshot(post_submit(payload.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = envelope(response).await;
    assert!(!body.success);
    assert_eq!(body.message, "Validation failed");
    let errors = serde_json::to_value(body.errors.unwrap()).unwrap();
    assert!(errors["gdprConsent"]
        .as_str()
        .unwrap()
        .contains("zustimmen"));
    assert!(sink.appended.lock().is_empty(), "nothing may be forwarded");
}

#[tokio::test]
async fn false_consent_returns_400() {
    let (app, _sink) = test_app();
    let mut payload = valid_payload();
    payload["gdprConsent"] = false.into();
    let response = app.oneshot(post_submit(payload.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = envelope(response).await;
    let errors = serde_json::to_value(body.errors.unwrap()).unwrap();
    assert!(errors.get("gdprConsent").is_some());
}

#[tokio::test]
async fn past_start_date_returns_400() {
    let (app, _sink) = test_app();
    let mut payload = valid_payload();
    payload["start"] = "2020-01-01".into();
    let response = app.oneshot(post_submit(payload.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = envelope(response).await;
    let errors = serde_json::to_value(body.errors.unwrap()).unwrap();
    assert_eq!(errors["start"], "Startdatum muss in der Zukunft liegen");
}

#[tokio::test]
async fn invalid_country_returns_400() {
    let (app, _sink) = test_app();
    let mut payload = valid_payload();
    payload["land"] = "FR".into();
    let response = app.oneshot(post_submit(payload.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = envelope(response).await;
    let errors = serde_json::to_value(body.errors.unwrap()).unwrap();
    assert_eq!(errors["land"], "Bitte wählen Sie ein Land aus");
}

#[tokio::test]
async fn empty_body_object_reports_every_field() {
    let (app, _sink) = test_app();
    let response = app.oneshot(post_submit("{}".to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = envelope(response).await;
    assert_eq!(body.errors.unwrap().len(), 10);
}

// -- Parse failures -----------------------------------------------------------

#[tokio::test]
async fn unparseable_json_returns_400_without_field_map() {
    let (app, _sink) = test_app();
    let response = app
        .oneshot(post_submit("not json{".to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = envelope(response).await;
    assert_eq!(body.message, "Invalid JSON in request body");
    assert!(body.errors.is_none());
}

// -- Method gating ------------------------------------------------------------

#[tokio::test]
async fn get_returns_405_envelope() {
    let (app, _sink) = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/submit")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = envelope(response).await;
    assert_eq!(body.message, "Method not allowed");
}

#[tokio::test]
async fn put_delete_patch_return_405() {
    for method in ["PUT", "DELETE", "PATCH"] {
        let (app, _sink) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/api/submit")
                    .body(Body::from(valid_payload().to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
    }
}

// -- Sink failures ------------------------------------------------------------

#[tokio::test]
async fn quota_error_returns_429_regardless_of_input() {
    let app = failing_app(|| SheetsError::Quota("per-minute quota exhausted".into()));
    let response = app
        .oneshot(post_submit(valid_payload().to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let body = envelope(response).await;
    assert!(body.message.contains("high demand"));
    assert!(!body.message.contains("per-minute"), "detail must not leak");
}

#[tokio::test]
async fn authentication_error_returns_503() {
    let app = failing_app(|| SheetsError::Authentication("expired token".into()));
    let response = app
        .oneshot(post_submit(valid_payload().to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn network_error_returns_502() {
    let app = failing_app(|| SheetsError::Network("connection refused".into()));
    let response = app
        .oneshot(post_submit(valid_payload().to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = envelope(response).await;
    assert!(body.message.contains("Network error"));
}

#[tokio::test]
async fn sink_validation_error_returns_400() {
    let app = failing_app(|| SheetsError::Validation("sheet not found".into()));
    let response = app
        .oneshot(post_submit(valid_payload().to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = envelope(response).await;
    assert_eq!(body.message, "Invalid data provided.");
}

#[tokio::test]
async fn unknown_sink_error_returns_500() {
    let app = failing_app(|| SheetsError::Unknown("boom".into()));
    let response = app
        .oneshot(post_submit(valid_payload().to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = envelope(response).await;
    assert_eq!(
        body.message,
        "An error occurred while processing your request."
    );
}

// -- Health probes ------------------------------------------------------------

#[tokio::test]
async fn liveness_probe() {
    let (app, _sink) = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/liveness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn readiness_probe() {
    let (app, _sink) = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/readiness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ready");
}
