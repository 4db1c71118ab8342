use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::{ContactMessage, RegistrationRecord};
use crate::config::SiteConfig;

/// Postgres unique-violation code, which hosted stores pass through verbatim.
pub const DUPLICATE_CODE: &str = "23505";

/// How a submission ended when it did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Stored,
    /// The backend already had this email. Shown to the user as success.
    AlreadyRegistered,
    /// Demo mode; nothing left the browser.
    Simulated,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Failed to encode submission: {0}")]
    Encode(String),
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
    code: Option<String>,
}

/// Maps a settled HTTP response onto the three-way outcome. A conflict, or any
/// error body carrying the unique-violation code, counts as a soft success.
pub fn classify_response(status: u16, body: &str) -> Result<SubmitOutcome, SubmitError> {
    if (200..300).contains(&status) {
        return Ok(SubmitOutcome::Stored);
    }

    let parsed = serde_json::from_str::<ErrorResponse>(body).ok();
    let duplicate = status == 409
        || parsed
            .as_ref()
            .and_then(|p| p.code.as_deref())
            .map_or(false, |code| code == DUPLICATE_CODE);
    if duplicate {
        return Ok(SubmitOutcome::AlreadyRegistered);
    }

    let message = parsed
        .and_then(|p| p.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| format!("Submission failed with status {}", status));
    Err(SubmitError::Rejected { status, message })
}

/// A body that cannot be read is classified as empty, which still leaves the
/// status to decide the outcome.
fn body_or_empty(path: &str, status: u16, body: Result<String, gloo_net::Error>) -> String {
    match body {
        Ok(text) => text,
        Err(e) => {
            warn!("POST {} returned {} with an unreadable body: {}", path, status, e);
            String::new()
        }
    }
}

#[async_trait(?Send)]
pub trait SubmitClient {
    async fn submit_registration(&self, record: &RegistrationRecord) -> Result<SubmitOutcome, SubmitError>;

    async fn submit_contact(&self, message: &ContactMessage) -> Result<SubmitOutcome, SubmitError>;

    /// True for the null client, so forms can show a demo-mode note.
    fn is_demo(&self) -> bool {
        false
    }
}

/// Posts JSON to a configured endpoint.
pub struct HttpSubmitClient {
    endpoint: String,
}

impl HttpSubmitClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<SubmitOutcome, SubmitError> {
        let url = format!("{}{}", self.endpoint, path);
        let request = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| SubmitError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        let text = body_or_empty(path, status, response.text().await);
        let outcome = classify_response(status, &text);
        match &outcome {
            Ok(outcome) => info!("POST {} settled with {}: {:?}", path, status, outcome),
            Err(e) => warn!("POST {} failed with {}: {}", path, status, e),
        }
        outcome
    }
}

#[async_trait(?Send)]
impl SubmitClient for HttpSubmitClient {
    async fn submit_registration(&self, record: &RegistrationRecord) -> Result<SubmitOutcome, SubmitError> {
        self.post_json("/api/registrations", record).await
    }

    async fn submit_contact(&self, message: &ContactMessage) -> Result<SubmitOutcome, SubmitError> {
        self.post_json("/api/contact", message).await
    }
}

/// Stands in for the live client when no endpoint is configured.
pub struct DemoSubmitClient;

#[async_trait(?Send)]
impl SubmitClient for DemoSubmitClient {
    async fn submit_registration(&self, record: &RegistrationRecord) -> Result<SubmitOutcome, SubmitError> {
        info!("Demo mode: would have submitted registration for {} ({})", record.email, record.source);
        Ok(SubmitOutcome::Simulated)
    }

    async fn submit_contact(&self, message: &ContactMessage) -> Result<SubmitOutcome, SubmitError> {
        info!("Demo mode: would have sent contact message from {}", message.email);
        Ok(SubmitOutcome::Simulated)
    }

    fn is_demo(&self) -> bool {
        true
    }
}

/// Shared handle to the client picked at startup, provided through context.
#[derive(Clone)]
pub struct SubmitHandle(pub Rc<dyn SubmitClient>);

impl PartialEq for SubmitHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SubmitHandle {
    pub fn from_config(config: &SiteConfig) -> Self {
        match &config.submit_endpoint {
            Some(endpoint) => {
                info!("Submissions go to {}", endpoint);
                SubmitHandle(Rc::new(HttpSubmitClient::new(endpoint.clone())))
            }
            None => {
                warn!("No submission endpoint configured - running in demo mode");
                SubmitHandle(Rc::new(DemoSubmitClient))
            }
        }
    }

    pub fn is_demo(&self) -> bool {
        self.0.is_demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_2xx_is_stored() {
        assert_eq!(classify_response(201, ""), Ok(SubmitOutcome::Stored));
        assert_eq!(classify_response(204, "garbage"), Ok(SubmitOutcome::Stored));
    }

    #[test]
    fn conflict_is_a_soft_success() {
        assert_eq!(classify_response(409, ""), Ok(SubmitOutcome::AlreadyRegistered));
        let body = r#"{"error":"duplicate key value","code":"23505"}"#;
        assert_eq!(classify_response(400, body), Ok(SubmitOutcome::AlreadyRegistered));
    }

    #[test]
    fn other_failures_surface_the_backend_message() {
        let body = r#"{"error":"Please enter a valid email address"}"#;
        assert_eq!(
            classify_response(422, body),
            Err(SubmitError::Rejected {
                status: 422,
                message: "Please enter a valid email address".into(),
            })
        );
    }

    #[test]
    fn unreadable_bodies_are_classified_by_status_alone() {
        let failed = Err(gloo_net::Error::GlooError("body stream already read".into()));
        let text = body_or_empty("/api/registrations", 409, failed);
        assert_eq!(text, "");
        assert_eq!(classify_response(409, &text), Ok(SubmitOutcome::AlreadyRegistered));

        let text = body_or_empty("/api/contact", 201, Ok("{}".into()));
        assert_eq!(text, "{}");
    }

    #[test]
    fn unreadable_error_bodies_fall_back_to_the_status() {
        let err = classify_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.to_string(), "Submission failed with status 502");
    }

    #[test]
    fn handle_follows_config() {
        assert!(SubmitHandle::from_config(&SiteConfig::with_endpoint(None)).is_demo());
        assert!(!SubmitHandle::from_config(&SiteConfig::with_endpoint(Some("http://localhost:3001"))).is_demo());
    }

    #[test]
    fn demo_client_simulates_without_io() {
        use crate::forms::models::RegistrationDraft;

        let record = RegistrationDraft {
            email: "ada@example.com".into(),
            ..Default::default()
        }
        .to_record(chrono::Utc::now())
        .unwrap();
        let outcome = futures::executor::block_on(DemoSubmitClient.submit_registration(&record));
        assert_eq!(outcome, Ok(SubmitOutcome::Simulated));
    }
}
