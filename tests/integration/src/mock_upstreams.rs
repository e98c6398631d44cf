//! Wiremock stand-ins for the REST backend and the Gemini API.

use crate::fixtures::{gemini_envelope, TEST_API_KEY};
use serde_json::Value;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Default Gemini model path.
pub const GENERATE_CONTENT_PATH: &str = "/models/gemini-1.5-pro:generateContent";

/// Mock REST backend
pub struct MockBackend {
    /// The underlying mock server
    pub server: MockServer,
}

impl MockBackend {
    /// Start a new mock backend
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to configure
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Answer suggestion requests on `endpoint` with a JSON body
    pub async fn mock_suggestions(&self, endpoint: &str, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer suggestion requests with a raw text body
    pub async fn mock_suggestions_text(&self, endpoint: &str, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Answer suggestion requests after a delay
    pub async fn mock_slow_suggestions(&self, endpoint: &str, delay: Duration, body: Value) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer `GET /api/recipe/{id}/`
    pub async fn mock_recipe(&self, id: i64, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/api/recipe/{id}/")))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Every request received so far
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

/// Mock Gemini API
pub struct MockGemini {
    /// The underlying mock server
    pub server: MockServer,
}

impl MockGemini {
    /// Start a new mock Gemini API
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to configure
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Return `payload` as the model's JSON text; requires the test credential header
    pub async fn mock_output(&self, payload: &Value) {
        Mock::given(method("POST"))
            .and(path(GENERATE_CONTENT_PATH))
            .and(header("x-goog-api-key", TEST_API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_envelope(payload)))
            .mount(&self.server)
            .await;
    }

    /// Return a Google error body
    pub async fn mock_error(&self, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path(GENERATE_CONTENT_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
                "error": {"code": status, "message": message, "status": "INVALID_ARGUMENT"}
            })))
            .mount(&self.server)
            .await;
    }

    /// Every request received so far
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}
