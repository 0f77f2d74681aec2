//! Transport abstraction over the hosted model endpoint.
//!
//! The gateway talks to the model through [`ModelTransport`] so tests can
//! substitute a scripted transport and assert, among other things, that a
//! missing credential never reaches the wire.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{AiError, Result};

/// Base URL of the hosted generation API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for both metadata suggestion and corpus Q&A.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// A single generation request.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub prompt: String,
    /// Ask the model to reply with a JSON object instead of free text.
    pub json_response: bool,
}

/// One round trip to the hosted model.
///
/// Implementations are stateless per call: no session, no caching, no retry
/// policy.  An in-flight call cannot be aborted by the caller.
#[async_trait]
pub trait ModelTransport: Send + Sync {
    async fn generate(&self, api_key: &str, request: &GenerateRequest) -> Result<String>;
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateBody<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

// ---------------------------------------------------------------------------
// HTTPS transport
// ---------------------------------------------------------------------------

/// Production transport backed by [`reqwest`].
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
    model: String,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, DEFAULT_MODEL)
    }

    /// Point the transport at a non-default endpoint or model.
    pub fn with_endpoint(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelTransport for HttpTransport {
    async fn generate(&self, api_key: &str, request: &GenerateRequest) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        );

        let body = GenerateBody {
            contents: vec![Content {
                parts: vec![Part { text: &request.prompt }],
            }],
            generation_config: request.json_response.then_some(GenerationConfig {
                response_mime_type: "application/json",
            }),
        };

        tracing::debug!(json_response = request.json_response, "calling model endpoint");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AiError::Status(status));
        }

        let parsed: GenerateResponse = response.json().await?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AiError::Malformed("response carried no text part".into()))
    }
}
