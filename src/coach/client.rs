//! Remote coach API client.
//!
//! One-shot call to an OpenAI-compatible chat completions endpoint that
//! rephrases the weekly report. Failures are typed, never panics; the
//! presentation layer renders the error text next to the raw report.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coach::prompt::{build_user_message, COACH_SYSTEM_PROMPT};
use crate::storage::config::CoachSettings;

/// Default base URL of the coach API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model requested from the coach API.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Request timeout. The upstream design never times out; this is a
/// defensive bound so a stalled call cannot hang the session forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Coach API client.
#[derive(Clone)]
pub struct CoachClient {
    /// HTTP client
    http: reqwest::Client,
    /// Base URL for the API
    base_url: String,
    /// Model name sent with each request
    model: String,
    /// API key, absent when unconfigured
    api_key: Option<String>,
}

impl CoachClient {
    /// Create a new coach client from explicit settings.
    pub fn new(settings: CoachSettings) -> Self {
        let base_url = settings.base_url.clone();
        Self::with_base_url(settings, base_url)
    }

    /// Create a new coach client with a custom base URL (for testing
    /// against a mock server).
    pub fn with_base_url(settings: CoachSettings, base_url: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url,
            model: settings.model,
            api_key: settings.api_key,
        }
    }

    /// Whether an API key is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Rephrase the raw report through the coach service.
    ///
    /// Single-shot: no retry, no caching. Returns the polished text, or a
    /// tagged error for a missing credential, an empty response, a transport
    /// fault or a service-level failure.
    pub async fn polish_report(&self, raw_report: &str) -> Result<String, CoachError> {
        let api_key = self.api_key.as_deref().ok_or(CoachError::MissingCredential)?;

        let user_message = build_user_message(raw_report);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: COACH_SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_message,
                },
            ],
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CoachError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(CoachError::Api(format!(
                "status {}: {}",
                status.as_u16(),
                detail.trim()
            )));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| CoachError::Api(format!("malformed response: {}", e)))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(CoachError::EmptyResponse);
        }

        tracing::debug!("Coach returned {} characters", text.len());
        Ok(text)
    }
}

/// Chat completion request body.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

/// One chat message.
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Chat completion response body.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Coach call errors.
#[derive(Debug, Error)]
pub enum CoachError {
    /// No API key configured
    #[error("Coach API key is not configured. Set OPENAI_API_KEY or add it to config.toml.")]
    MissingCredential,

    /// The service answered but returned no usable text
    #[error("Coach service returned an empty response.")]
    EmptyResponse,

    /// Network-level failure (connect, timeout, TLS)
    #[error("Coach request failed: {0}")]
    Transport(String),

    /// Service-level failure (HTTP error status, malformed body)
    #[error("Coach service error: {0}")]
    Api(String),
}
