//! Gemini `generateContent` API client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::GeminiError;

use super::retry::{RetryPolicy, retry_with_backoff};

/// Trait for turning a prompt into generated text.
///
/// This abstraction allows mocking the API in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageGenerator: Send + Sync {
    /// Send `prompt` to the model and return the generated text.
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError>;
}

#[derive(Serialize, Debug)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize, Debug)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize, Debug)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// HTTP client for the Gemini API.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
    retry: RetryPolicy,
}

impl GeminiClient {
    /// Build a client from the resolved configuration.
    pub fn new(config: &Config) -> Result<Self, GeminiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(GeminiError::ClientBuild)?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.api_base.trim_end_matches('/').to_string(),
            retry: RetryPolicy::default(),
        })
    }

    /// Override the retry policy (tests use short or no retries).
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full `generateContent` URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Single request/response cycle, no retries.
    async fn generate_once(&self, prompt: &str) -> Result<String, GeminiError> {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let url = self.endpoint();
        debug!(model = %self.model, prompt_len = prompt.len(), "Sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(GeminiError::Request)?;

        let status = response.status();
        let text = response.text().await.map_err(GeminiError::Request)?;
        debug!(status = status.as_u16(), body_len = text.len(), "Received response");

        if status != StatusCode::OK {
            return Err(GeminiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        extract_text(&text)
    }
}

#[async_trait]
impl MessageGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        retry_with_backoff(self.retry, || self.generate_once(prompt)).await
    }
}

/// Pull the first candidate's first text part out of a response body.
fn extract_text(body: &str) -> Result<String, GeminiError> {
    let parsed: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| GeminiError::InvalidResponse(e.to_string()))?;

    parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or(GeminiError::EmptyResponse)
}
