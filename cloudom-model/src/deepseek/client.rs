//! DeepSeek chat completion client.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::config::DeepSeekConfig;
use crate::error::{ModelError, Result};
use crate::message::ChatMessage;
use crate::model::{ChatModel, Completion};

/// Upstream error bodies are cut to this many characters.
pub const MAX_DETAILS_CHARS: usize = 2000;

/// Client for DeepSeek and other OpenAI-compatible chat completion APIs.
///
/// Each request goes to the primary endpoint first and moves on to the
/// `/v1` endpoint only when the primary answers 404. Any other failure is
/// returned immediately.
#[derive(Debug, Clone)]
pub struct DeepSeekClient {
    http: reqwest::Client,
    config: DeepSeekConfig,
}

// ── API request/response types ─────────────────────────────────────

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Raw answer from one endpoint.
struct UpstreamReply {
    status: StatusCode,
    body: String,
}

impl DeepSeekClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidConfig`] if the API key or model is empty.
    pub fn new(config: DeepSeekConfig) -> Result<Self> {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client that sends requests through `http`.
    pub fn with_http_client(config: DeepSeekConfig, http: reqwest::Client) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ModelError::InvalidConfig("API key must not be empty".into()));
        }
        if config.model.is_empty() {
            return Err(ModelError::InvalidConfig("model must not be empty".into()));
        }
        Ok(Self { http, config })
    }

    /// Create a client from the `DEEPSEEK_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(DeepSeekConfig::from_env()?)
    }

    /// Return the client configuration.
    pub fn config(&self) -> &DeepSeekConfig {
        &self.config
    }

    async fn post_json(&self, url: &str, body: &ChatCompletionRequest<'_>) -> Result<UpstreamReply> {
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = "DeepSeek", url, error = %e, "request failed");
                ModelError::Request { url: url.to_string(), message: e.to_string() }
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(UpstreamReply { status, body })
    }
}

#[async_trait]
impl ChatModel for DeepSeekClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<Completion> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: &messages,
            temperature: self.config.sampling.temperature,
            top_p: self.config.sampling.top_p,
            max_tokens: self.config.sampling.max_tokens,
            stream: false,
        };

        let mut last_failure = None;
        for url in self.config.endpoints() {
            debug!(provider = "DeepSeek", %url, message_count = messages.len(), "sending completion request");
            let reply = self.post_json(&url, &request).await?;

            if reply.status.is_success() {
                let text = extract_completion(&reply.body).ok_or_else(|| {
                    warn!(provider = "DeepSeek", %url, "completion missing or blank");
                    ModelError::EmptyCompletion
                })?;
                info!(provider = "DeepSeek", %url, chars = text.len(), "completion received");
                return Ok(Completion { text, endpoint: url });
            }

            warn!(provider = "DeepSeek", %url, status = %reply.status, "upstream returned an error status");
            let retry = reply.status == StatusCode::NOT_FOUND;
            last_failure = Some((url, reply));
            if !retry {
                break;
            }
        }

        let (url, reply) = last_failure
            .ok_or_else(|| ModelError::InvalidConfig("no completion endpoints".into()))?;
        Err(ModelError::Upstream {
            url,
            status: reply.status.as_u16(),
            details: upstream_details(&reply.body),
        })
    }
}

/// Pull `choices[0].message.content` out of a response body, trimmed.
fn extract_completion(body: &str) -> Option<String> {
    let response: ChatCompletionResponse = serde_json::from_str(body).ok()?;
    let content = response.choices.into_iter().next()?.message?.content?;
    let trimmed = content.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Serialize an upstream error body for diagnostics: parsed JSON when the
/// body is JSON, otherwise the raw text as a JSON string.
fn upstream_details(body: &str) -> String {
    let value = serde_json::from_str::<Value>(body)
        .ok()
        .filter(|v| !v.is_null())
        .unwrap_or_else(|| Value::String(body.to_string()));
    truncate_chars(&value.to_string(), MAX_DETAILS_CHARS)
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
