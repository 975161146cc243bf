//! HTTP client for the support proxy.

use async_trait::async_trait;
use cloudom_model::{ChatMessage, Role};
use cloudom_rag::KeywordRetriever;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ChatClientError, Result};

/// Anything that can answer a support conversation.
#[async_trait]
pub trait SupportBackend: Send + Sync {
    /// Answer the conversation in `messages`, asked from `page_url`.
    async fn ask(&self, messages: &[ChatMessage], page_url: &str) -> Result<String>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequestBody<'a> {
    messages: &'a [ChatMessage],
    context: String,
    page_url: &'a str,
}

#[derive(Deserialize)]
struct ChatResponseBody {
    text: String,
}

/// Posts conversations to `<base>/api/chat`, attaching site context
/// retrieved for the latest user question.
#[derive(Debug, Clone)]
pub struct SupportClient {
    http: reqwest::Client,
    endpoint: String,
    retriever: KeywordRetriever,
}

impl SupportClient {
    /// Create a client for the proxy at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatClientError::InvalidBaseUrl`] if `base_url` is not an
    /// `http` or `https` URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base = base_url.as_ref().trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ChatClientError::InvalidBaseUrl(base.to_string()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: format!("{base}/api/chat"),
            retriever: KeywordRetriever::default(),
        })
    }

    /// Use a custom retriever for context selection.
    pub fn with_retriever(mut self, retriever: KeywordRetriever) -> Self {
        self.retriever = retriever;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Context block for the most recent user message in `messages`.
    pub fn context_for(&self, messages: &[ChatMessage]) -> String {
        let query = messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or_default();
        self.retriever.context_for(query)
    }
}

#[async_trait]
impl SupportBackend for SupportClient {
    async fn ask(&self, messages: &[ChatMessage], page_url: &str) -> Result<String> {
        let body = ChatRequestBody { messages, context: self.context_for(messages), page_url };
        debug!(endpoint = %self.endpoint, messages = messages.len(), "posting support chat");

        let response = self.http.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(endpoint = %self.endpoint, %status, "support chat request failed");
            let message =
                if text.is_empty() { format!("Request failed ({})", status.as_u16()) } else { text };
            return Err(ChatClientError::Status { status: status.as_u16(), message });
        }

        let reply: ChatResponseBody = response.json().await?;
        Ok(reply.text)
    }
}
