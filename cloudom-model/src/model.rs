//! The chat completion seam used by the proxy.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::ChatMessage;

/// Sampling parameters sent with every completion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self { temperature: 0.4, top_p: 0.9, max_tokens: 600 }
    }
}

/// A successful completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The completion text, trimmed and non-empty.
    pub text: String,
    /// The endpoint that produced it.
    pub endpoint: String,
}

/// A chat completion backend.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Model identifier, used for logging.
    fn name(&self) -> &str;

    /// Complete the conversation `messages` (system instruction first).
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<Completion>;
}
