//! Scripted [`ChatModel`] for tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{ModelError, Result};
use crate::message::ChatMessage;
use crate::model::{ChatModel, Completion};

/// A [`ChatModel`] that records every request and replays queued results.
///
/// When the queue is empty it answers with a fixed default reply.
#[derive(Debug)]
pub struct MockChatModel {
    name: String,
    default_reply: String,
    responses: Mutex<VecDeque<Result<Completion>>>,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl Default for MockChatModel {
    fn default() -> Self {
        Self::new("mock")
    }
}

impl MockChatModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_reply: "Mock reply".to_string(),
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Set the reply used once the queue is exhausted.
    pub fn with_default_reply(mut self, reply: impl Into<String>) -> Self {
        self.default_reply = reply.into();
        self
    }

    /// Queue a successful completion.
    pub async fn push_reply(&self, text: impl Into<String>) {
        self.responses
            .lock()
            .await
            .push_back(Ok(Completion { text: text.into(), endpoint: "mock://".to_string() }));
    }

    /// Queue an error.
    pub async fn push_error(&self, error: ModelError) {
        self.responses.lock().await.push_back(Err(error));
    }

    /// Every message list passed to [`ChatModel::complete`], oldest first.
    pub async fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<Completion> {
        self.requests.lock().await.push(messages);
        match self.responses.lock().await.pop_front() {
            Some(result) => result,
            None => Ok(Completion { text: self.default_reply.clone(), endpoint: "mock://".to_string() }),
        }
    }
}
