//! Conversation state for the support chat widget.

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicU64, Ordering},
};

use cloudom_model::ChatMessage;
use cloudom_rag::catalog::{COMPANY_NAME, CONTACT};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::client::SupportBackend;
use crate::format::format_assistant_text;

/// Result of [`SupportChat::send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The formatted reply was appended.
    Replied(String),
    /// The backend failed; the fallback message was appended.
    Unavailable(String),
    /// A newer send started before this one finished. Nothing was appended.
    Superseded,
    /// The input was blank.
    Ignored,
}

/// The greeting every conversation starts with.
pub fn greeting() -> String {
    format!("Hi, I'm {COMPANY_NAME} AI Support. Ask me about services, pricing, the blog, or careers.")
}

/// Message shown when the backend cannot answer.
pub fn unavailable_message() -> String {
    format!("AI support is temporarily unavailable. You can also reach us at {}.", CONTACT.email)
}

/// Owns a support conversation and guards it against out-of-order replies.
///
/// Every send takes the next sequence number. A reply is appended only if
/// its sequence number is still the latest when it arrives.
pub struct SupportChat<B> {
    backend: Arc<B>,
    page_url: String,
    messages: Mutex<Vec<ChatMessage>>,
    request_seq: AtomicU64,
    sending: AtomicBool,
}

impl<B: SupportBackend> SupportChat<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            page_url: String::new(),
            messages: Mutex::new(vec![ChatMessage::assistant(greeting())]),
            request_seq: AtomicU64::new(0),
            sending: AtomicBool::new(false),
        }
    }

    /// Set the page URL reported with each request.
    pub fn with_page_url(mut self, page_url: impl Into<String>) -> Self {
        self.page_url = page_url.into();
        self
    }

    /// Snapshot of the conversation, greeting first.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.messages.lock().await.clone()
    }

    /// Whether the most recent send is still waiting for its reply.
    pub fn is_sending(&self) -> bool {
        self.sending.load(Ordering::SeqCst)
    }

    /// Send `input` as a user message and wait for the reply.
    pub async fn send(&self, input: &str) -> SendOutcome {
        let text = input.trim();
        if text.is_empty() {
            return SendOutcome::Ignored;
        }

        let (seq, history) = {
            let mut messages = self.messages.lock().await;
            messages.push(ChatMessage::user(text));
            let seq = self.request_seq.fetch_add(1, Ordering::SeqCst) + 1;
            // Set and cleared only under `messages`, so the flag tracks the latest seq.
            self.sending.store(true, Ordering::SeqCst);
            (seq, messages.clone())
        };
        debug!(seq, messages = history.len(), "support chat send");

        let result = self.backend.ask(&history, &self.page_url).await;

        let mut messages = self.messages.lock().await;
        if self.request_seq.load(Ordering::SeqCst) != seq {
            debug!(seq, "dropping superseded reply");
            return SendOutcome::Superseded;
        }
        self.sending.store(false, Ordering::SeqCst);

        match result {
            Ok(reply) => {
                let formatted = format_assistant_text(&reply);
                messages.push(ChatMessage::assistant(formatted.clone()));
                SendOutcome::Replied(formatted)
            }
            Err(e) => {
                warn!(seq, error = %e, "support chat request failed");
                let fallback = format_assistant_text(&unavailable_message());
                messages.push(ChatMessage::assistant(fallback.clone()));
                SendOutcome::Unavailable(fallback)
            }
        }
    }
}
