//! # cloudom-chat
//!
//! Client side of Cloudom Systems AI support.
//!
//! - [`SupportClient`] - posts a conversation plus retrieved site context to
//!   the `/api/chat` proxy
//! - [`SupportChat`] - owns the conversation and drops replies that arrive
//!   after a newer question was sent
//! - [`format_assistant_text`] - turns model replies into plain display text
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cloudom_chat::{SupportChat, SupportClient};
//!
//! # async fn run() -> cloudom_chat::Result<()> {
//! let client = SupportClient::new("http://127.0.0.1:8787")?;
//! let chat = SupportChat::new(Arc::new(client));
//! let outcome = chat.send("How much does a mobile app cost?").await;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod format;
pub mod session;

pub use client::{SupportBackend, SupportClient};
pub use error::{ChatClientError, Result};
pub use format::format_assistant_text;
pub use session::{SendOutcome, SupportChat, greeting, unavailable_message};
