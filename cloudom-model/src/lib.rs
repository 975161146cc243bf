//! # cloudom-model
//!
//! Chat completion clients for Cloudom Systems AI support.
//!
//! ## Overview
//!
//! - [`ChatModel`] - the seam the chat proxy calls through
//! - [`DeepSeekClient`] - DeepSeek / OpenAI-compatible `/chat/completions` client
//! - [`MockChatModel`] - scripted model for tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cloudom_model::deepseek::DeepSeekClient;
//!
//! let client = DeepSeekClient::from_env().expect("DEEPSEEK_API_KEY must be set");
//! ```

pub mod deepseek;
pub mod error;
pub mod message;
pub mod mock;
pub mod model;

pub use deepseek::{DeepSeekClient, DeepSeekConfig};
pub use error::{ModelError, Result};
pub use message::{ChatMessage, Role};
pub use mock::MockChatModel;
pub use model::{ChatModel, Completion, SamplingParams};
