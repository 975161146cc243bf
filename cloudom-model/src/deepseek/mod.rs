//! DeepSeek provider.
//!
//! Talks to the `/chat/completions` API of DeepSeek or any OpenAI-compatible
//! host, non-streaming, with fixed sampling parameters.
//!
//! # Example
//!
//! ```rust,ignore
//! use cloudom_model::{ChatMessage, ChatModel};
//! use cloudom_model::deepseek::{DeepSeekClient, DeepSeekConfig};
//!
//! let client = DeepSeekClient::new(
//!     DeepSeekConfig::new(std::env::var("DEEPSEEK_API_KEY")?).with_model("deepseek-chat"),
//! )?;
//! let completion = client
//!     .complete(vec![ChatMessage::system("Be brief."), ChatMessage::user("Hello")])
//!     .await?;
//! println!("{}", completion.text);
//! ```
//!
//! # Endpoint fallback
//!
//! | Order | Endpoint | Tried when |
//! |-------|----------|------------|
//! | 1 | `<base>/chat/completions` | always |
//! | 2 | `<base>/v1/chat/completions` | endpoint 1 answered 404 |

mod client;
mod config;

pub use client::{DeepSeekClient, MAX_DETAILS_CHARS};
pub use config::{
    API_KEY_ENV, BASE_URL_ENV, DEEPSEEK_API_BASE, DEEPSEEK_DEFAULT_MODEL, DeepSeekConfig, MODEL_ENV,
};
