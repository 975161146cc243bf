//! DeepSeek client configuration.

use crate::error::{ModelError, Result};
use crate::model::SamplingParams;

/// Default DeepSeek API base URL.
pub const DEEPSEEK_API_BASE: &str = "https://api.deepseek.com";

/// Default chat model.
pub const DEEPSEEK_DEFAULT_MODEL: &str = "deepseek-chat";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "DEEPSEEK_API_KEY";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "DEEPSEEK_BASE_URL";
/// Environment variable overriding the model name.
pub const MODEL_ENV: &str = "DEEPSEEK_MODEL";

/// Configuration for [`DeepSeekClient`](super::DeepSeekClient).
#[derive(Clone, PartialEq)]
pub struct DeepSeekConfig {
    /// Bearer token for the API.
    pub api_key: String,
    /// API base URL without a trailing slash.
    pub base_url: String,
    /// Model name sent with each request.
    pub model: String,
    /// Sampling parameters sent with each request.
    pub sampling: SamplingParams,
}

impl std::fmt::Debug for DeepSeekConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepSeekConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("sampling", &self.sampling)
            .finish()
    }
}

impl DeepSeekConfig {
    /// Create a config for the default endpoint and model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEEPSEEK_API_BASE.to_string(),
            model: DEEPSEEK_DEFAULT_MODEL.to_string(),
            sampling: SamplingParams::default(),
        }
    }

    /// Read the config from `DEEPSEEK_API_KEY`, `DEEPSEEK_BASE_URL` and `DEEPSEEK_MODEL`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidConfig`] if the API key is unset or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the config through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_ENV)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ModelError::InvalidConfig(format!("{API_KEY_ENV} is not set")))?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(base_url);
        }
        if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_model(model);
        }
        Ok(config)
    }

    /// Set the base URL. Trailing slashes are removed.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the model name. Surrounding whitespace is removed.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into().trim().to_string();
        self
    }

    /// Completion endpoints in the order they are tried: primary, then the
    /// `/v1` variant used when the primary answers 404.
    pub fn endpoints(&self) -> [String; 2] {
        [
            format!("{}/chat/completions", self.base_url),
            format!("{}/v1/chat/completions", self.base_url),
        ]
    }
}
