//! Configuration for keyword retrieval.

use crate::error::{RagError, Result};

/// Number of documents returned when the caller does not ask for a specific count.
pub const DEFAULT_MAX_DOCS: usize = 5;

/// Shortest token kept by the tokenizer.
pub const DEFAULT_MIN_TERM_LEN: usize = 2;

/// Longest token kept by the tokenizer.
pub const DEFAULT_MAX_TERM_LEN: usize = 32;

/// Configuration parameters for the keyword retriever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrievalConfig {
    /// Maximum number of documents included in a context block.
    pub max_docs: usize,
    /// Tokens shorter than this are discarded.
    pub min_term_len: usize,
    /// Tokens longer than this are discarded.
    pub max_term_len: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_docs: DEFAULT_MAX_DOCS,
            min_term_len: DEFAULT_MIN_TERM_LEN,
            max_term_len: DEFAULT_MAX_TERM_LEN,
        }
    }
}

impl RetrievalConfig {
    /// Create a new builder for constructing a [`RetrievalConfig`].
    pub fn builder() -> RetrievalConfigBuilder {
        RetrievalConfigBuilder::default()
    }

    /// Check that the parameters are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::ConfigError`] if:
    /// - `max_docs == 0`
    /// - `min_term_len == 0`
    /// - `min_term_len > max_term_len`
    pub fn validate(&self) -> Result<()> {
        if self.max_docs == 0 {
            return Err(RagError::ConfigError("max_docs must be greater than zero".to_string()));
        }
        if self.min_term_len == 0 {
            return Err(RagError::ConfigError(
                "min_term_len must be greater than zero".to_string(),
            ));
        }
        if self.min_term_len > self.max_term_len {
            return Err(RagError::ConfigError(format!(
                "min_term_len ({}) must not exceed max_term_len ({})",
                self.min_term_len, self.max_term_len
            )));
        }
        Ok(())
    }
}

/// Builder for constructing a validated [`RetrievalConfig`].
#[derive(Debug, Clone, Default)]
pub struct RetrievalConfigBuilder {
    config: RetrievalConfig,
}

impl RetrievalConfigBuilder {
    /// Set the maximum number of documents per context block.
    pub fn max_docs(mut self, max_docs: usize) -> Self {
        self.config.max_docs = max_docs;
        self
    }

    /// Set the shortest token length kept by the tokenizer.
    pub fn min_term_len(mut self, len: usize) -> Self {
        self.config.min_term_len = len;
        self
    }

    /// Set the longest token length kept by the tokenizer.
    pub fn max_term_len(mut self, len: usize) -> Self {
        self.config.max_term_len = len;
        self
    }

    /// Build the [`RetrievalConfig`], validating that parameters are consistent.
    ///
    /// # Errors
    ///
    /// See [`RetrievalConfig::validate`].
    pub fn build(self) -> Result<RetrievalConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
