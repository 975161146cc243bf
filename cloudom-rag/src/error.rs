//! Error types for the `cloudom-rag` crate.

use thiserror::Error;

/// Errors that can occur while configuring retrieval or assembling a knowledge base.
#[derive(Debug, Error)]
pub enum RagError {
    /// A configuration validation error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Two documents in one knowledge base share an id.
    #[error("Duplicate document id: {id}")]
    DuplicateDocument {
        /// The id that appeared more than once.
        id: String,
    },
}

/// A convenience result type for retrieval operations.
pub type Result<T> = std::result::Result<T, RagError>;
