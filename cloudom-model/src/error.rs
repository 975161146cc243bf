//! Error types for chat completion clients.

use thiserror::Error;

/// Errors that can occur when calling an upstream chat completion API.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The request could not be sent or its response body could not be read.
    #[error("Request to {url} failed: {message}")]
    Request {
        /// Endpoint the request was sent to.
        url: String,
        /// A description of the failure.
        message: String,
    },

    /// The upstream answered with a non-success status.
    #[error("Upstream returned {status} from {url}")]
    Upstream {
        /// Last endpoint tried.
        url: String,
        /// HTTP status code.
        status: u16,
        /// JSON-serialized response body, truncated.
        details: String,
    },

    /// The upstream answered successfully but without usable completion text.
    #[error("Upstream returned an empty completion")]
    EmptyCompletion,
}

/// Result type alias for chat completion operations.
pub type Result<T> = std::result::Result<T, ModelError>;
