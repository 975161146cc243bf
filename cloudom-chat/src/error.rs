use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChatClientError>;

#[derive(Debug, Error)]
pub enum ChatClientError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx answer; the message is the response text or
    /// `Request failed (<status>)` when the body was empty.
    #[error("{message}")]
    Status { status: u16, message: String },
}
