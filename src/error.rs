//! Error types for quote detection

use thiserror::Error;

/// Errors that can occur while unquoting a message
#[derive(Error, Debug)]
pub enum UnquoteError {
    /// A handler selector could not be compiled
    #[error("Invalid selector for handler {handler}: {selector}")]
    InvalidSelector { handler: String, selector: String },

    /// Failed to parse the message structure
    #[error("Failed to parse message structure: {0}")]
    Message(String),

    /// Failed to decode a body part
    #[error("Failed to decode content: {0}")]
    Decode(String),

    /// Options document could not be read
    #[error("Invalid options: {0}")]
    Options(#[from] serde_json::Error),
}

/// Result type for unquote operations
pub type Result<T> = std::result::Result<T, UnquoteError>;
