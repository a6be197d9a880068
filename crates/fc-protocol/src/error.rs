//! Protocol error types.

use thiserror::Error;

/// Errors raised while encoding function-call arguments.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("argument serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("encoded arguments are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Convenience alias for protocol results.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
