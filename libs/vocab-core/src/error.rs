//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using EngineError.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised by the catalog and the session engine. All of them are
/// synchronous and local to the call that triggered them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("not enough words: requested {requested}, {available} available")]
    InsufficientWords { requested: usize, available: usize },

    #[error("session is not complete")]
    SessionNotComplete,

    #[error("session is already complete")]
    SessionComplete,

    #[error("no question is awaiting an answer")]
    InvalidAnswer,
}
