//! Request error type for backend operations.
//!
//! Every backend failure surfaces identically as a [`RequestFailed`]
//! carrying a human-readable message, regardless of which of the four
//! operations produced it. Callers decide presentation; the data layer
//! never logs or swallows errors itself.

use thiserror::Error;

/// A failed request against the task backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestFailed {
    pub message: String,
}

impl RequestFailed {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for RequestFailed {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Result type for backend operations.
pub type StoreResult<T> = std::result::Result<T, RequestFailed>;
