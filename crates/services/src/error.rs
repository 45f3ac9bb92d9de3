//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by a `SpeechEngine`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SpeechError {
    #[error("speech synthesis is not available")]
    Unavailable,
    #[error("speech capability has not been detected yet")]
    Pending,
    #[error("speech request failed: {0}")]
    Failed(String),
    #[error("speech request could not be encoded: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for SpeechError {
    fn from(err: serde_json::Error) -> Self {
        SpeechError::Encode(err.to_string())
    }
}
