//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using ExtractError.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while walking the embedded page state.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid JSON in {stage}: {source}")]
    InvalidJson {
        stage: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} not found")]
    MissingField(&'static str),

    #[error("{0} is not a JSON string")]
    NotAString(&'static str),

    #[error("studiableItems could not be decoded: {0}")]
    InvalidItems(#[source] serde_json::Error),
}
