//! Error types for decoding Gemini content.

use thiserror::Error;

/// Errors that can occur when decoding or building content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A part object carries neither a usable `text` nor a usable `inlineData` payload.
    #[error("Invalid part: {reason}")]
    InvalidPart {
        /// What was wrong with the part
        reason: String,
    },

    /// An inline blob is missing one of its required string fields.
    #[error("Invalid inline data: `{field}` must be a string")]
    InvalidBlob {
        /// The wire name of the offending field
        field: &'static str,
    },

    /// A content object has the wrong shape.
    #[error("Invalid content: {reason}")]
    InvalidContent {
        /// What was wrong with the content
        reason: String,
    },

    /// Error occurred when parsing JSON.
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error occurred when reading a file for inline data.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ContentError {
    /// Creates a new InvalidPart error with the given reason.
    pub fn invalid_part(reason: impl Into<String>) -> Self {
        Self::InvalidPart {
            reason: reason.into(),
        }
    }

    /// Creates a new InvalidContent error with the given reason.
    pub fn invalid_content(reason: impl Into<String>) -> Self {
        Self::InvalidContent {
            reason: reason.into(),
        }
    }
}
