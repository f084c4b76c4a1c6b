//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised while parsing style vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{value}' is not a scoring style")]
    UnknownStyle { value: String },

    #[error("each style must appear exactly once: {reason}")]
    InvalidTieBreak { reason: String },
}

impl ValidationError {
    pub fn unknown_style(value: impl Into<String>) -> Self {
        ValidationError::UnknownStyle {
            value: value.into(),
        }
    }

    pub fn invalid_tie_break(reason: impl Into<String>) -> Self {
        ValidationError::InvalidTieBreak {
            reason: reason.into(),
        }
    }
}
