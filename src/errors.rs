//! Error types shared by layered-nlp value types.

use thiserror::Error;

/// Errors raised while constructing symbols, ranges, and alignments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommonError {
    /// A required argument was absent or outside the set it must belong to.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CommonError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CommonError::InvalidArgument {
            message: message.into(),
        }
    }

    /// The human-readable part of the error, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            CommonError::InvalidArgument { message } => message,
        }
    }
}

/// Result type for fallible constructors.
pub type CommonResult<T> = Result<T, CommonError>;
