//! Build errors for field rules and rule tables.

use crate::core::FailureKind;
use thiserror::Error;

/// Errors that can occur when building field rules and rule tables.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Minimum length {min} exceeds maximum length {max}")]
    InvalidLengthBounds { min: usize, max: usize },

    #[error("No message configured for `{kind}` failures. Call .message({kind:?}, text)")]
    MissingMessage { kind: FailureKind },

    #[error("Field `{name}` is already defined")]
    DuplicateField { name: String },
}
