//! Configuration error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur while loading a form configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON input could not be parsed
    #[error("Configuration parse failed: {0}")]
    Parse(String),

    /// Configuration could not be rendered as JSON
    #[error("Configuration serialization failed: {0}")]
    Serialization(String),

    /// Configuration version is not supported by this version
    #[error("Unsupported configuration version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The same field name appears twice
    #[error("Field `{0}` is defined more than once")]
    DuplicateField(String),

    /// A field rule failed to build
    #[error("Invalid rule for field `{field}`: {source}")]
    InvalidRule {
        field: String,
        #[source]
        source: BuildError,
    },
}
