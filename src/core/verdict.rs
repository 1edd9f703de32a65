//! Results of evaluating a single field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four ways a field can fail its rule.
///
/// Variants are listed in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureKind {
    /// Value was empty or whitespace-only on a required field
    Required,
    /// Value is shorter than the rule's minimum length
    MinLength,
    /// Value is longer than the rule's maximum length
    MaxLength,
    /// Value does not satisfy the rule's pattern
    Pattern,
}

impl FailureKind {
    /// Get the kind's configuration key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Pattern => "pattern",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of evaluating one field value against its rule.
///
/// Verdicts are transient: produced per call and never cached.
///
/// # Example
///
/// ```rust
/// use formguard::core::{FailureKind, Verdict};
///
/// let ok = Verdict::Valid;
/// assert!(ok.valid());
/// assert_eq!(ok.error(), None);
///
/// let failed = Verdict::invalid(FailureKind::Required, "שדה חובה");
/// assert!(!failed.valid());
/// assert_eq!(failed.error(), Some("שדה חובה"));
/// assert_eq!(failed.kind(), Some(FailureKind::Required));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Verdict {
    Valid,
    Invalid { kind: FailureKind, error: String },
}

impl Verdict {
    pub fn invalid(kind: FailureKind, error: impl Into<String>) -> Self {
        Verdict::Invalid {
            kind,
            error: error.into(),
        }
    }

    pub fn valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// Error message, present iff the verdict is invalid.
    pub fn error(&self) -> Option<&str> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid { error, .. } => Some(error),
        }
    }

    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid { kind, .. } => Some(*kind),
        }
    }
}
