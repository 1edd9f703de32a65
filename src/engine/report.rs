//! Whole-form evaluation results.

use crate::core::{FailureKind, Verdict};
use serde::Serialize;
use thiserror::Error;

/// A single failing field, as collected by `RuleTable::validate_all`.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub kind: FailureKind,
    pub message: String,
}

/// Per-field verdicts in snapshot order, plus the overall result.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FormReport {
    verdicts: Vec<(String, Verdict)>,
}

impl FormReport {
    pub(crate) fn push(&mut self, field: &str, verdict: Verdict) {
        self.verdicts.push((field.to_string(), verdict));
    }

    /// True iff every evaluated field is valid.
    ///
    /// An empty report is valid.
    pub fn is_valid(&self) -> bool {
        self.verdicts.iter().all(|(_, v)| v.valid())
    }

    /// Verdict for one field, if it was evaluated.
    pub fn verdict(&self, field: &str) -> Option<&Verdict> {
        self.verdicts
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, v)| v)
    }

    /// Every field's verdict, in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Verdict)> {
        self.verdicts.iter().map(|(name, v)| (name.as_str(), v))
    }

    /// Failed fields as errors, in evaluation order.
    pub fn failures(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.verdicts.iter().filter_map(|(name, verdict)| match verdict {
            Verdict::Valid => None,
            Verdict::Invalid { kind, error } => Some(FieldError {
                field: name.clone(),
                kind: *kind,
                message: error.clone(),
            }),
        })
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }
}
