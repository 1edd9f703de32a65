//! Accepted submissions and where they are delivered.

use crate::core::FormSnapshot;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Errors a sink can report while delivering a submission
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    #[error("Submission rejected: {reason}")]
    Rejected { reason: String },

    #[error("Submission serialization failed: {0}")]
    Serialization(String),
}

/// A validated form snapshot, captured before the form is cleared.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub data: FormSnapshot,
}

impl Submission {
    pub fn new(data: FormSnapshot, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at,
            data,
        }
    }
}

/// Destination for accepted submissions.
///
/// This is the extension point for a future server call; delivery is
/// synchronous and happens before the form is cleared.
pub trait SubmissionSink {
    fn deliver(&mut self, submission: &Submission) -> Result<(), SubmitError>;
}

/// Sink that only logs the submitted data.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn deliver(&mut self, submission: &Submission) -> Result<(), SubmitError> {
        let data = submission
            .data
            .to_json()
            .map_err(|e| SubmitError::Serialization(e.to_string()))?;
        info!(
            id = %submission.id,
            submitted_at = %submission.submitted_at,
            %data,
            "form submitted"
        );
        Ok(())
    }
}

/// Sink that keeps every delivered submission in memory.
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    pub delivered: Vec<Submission>,
}

impl SubmissionSink for CollectingSink {
    fn deliver(&mut self, submission: &Submission) -> Result<(), SubmitError> {
        self.delivered.push(submission.clone());
        Ok(())
    }
}

impl<F> SubmissionSink for F
where
    F: FnMut(&Submission) -> Result<(), SubmitError>,
{
    fn deliver(&mut self, submission: &Submission) -> Result<(), SubmitError> {
        self(submission)
    }
}
