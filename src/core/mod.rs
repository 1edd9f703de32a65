//! Core validation types.
//!
//! This module contains the pure data of the validation engine:
//! - Field rules and their per-kind messages
//! - Patterns used as the final check of a rule
//! - Verdicts produced per evaluation
//! - Ordered form snapshots
//!
//! Nothing in this module performs I/O or keeps state between calls.

mod pattern;
mod rule;
mod snapshot;
mod verdict;

pub use pattern::Pattern;
pub use rule::{FieldRule, Messages};
pub use snapshot::FormSnapshot;
pub use verdict::{FailureKind, Verdict};
