//! Builder API for ergonomic rule construction.
//!
//! This module provides fluent builders for field rules and rule tables.
//! Patterns are compiled and bounds are checked at build time, so a built
//! table never fails during evaluation.

pub mod error;
pub mod rule;
pub mod table;

pub use error::BuildError;
pub use rule::FieldRuleBuilder;
pub use table::RuleTableBuilder;
