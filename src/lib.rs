//! Formguard: declarative validation for a contact form
//!
//! Formguard follows a "pure core, imperative shell" layout. Field rules and
//! their evaluators are pure functions over immutable data. Rendering errors,
//! clearing the form and delivering submissions live in a thin shell behind
//! the [`presentation::FormView`] trait.
//!
//! # Core Concepts
//!
//! - **Field Rule**: declarative constraints for one field (required,
//!   length bounds, pattern) plus a message per failure kind
//! - **Verdict**: the pass/fail result of one field evaluation
//! - **Snapshot**: an ordered capture of submitted field values
//! - **Rule Table**: the immutable set of rules, loaded once at startup
//!
//! # Example
//!
//! ```rust
//! use formguard::core::{FailureKind, FormSnapshot};
//! use formguard::engine::RuleTable;
//!
//! let rules = RuleTable::contact_defaults();
//!
//! let snapshot = FormSnapshot::new()
//!     .with("fullName", "A")
//!     .with("phone", "123")
//!     .with("email", "")
//!     .with("propertyType", "")
//!     .with("message", "x".repeat(1001));
//!
//! let report = rules.evaluate_form(&snapshot);
//! assert!(!report.is_valid());
//! assert_eq!(report.verdict("fullName").and_then(|v| v.kind()), Some(FailureKind::MinLength));
//! assert!(report.verdict("email").unwrap().valid());
//! ```

pub mod builder;
pub mod chrome;
pub mod config;
pub mod core;
pub mod engine;
pub mod presentation;

// Re-export commonly used types
pub use crate::builder::{BuildError, FieldRuleBuilder};
pub use crate::config::FormConfig;
pub use crate::core::{FailureKind, FieldRule, FormSnapshot, Verdict};
pub use crate::engine::{FormReport, RuleTable};
pub use crate::presentation::{ContactForm, FormView};
