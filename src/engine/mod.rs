//! The validation engine.
//!
//! A [`RuleTable`] evaluates one field or a whole form snapshot. Checks
//! short-circuit per field, so at most one message is reported for each
//! field, and the first triggered check wins.
//!
//! Two whole-form evaluators are provided:
//!
//! - [`RuleTable::evaluate_form`] returns a [`FormReport`] with every
//!   verdict, valid or not, for rendering.
//! - [`RuleTable::validate_all`] uses Stillwater's `Validation` to
//!   accumulate every failing field into a `NonEmptyVec<FieldError>`.
//!
//! # Example
//!
//! ```rust
//! use formguard::core::{FailureKind, FormSnapshot};
//! use formguard::engine::RuleTable;
//!
//! let rules = RuleTable::contact_defaults();
//! let snapshot = FormSnapshot::new()
//!     .with("fullName", "אבי כהן")
//!     .with("phone", "050-1234567")
//!     .with("email", "")
//!     .with("propertyType", "apartment")
//!     .with("message", "");
//!
//! assert!(rules.evaluate_form(&snapshot).is_valid());
//! ```

pub mod defaults;
mod report;
mod table;

pub use report::{FieldError, FormReport};
pub use table::RuleTable;
