//! Presentation shell around the pure validation engine.
//!
//! The engine never touches the page. This module connects it to a
//! [`FormView`] through the [`ContactForm`] context object:
//!
//! - blur validates one field and renders its verdict
//! - focus clears that field's error
//! - submit validates everything, hands a [`Submission`] to a
//!   [`SubmissionSink`], clears the form and shows a confirmation
//! - ticks expire the confirmation after the configured delay
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use formguard::config::FormConfig;
//! use formguard::engine::defaults::CONTACT_FIELDS;
//! use formguard::presentation::{ContactForm, MemoryView, UiEvent};
//!
//! let mut form = ContactForm::new(
//!     MemoryView::with_fields(CONTACT_FIELDS),
//!     &FormConfig::contact_defaults(),
//! )
//! .unwrap();
//!
//! form.view_mut().set_value("phone", "123");
//! form.dispatch(UiEvent::Blur("phone".to_string())).unwrap();
//! assert!(form.view().has_error("phone"));
//!
//! let submitted = form.dispatch(UiEvent::Submit { at: Utc::now() }).unwrap();
//! assert!(submitted.is_none());
//! ```

mod form;
mod submission;
mod view;

pub use form::{ContactForm, UiEvent};
pub use submission::{CollectingSink, LogSink, Submission, SubmissionSink, SubmitError};
pub use view::{FormView, MemoryView};
