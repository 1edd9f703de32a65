//! Contact form controller.

use crate::config::{ConfigError, FormConfig, DEFAULT_CONFIRMATION_DELAY_MS};
use crate::core::{FormSnapshot, Verdict};
use crate::engine::RuleTable;
use crate::presentation::submission::{LogSink, Submission, SubmissionSink, SubmitError};
use crate::presentation::view::FormView;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::{debug, warn};

/// User interface events the controller reacts to.
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// A control lost focus
    Blur(String),
    /// A control gained focus
    Focus(String),
    /// The form was submitted
    Submit { at: DateTime<Utc> },
    /// Clock tick, used to expire the confirmation message
    Tick { at: DateTime<Utc> },
}

/// Context object tying a rendered form to its rule table.
///
/// Owns the view, the rules and the submission sink. Handlers run
/// synchronously; time is passed in by the caller.
pub struct ContactForm<V: FormView, K: SubmissionSink = LogSink> {
    view: V,
    rules: RuleTable,
    sink: K,
    confirmation_delay: Duration,
    hide_confirmation_at: Option<DateTime<Utc>>,
}

impl<V: FormView> ContactForm<V, LogSink> {
    /// Create a controller from configuration, logging submissions.
    pub fn new(view: V, config: &FormConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_sink(
            view,
            config.rule_table()?,
            LogSink,
            config.confirmation_delay(),
        ))
    }
}

impl<V: FormView, K: SubmissionSink> ContactForm<V, K> {
    pub fn with_sink(view: V, rules: RuleTable, sink: K, confirmation_delay: Duration) -> Self {
        Self {
            view,
            rules,
            sink,
            confirmation_delay,
            hide_confirmation_at: None,
        }
    }

    /// The view this form reads from and renders into.
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Rules applied on blur and submit.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Destination of accepted submissions.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// When the confirmation message will hide, if it is showing.
    pub fn confirmation_deadline(&self) -> Option<DateTime<Utc>> {
        self.hide_confirmation_at
    }

    /// Evaluate a single value (pure; nothing is rendered).
    pub fn validate_field(&self, name: &str, value: &str) -> Verdict {
        self.rules.evaluate_field(name, value)
    }

    /// Read every control of the form, in document order.
    pub fn get_form_data(&self) -> FormSnapshot {
        self.view
            .field_names()
            .into_iter()
            .filter_map(|name| {
                let value = self.view.read_value(&name)?;
                Some((name, value))
            })
            .collect()
    }

    /// Validate the current form contents and render every verdict.
    pub fn validate_form(&mut self) -> bool {
        let report = self.rules.evaluate_form(&self.get_form_data());
        for (name, verdict) in report.iter() {
            self.view.show_error(name, verdict.error());
        }
        report.is_valid()
    }

    pub fn is_form_valid(&mut self) -> bool {
        self.validate_form()
    }

    /// Reset every control and clear the errors of every ruled field.
    pub fn clear_form(&mut self) {
        self.view.reset();
        for name in self.rules.field_names() {
            self.view.show_error(name, None);
        }
    }

    /// Validate the field that lost focus and render its verdict.
    pub fn on_blur(&mut self, name: &str) {
        if self.rules.get(name).is_none() {
            return;
        }
        if let Some(value) = self.view.read_value(name) {
            let verdict = self.rules.evaluate_field(name, &value);
            self.view.show_error(name, verdict.error());
        }
    }

    pub fn on_focus(&mut self, name: &str) {
        if self.rules.get(name).is_some() {
            self.view.show_error(name, None);
        }
    }

    /// Submit-event handler.
    ///
    /// Invalid forms render their errors and return `Ok(None)`. Valid forms
    /// are captured, delivered to the sink, cleared, and the confirmation
    /// is shown until `now + confirmation_delay`. A sink failure leaves the
    /// form as it was.
    pub fn handle_submit(&mut self, now: DateTime<Utc>) -> Result<Option<Submission>, SubmitError> {
        if !self.validate_form() {
            debug!("submission blocked by invalid fields");
            return Ok(None);
        }

        let submission = Submission::new(self.get_form_data(), now);
        if let Err(e) = self.sink.deliver(&submission) {
            warn!(id = %submission.id, error = %e, "submission delivery failed");
            return Err(e);
        }

        self.view.set_confirmation_visible(true);
        self.clear_form();
        self.hide_confirmation_at = self.hide_at(now);

        Ok(Some(submission))
    }

    // Delays chrono cannot represent fall back to the default delay.
    fn hide_at(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        chrono::Duration::from_std(self.confirmation_delay)
            .ok()
            .and_then(|delay| now.checked_add_signed(delay))
            .or_else(|| {
                warn!(
                    delay = ?self.confirmation_delay,
                    "confirmation delay out of range, using default"
                );
                now.checked_add_signed(chrono::Duration::milliseconds(
                    DEFAULT_CONFIRMATION_DELAY_MS as i64,
                ))
            })
    }

    /// Validate, and submit only if the form is valid.
    pub fn submit_form(&mut self, now: DateTime<Utc>) -> Result<Option<Submission>, SubmitError> {
        if !self.validate_form() {
            return Ok(None);
        }
        self.dispatch(UiEvent::Submit { at: now })
    }

    /// Hide the confirmation once its deadline has passed.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.hide_confirmation_at.is_some_and(|at| now >= at) {
            self.view.set_confirmation_visible(false);
            self.hide_confirmation_at = None;
        }
    }

    /// Route an event to its handler.
    ///
    /// Only `Submit` can produce a submission or an error.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<Option<Submission>, SubmitError> {
        match event {
            UiEvent::Blur(name) => self.on_blur(&name),
            UiEvent::Focus(name) => self.on_focus(&name),
            UiEvent::Submit { at } => return self.handle_submit(at),
            UiEvent::Tick { at } => self.tick(at),
        }
        Ok(None)
    }
}
