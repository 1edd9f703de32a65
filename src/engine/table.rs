//! The rule table and its evaluators.

use crate::builder::RuleTableBuilder;
use crate::core::{FieldRule, FormSnapshot, Verdict};
use crate::engine::report::{FieldError, FormReport};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Immutable mapping from field name to rule.
///
/// Loaded once at startup and shared read-only. Every evaluation is an
/// independent pure computation over the table and its input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleTable {
    rules: Vec<(String, FieldRule)>,
}

impl RuleTable {
    pub(crate) fn from_rules(rules: Vec<(String, FieldRule)>) -> Self {
        Self { rules }
    }

    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::new()
    }

    /// Rule for `name`, if the field is ruled.
    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.rules
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, rule)| rule)
    }

    /// Names of every ruled field, in table order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(name, _)| name.as_str())
    }

    /// Number of ruled fields.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate one field value.
    ///
    /// Fields without a rule are not validated and always pass.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formguard::core::FailureKind;
    /// use formguard::engine::RuleTable;
    ///
    /// let rules = RuleTable::contact_defaults();
    ///
    /// assert!(rules.evaluate_field("phone", "050-1234567").valid());
    /// assert_eq!(rules.evaluate_field("phone", "123").kind(), Some(FailureKind::Pattern));
    /// assert!(rules.evaluate_field("newsletter", "").valid());
    /// ```
    pub fn evaluate_field(&self, name: &str, value: &str) -> Verdict {
        let Some(rule) = self.get(name) else {
            return Verdict::Valid;
        };

        let verdict = rule.evaluate(value);
        if let Some(kind) = verdict.kind() {
            debug!(field = name, %kind, "field failed validation");
        }
        verdict
    }

    /// Evaluate every entry of a snapshot, in snapshot order.
    ///
    /// Only submitted fields are checked: a required field missing from
    /// the snapshot is not reported.
    pub fn evaluate_form(&self, snapshot: &FormSnapshot) -> FormReport {
        let mut report = FormReport::default();
        for (name, value) in snapshot.iter() {
            report.push(name, self.evaluate_field(name, value));
        }
        report
    }

    /// Evaluate a snapshot, accumulating ALL failing fields.
    /// Returns Validation::Success(()) if every field passes.
    pub fn validate_all(&self, snapshot: &FormSnapshot) -> Validation<(), NonEmptyVec<FieldError>> {
        let checks: Vec<Validation<(), NonEmptyVec<FieldError>>> = snapshot
            .iter()
            .map(|(name, value)| match self.evaluate_field(name, value) {
                Verdict::Valid => Validation::success(()),
                Verdict::Invalid { kind, error } => Validation::fail(FieldError {
                    field: name.to_string(),
                    kind,
                    message: error,
                }),
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}
