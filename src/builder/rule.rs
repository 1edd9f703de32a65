//! Builder for constructing field rules.

use crate::builder::error::BuildError;
use crate::core::{FailureKind, FieldRule, Messages, Pattern};

/// Builder for field rules with a fluent API.
///
/// # Example
///
/// ```rust
/// use formguard::builder::FieldRuleBuilder;
/// use formguard::core::FailureKind;
///
/// let rule = FieldRuleBuilder::new()
///     .required()
///     .min_length(2)
///     .pattern(r"^[א-ת\s]+$")
///     .message(FailureKind::Required, "שם מלא הוא שדה חובה")
///     .message(FailureKind::MinLength, "השם חייב להיות לפחות 2 תווים")
///     .message(FailureKind::Pattern, "אותיות עבריות ורווחים בלבד")
///     .build_strict()
///     .unwrap();
///
/// assert!(rule.evaluate("אבי כהן").valid());
/// assert_eq!(rule.evaluate("א").kind(), Some(FailureKind::MinLength));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldRuleBuilder {
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<String>,
    messages: Messages,
}

impl FieldRuleBuilder {
    /// Create a builder for an optional, unconstrained field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set whether the field is required.
    pub fn set_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the minimum length, counted in UTF-16 code units.
    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    /// Set the maximum length, counted in UTF-16 code units.
    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    /// Set the pattern source. Compiled by `build()`.
    pub fn pattern(mut self, source: impl Into<String>) -> Self {
        self.pattern = Some(source.into());
        self
    }

    /// Set the message reported for one failure kind.
    pub fn message(mut self, kind: FailureKind, text: impl Into<String>) -> Self {
        self.messages = self.messages.with(kind, text);
        self
    }

    /// Build the rule.
    ///
    /// Kinds without a message still fail, with empty error text.
    pub fn build(self) -> Result<FieldRule, BuildError> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(BuildError::InvalidLengthBounds { min, max });
            }
        }

        let pattern = self
            .pattern
            .map(|source| {
                Pattern::new(&source).map_err(|e| BuildError::InvalidPattern {
                    pattern: source.clone(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        Ok(FieldRule {
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            pattern,
            messages: self.messages,
        })
    }

    /// Build the rule, also requiring a message for every reachable kind.
    pub fn build_strict(self) -> Result<FieldRule, BuildError> {
        let rule = self.build()?;

        let reachable = [
            (FailureKind::Required, rule.required),
            (FailureKind::MinLength, rule.min_length.is_some()),
            (FailureKind::MaxLength, rule.max_length.is_some()),
            (FailureKind::Pattern, rule.pattern.is_some()),
        ];

        for (kind, _) in reachable.iter().filter(|(_, used)| *used) {
            if rule.messages.get(*kind).is_none() {
                return Err(BuildError::MissingMessage { kind: *kind });
            }
        }

        Ok(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_builder_yields_optional_unconstrained_rule() {
        let rule = FieldRuleBuilder::new().build().unwrap();

        assert!(!rule.is_required());
        assert_eq!(rule.min_length(), None);
        assert_eq!(rule.max_length(), None);
        assert!(rule.pattern().is_none());
        assert!(rule.evaluate("anything").valid());
    }

    #[test]
    fn builder_rejects_inverted_bounds() {
        let result = FieldRuleBuilder::new().min_length(5).max_length(2).build();

        assert_eq!(
            result,
            Err(BuildError::InvalidLengthBounds { min: 5, max: 2 })
        );
    }

    #[test]
    fn builder_rejects_invalid_pattern() {
        let result = FieldRuleBuilder::new().pattern("(").build();

        assert!(matches!(
            result,
            Err(BuildError::InvalidPattern { ref pattern, .. }) if pattern == "("
        ));
    }

    #[test]
    fn strict_build_requires_messages_for_used_constraints() {
        let result = FieldRuleBuilder::new()
            .required()
            .message(FailureKind::Required, "required")
            .max_length(10)
            .build_strict();

        assert_eq!(
            result,
            Err(BuildError::MissingMessage {
                kind: FailureKind::MaxLength
            })
        );
    }

    #[test]
    fn lenient_build_allows_missing_messages() {
        let rule = FieldRuleBuilder::new().max_length(3).build().unwrap();

        assert_eq!(rule.evaluate("abcd").error(), Some(""));
    }

    #[test]
    fn set_required_toggles_flag() {
        let rule = FieldRuleBuilder::new()
            .required()
            .set_required(false)
            .build()
            .unwrap();

        assert!(!rule.is_required());
    }
}
