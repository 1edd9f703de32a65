//! Declarative constraints for a single form field.

use super::pattern::Pattern;
use super::verdict::{FailureKind, Verdict};
use std::collections::BTreeMap;

/// Error messages keyed by failure kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Messages {
    by_kind: BTreeMap<FailureKind, String>,
}

impl Messages {
    /// An empty message set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with the message for `kind` set.
    pub fn with(mut self, kind: FailureKind, text: impl Into<String>) -> Self {
        self.by_kind.insert(kind, text.into());
        self
    }

    /// Message for `kind`, if one is set.
    pub fn get(&self, kind: FailureKind) -> Option<&str> {
        self.by_kind.get(&kind).map(String::as_str)
    }

    /// Messages in failure-kind order.
    pub fn iter(&self) -> impl Iterator<Item = (FailureKind, &str)> {
        self.by_kind.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl FromIterator<(FailureKind, String)> for Messages {
    fn from_iter<I: IntoIterator<Item = (FailureKind, String)>>(iter: I) -> Self {
        Messages {
            by_kind: iter.into_iter().collect(),
        }
    }
}

/// Constraint set for one field.
///
/// Rules are immutable once built. Use [`crate::builder::FieldRuleBuilder`]
/// to construct one.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldRule {
    pub(crate) required: bool,
    pub(crate) min_length: Option<usize>,
    pub(crate) max_length: Option<usize>,
    pub(crate) pattern: Option<Pattern>,
    pub(crate) messages: Messages,
}

impl FieldRule {
    /// Whether a blank value fails.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Minimum length in UTF-16 code units.
    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    /// Maximum length in UTF-16 code units.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Pattern a non-blank value must match.
    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// Error messages shown for each failure kind.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Evaluate a value against this rule (pure).
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// required, optional-empty short-circuit, minimum length, maximum
    /// length, pattern. Lengths count UTF-16 code units, as browsers do.
    pub fn evaluate(&self, value: &str) -> Verdict {
        let blank = value.chars().all(is_form_whitespace);

        if blank {
            return if self.required {
                self.fail(FailureKind::Required)
            } else {
                Verdict::Valid
            };
        }

        let length = value.encode_utf16().count();

        if self.min_length.is_some_and(|min| length < min) {
            return self.fail(FailureKind::MinLength);
        }

        if self.max_length.is_some_and(|max| length > max) {
            return self.fail(FailureKind::MaxLength);
        }

        if self.pattern.as_ref().is_some_and(|p| !p.matches(value)) {
            return self.fail(FailureKind::Pattern);
        }

        Verdict::Valid
    }

    // A missing message still fails; the error text is just empty.
    fn fail(&self, kind: FailureKind) -> Verdict {
        Verdict::invalid(kind, self.messages.get(kind).unwrap_or_default())
    }
}

/// Whitespace as browsers trim it: Unicode `White_Space` plus the byte
/// order mark, minus NEL (U+0085).
pub(crate) fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{0085}' && c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_rule() -> FieldRule {
        FieldRule {
            required: true,
            min_length: Some(2),
            max_length: None,
            pattern: Some(Pattern::new(r"^[א-ת\s]+$").unwrap()),
            messages: Messages::new()
                .with(FailureKind::Required, "required")
                .with(FailureKind::MinLength, "too short")
                .with(FailureKind::Pattern, "letters only"),
        }
    }

    fn optional_rule() -> FieldRule {
        FieldRule {
            required: false,
            min_length: Some(5),
            max_length: Some(10),
            pattern: Some(Pattern::new("^x+$").unwrap()),
            messages: Messages::new(),
        }
    }

    #[test]
    fn required_blank_fails_with_required_message() {
        let rule = name_rule();

        for value in ["", " ", "\t\n"] {
            let verdict = rule.evaluate(value);
            assert_eq!(verdict.kind(), Some(FailureKind::Required));
            assert_eq!(verdict.error(), Some("required"));
        }
    }

    #[test]
    fn optional_blank_skips_every_other_check() {
        let rule = optional_rule();

        assert!(rule.evaluate("").valid());
        assert!(rule.evaluate("   ").valid());
    }

    #[test]
    fn min_length_takes_precedence_over_pattern() {
        let verdict = name_rule().evaluate("A");

        assert_eq!(verdict.kind(), Some(FailureKind::MinLength));
        assert_eq!(verdict.error(), Some("too short"));
    }

    #[test]
    fn pattern_runs_after_length_checks_pass() {
        let verdict = name_rule().evaluate("Avi");

        assert_eq!(verdict.kind(), Some(FailureKind::Pattern));
        assert_eq!(verdict.error(), Some("letters only"));
    }

    #[test]
    fn blank_follows_browser_whitespace() {
        let rule = name_rule();

        assert_eq!(
            rule.evaluate("\u{FEFF}").kind(),
            Some(FailureKind::Required)
        );
        assert_eq!(
            rule.evaluate("\u{3000}\u{00A0}").kind(),
            Some(FailureKind::Required)
        );
        // NEL is content, not whitespace, so it reaches the length check.
        assert_eq!(
            rule.evaluate("\u{0085}").kind(),
            Some(FailureKind::MinLength)
        );
    }

    #[test]
    fn length_counts_utf16_units() {
        // One astral character is two UTF-16 units.
        let rule = FieldRule {
            required: false,
            min_length: None,
            max_length: Some(3),
            pattern: None,
            messages: Messages::new(),
        };

        assert!(rule.evaluate("😀x").valid());
        assert_eq!(rule.evaluate("😀😀").kind(), Some(FailureKind::MaxLength));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Two Hebrew letters are four bytes in UTF-8.
        assert!(name_rule().evaluate("אב").valid());
    }

    #[test]
    fn max_length_boundary() {
        let rule = optional_rule();

        assert!(rule.evaluate("xxxxxxxxxx").valid());
        assert_eq!(
            rule.evaluate("xxxxxxxxxxx").kind(),
            Some(FailureKind::MaxLength)
        );
    }

    #[test]
    fn missing_message_still_fails() {
        let verdict = optional_rule().evaluate("xx");

        assert!(!verdict.valid());
        assert_eq!(verdict.kind(), Some(FailureKind::MinLength));
        assert_eq!(verdict.error(), Some(""));
    }

    #[test]
    fn messages_collect_from_pairs() {
        let messages: Messages = vec![
            (FailureKind::Pattern, "p".to_string()),
            (FailureKind::Required, "r".to_string()),
        ]
        .into_iter()
        .collect();

        let kinds: Vec<_> = messages.iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![FailureKind::Required, FailureKind::Pattern]);
        assert_eq!(messages.get(FailureKind::MaxLength), None);
    }
}
