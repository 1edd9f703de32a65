//! Text patterns used as the last check of a field rule.
//!
//! A pattern is a pure predicate over the whole field value. Anchoring is
//! part of the pattern source, so `^...$` patterns test the full string.

use regex::Regex;
use std::fmt;

/// Compiled text-matching predicate.
///
/// # Example
///
/// ```rust
/// use formguard::core::Pattern;
///
/// let digits = Pattern::new(r"^[0-9]+$").unwrap();
///
/// assert!(digits.matches("0501234567"));
/// assert!(!digits.matches("050-1234567"));
/// assert_eq!(digits.source(), r"^[0-9]+$");
/// ```
#[derive(Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern from its source text.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Ok(Pattern {
            regex: Regex::new(source)?,
        })
    }

    /// Check whether the value satisfies the pattern.
    ///
    /// Pure: the same value always yields the same answer.
    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// The source text the pattern was compiled from.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source()).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_matches_hebrew_letters_and_spaces() {
        let pattern = Pattern::new(r"^[א-ת\s]+$").unwrap();

        assert!(pattern.matches("אבי כהן"));
        assert!(!pattern.matches("Avi Cohen"));
        assert!(!pattern.matches("אבי1"));
    }

    #[test]
    fn pattern_is_deterministic() {
        let pattern = Pattern::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

        let first = pattern.matches("dana@example.co.il");
        let second = pattern.matches("dana@example.co.il");

        assert!(first);
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_source_is_rejected() {
        assert!(Pattern::new("([unclosed").is_err());
    }

    #[test]
    fn patterns_compare_by_source() {
        let a = Pattern::new("^a$").unwrap();
        let b = Pattern::new("^a$").unwrap();
        let c = Pattern::new("^b$").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(format!("{:?}", a), "Pattern(\"^a$\")");
    }
}
