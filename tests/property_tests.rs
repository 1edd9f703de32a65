//! Property-based tests for the validation engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use formguard::core::{FailureKind, FormSnapshot};
use formguard::engine::defaults::{CONTACT_FIELDS, EMAIL, FULL_NAME, MESSAGE, PHONE, PROPERTY_TYPE};
use formguard::engine::RuleTable;
use proptest::prelude::*;

prop_compose! {
    fn blank()(spaces in prop::collection::vec(prop::sample::select(vec![' ', '\t', '\n', '\r']), 0..6)) -> String {
        spaces.into_iter().collect()
    }
}

prop_compose! {
    fn contact_field()(index in 0..CONTACT_FIELDS.len()) -> &'static str {
        CONTACT_FIELDS[index]
    }
}

prop_compose! {
    fn valid_phone()(
        prefix in prop::sample::select(vec!["05", "04", "02", "03", "08", "09"]),
        area in "[0-9]{1,2}",
        first in "[0-9]{3}",
        last in "[0-9]{4}",
        dashed in any::<bool>(),
    ) -> String {
        let sep = if dashed { "-" } else { "" };
        format!("{}{}{}{}{}{}", prefix, area, sep, first, sep, last)
    }
}

fn valid_snapshot() -> FormSnapshot {
    FormSnapshot::new()
        .with(FULL_NAME, "אבי כהן")
        .with(PHONE, "050-1234567")
        .with(EMAIL, "")
        .with(PROPERTY_TYPE, "apartment")
        .with(MESSAGE, "")
}

fn invalid_value(field: &str) -> String {
    match field {
        FULL_NAME => "A".to_string(),
        PHONE => "123".to_string(),
        EMAIL => "bad".to_string(),
        MESSAGE => "x".repeat(1001),
        _ => String::new(),
    }
}

proptest! {
    #[test]
    fn optional_fields_accept_blank(value in blank()) {
        let rules = RuleTable::contact_defaults();
        for field in [EMAIL, MESSAGE] {
            prop_assert!(rules.evaluate_field(field, &value).valid());
        }
    }

    #[test]
    fn required_fields_reject_blank(value in blank()) {
        let rules = RuleTable::contact_defaults();
        for field in [FULL_NAME, PHONE, PROPERTY_TYPE] {
            let verdict = rules.evaluate_field(field, &value);
            prop_assert_eq!(verdict.kind(), Some(FailureKind::Required));
            let expected = rules.get(field).unwrap().messages().get(FailureKind::Required);
            prop_assert_eq!(verdict.error(), expected);
        }
    }

    #[test]
    fn short_names_fail_min_length_before_pattern(c in "[a-zA-Z0-9א-ת]") {
        let verdict = RuleTable::contact_defaults().evaluate_field(FULL_NAME, &c);
        prop_assert_eq!(verdict.kind(), Some(FailureKind::MinLength));
    }

    #[test]
    fn latin_names_fail_pattern(name in "[a-zA-Z]{2,20}") {
        let verdict = RuleTable::contact_defaults().evaluate_field(FULL_NAME, &name);
        prop_assert_eq!(verdict.kind(), Some(FailureKind::Pattern));
    }

    #[test]
    fn hebrew_names_pass(name in "[א-ת]{2,10}( [א-ת]{1,10})?") {
        prop_assert!(RuleTable::contact_defaults().evaluate_field(FULL_NAME, &name).valid());
    }

    #[test]
    fn local_phone_shapes_pass(phone in valid_phone()) {
        prop_assert!(RuleTable::contact_defaults().evaluate_field(PHONE, &phone).valid());
    }

    #[test]
    fn message_length_limit(len in 1usize..1100) {
        let verdict = RuleTable::contact_defaults().evaluate_field(MESSAGE, &"x".repeat(len));
        if len <= 1000 {
            prop_assert!(verdict.valid());
        } else {
            prop_assert_eq!(verdict.kind(), Some(FailureKind::MaxLength));
        }
    }

    #[test]
    fn unknown_fields_always_pass(name in "[a-z]{1,12}", value in ".{0,20}") {
        prop_assume!(!CONTACT_FIELDS.contains(&name.as_str()));
        prop_assert!(RuleTable::contact_defaults().evaluate_field(&name, &value).valid());
    }

    #[test]
    fn evaluation_is_deterministic(field in contact_field(), value in ".{0,30}") {
        let rules = RuleTable::contact_defaults();
        prop_assert_eq!(rules.evaluate_field(field, &value), rules.evaluate_field(field, &value));
    }

    #[test]
    fn one_invalid_field_flips_only_that_verdict(field in contact_field()) {
        let rules = RuleTable::contact_defaults();
        let valid = valid_snapshot();
        prop_assert!(rules.evaluate_form(&valid).is_valid());

        let broken = valid.clone().with(field, invalid_value(field));
        let report = rules.evaluate_form(&broken);

        prop_assert!(!report.is_valid());
        for (name, verdict) in report.iter() {
            prop_assert_eq!(verdict.valid(), name != field);
        }
    }
}
