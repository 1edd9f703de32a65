//! Built-in rules for the appraisal contact form.

use crate::builder::{FieldRuleBuilder, RuleTableBuilder};
use crate::core::FailureKind;
use crate::engine::RuleTable;

pub const FULL_NAME: &str = "fullName";
pub const PHONE: &str = "phone";
pub const EMAIL: &str = "email";
pub const PROPERTY_TYPE: &str = "propertyType";
pub const MESSAGE: &str = "message";

/// Contact form fields in document order.
pub const CONTACT_FIELDS: [&str; 5] = [FULL_NAME, PHONE, EMAIL, PROPERTY_TYPE, MESSAGE];

pub const FULL_NAME_PATTERN: &str = r"^[א-ת\s]+$";
pub const PHONE_PATTERN: &str = r"^(05|04|02|03|08|09)[0-9]{1,2}-?[0-9]{3}-?[0-9]{4}$";
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub const MESSAGE_MAX_LENGTH: usize = 1000;

pub(crate) fn contact_field_rules() -> Vec<(&'static str, FieldRuleBuilder)> {
    vec![
        (
            FULL_NAME,
            FieldRuleBuilder::new()
                .required()
                .min_length(2)
                .pattern(FULL_NAME_PATTERN)
                .message(FailureKind::Required, "שם מלא הוא שדה חובה")
                .message(FailureKind::MinLength, "השם חייב להיות לפחות 2 תווים")
                .message(FailureKind::Pattern, "השם יכול להכיל אותיות עבריות ורווחים בלבד"),
        ),
        (
            PHONE,
            FieldRuleBuilder::new()
                .required()
                .pattern(PHONE_PATTERN)
                .message(FailureKind::Required, "טלפון הוא שדה חובה")
                .message(
                    FailureKind::Pattern,
                    "אנא הכנסו מספר טלפון תקין (למשל: 05X-XXXXXXX)",
                ),
        ),
        (
            EMAIL,
            FieldRuleBuilder::new()
                .pattern(EMAIL_PATTERN)
                .message(FailureKind::Pattern, "אנא הכנסו כתובת דוא\"ל תקינה"),
        ),
        (
            PROPERTY_TYPE,
            FieldRuleBuilder::new()
                .required()
                .message(FailureKind::Required, "בחרו סוג נכס"),
        ),
        (
            MESSAGE,
            FieldRuleBuilder::new()
                .max_length(MESSAGE_MAX_LENGTH)
                .message(
                    FailureKind::MaxLength,
                    "ההודעה לא יכולה להיות יותר מ-1000 תווים",
                ),
        ),
    ]
}

impl RuleTable {
    /// The appraisal contact form's rule table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formguard::engine::RuleTable;
    ///
    /// let rules = RuleTable::contact_defaults();
    /// let names: Vec<&str> = rules.field_names().collect();
    ///
    /// assert_eq!(names, vec!["fullName", "phone", "email", "propertyType", "message"]);
    /// ```
    pub fn contact_defaults() -> Self {
        contact_field_rules()
            .into_iter()
            .try_fold(RuleTableBuilder::new(), |table, (name, rule)| {
                table.field(name, rule)
            })
            .map(RuleTableBuilder::build)
            .expect("Built-in contact rules should always build")
    }
}
