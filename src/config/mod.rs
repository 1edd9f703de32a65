//! Declarative form configuration.
//!
//! A [`FormConfig`] is plain serde data: field rule records with pattern
//! sources, the confirmation delay and the WhatsApp link settings. It is
//! loaded once at startup and compiled into an immutable [`RuleTable`].

use crate::builder::{BuildError, FieldRuleBuilder, RuleTableBuilder};
use crate::core::{FailureKind, FieldRule};
use crate::engine::RuleTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

pub mod error;

pub use error::ConfigError;

/// Version identifier for configuration format
pub const CONFIG_VERSION: u32 = 1;

/// How long the submission confirmation stays visible.
pub const DEFAULT_CONFIRMATION_DELAY_MS: u64 = 6000;

pub const DEFAULT_WHATSAPP_NUMBER: &str = "972501234567";
pub const DEFAULT_WHATSAPP_GREETING: &str = "שלום, הייתי רוצה לברר באודות השמאות שלכם";

fn default_confirmation_delay_ms() -> u64 {
    DEFAULT_CONFIRMATION_DELAY_MS
}

/// Recipient and pre-filled text of the WhatsApp deep link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppConfig {
    /// International number, digits only (country code first)
    pub phone_number: String,
    pub greeting: String,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            phone_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            greeting: DEFAULT_WHATSAPP_GREETING.to_string(),
        }
    }
}

/// Serializable record of one field rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    pub name: String,

    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default)]
    pub messages: BTreeMap<FailureKind, String>,
}

impl FieldConfig {
    /// Describe a built rule as configuration data.
    pub fn from_rule(name: impl Into<String>, rule: &FieldRule) -> Self {
        Self {
            name: name.into(),
            required: rule.is_required(),
            min_length: rule.min_length(),
            max_length: rule.max_length(),
            pattern: rule.pattern().map(|p| p.source().to_string()),
            messages: rule
                .messages()
                .iter()
                .map(|(kind, text)| (kind, text.to_string()))
                .collect(),
        }
    }

    pub fn to_builder(&self) -> FieldRuleBuilder {
        let mut builder = FieldRuleBuilder::new().set_required(self.required);
        if let Some(min) = self.min_length {
            builder = builder.min_length(min);
        }
        if let Some(max) = self.max_length {
            builder = builder.max_length(max);
        }
        if let Some(pattern) = &self.pattern {
            builder = builder.pattern(pattern.clone());
        }
        for (kind, text) in &self.messages {
            builder = builder.message(*kind, text.clone());
        }
        builder
    }
}

/// Complete configuration of the contact form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    /// Configuration format version
    pub version: u32,

    /// Delay before the confirmation message hides itself
    #[serde(default = "default_confirmation_delay_ms")]
    pub confirmation_delay_ms: u64,

    #[serde(default)]
    pub whatsapp: WhatsAppConfig,

    /// Field rules in document order
    pub fields: Vec<FieldConfig>,
}

impl FormConfig {
    /// The built-in appraisal contact form configuration.
    pub fn contact_defaults() -> Self {
        let table = RuleTable::contact_defaults();
        Self {
            version: CONFIG_VERSION,
            confirmation_delay_ms: DEFAULT_CONFIRMATION_DELAY_MS,
            whatsapp: WhatsAppConfig::default(),
            fields: table
                .field_names()
                .filter_map(|name| table.get(name).map(|rule| FieldConfig::from_rule(name, rule)))
                .collect(),
        }
    }

    /// Parse a configuration from JSON.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formguard::config::FormConfig;
    ///
    /// let config = FormConfig::from_json(r#"{
    ///     "version": 1,
    ///     "fields": [
    ///         { "name": "phone", "required": true, "messages": { "required": "needed" } }
    ///     ]
    /// }"#).unwrap();
    ///
    /// assert_eq!(config.confirmation_delay_ms, 6000);
    /// let rules = config.rule_table().unwrap();
    /// assert_eq!(rules.evaluate_field("phone", "").error(), Some("needed"));
    /// ```
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: FormConfig =
            serde_json::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;

        if config.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: config.version,
                supported: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_millis(self.confirmation_delay_ms)
    }

    /// Compile the field records into a rule table.
    pub fn rule_table(&self) -> Result<RuleTable, ConfigError> {
        let mut table = RuleTableBuilder::new();
        for field in &self.fields {
            table = table
                .field(field.name.clone(), field.to_builder())
                .map_err(|source| match source {
                    BuildError::DuplicateField { name } => ConfigError::DuplicateField(name),
                    source => ConfigError::InvalidRule {
                        field: field.name.clone(),
                        source,
                    },
                })?;
        }
        Ok(table.build())
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::contact_defaults()
    }
}
