//! Builder for constructing rule tables.

use crate::builder::error::BuildError;
use crate::builder::rule::FieldRuleBuilder;
use crate::core::FieldRule;
use crate::engine::RuleTable;

/// Builder for rule tables with a fluent API.
///
/// Field order is the order rules are added.
#[derive(Clone, Debug, Default)]
pub struct RuleTableBuilder {
    rules: Vec<(String, FieldRule)>,
}

impl RuleTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pre-built rule.
    pub fn rule(mut self, name: impl Into<String>, rule: FieldRule) -> Result<Self, BuildError> {
        let name = name.into();
        if self.rules.iter().any(|(existing, _)| *existing == name) {
            return Err(BuildError::DuplicateField { name });
        }
        self.rules.push((name, rule));
        Ok(self)
    }

    /// Add a rule using a builder.
    /// Returns an error if the builder fails validation.
    pub fn field(
        self,
        name: impl Into<String>,
        builder: FieldRuleBuilder,
    ) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        self.rule(name, rule)
    }

    pub fn build(self) -> RuleTable {
        RuleTable::from_rules(self.rules)
    }
}
