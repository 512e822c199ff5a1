// plancheck-core/src/application/testing.rs

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::compliance::{
    ComplianceRule, ComplianceRuleSet, DimensionMapping, LayerParameterMapping,
};
use crate::domain::error::DomainError;
use crate::domain::ports::RuleSource;

/// Rule source held in memory, for use-case tests that do not need files.
#[derive(Debug, Default)]
pub(crate) struct StaticRuleSource {
    sets: HashMap<String, ComplianceRuleSet>,
    broken: HashMap<String, String>,
    mapping: DimensionMapping,
}

impl StaticRuleSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_rule_set(mut self, name: &str, rules: Vec<ComplianceRule>) -> Self {
        self.sets.insert(
            name.to_string(),
            ComplianceRuleSet {
                source_document: format!("{} document", name),
                source_short: name.to_uppercase(),
                category: name.to_string(),
                rules,
            },
        );
        self
    }

    /// `name` fails to load with an invalid-rule-set error carrying `error`'s text.
    pub(crate) fn with_error(mut self, name: &str, error: DomainError) -> Self {
        self.broken.insert(name.to_string(), error.to_string());
        self
    }

    pub(crate) fn with_mapping(mut self, entries: Vec<(Vec<&str>, &str)>) -> Self {
        self.mapping = DimensionMapping {
            mappings: entries
                .into_iter()
                .map(|(patterns, parameter)| LayerParameterMapping {
                    layer_patterns: patterns.into_iter().map(String::from).collect(),
                    rule_parameter: parameter.to_string(),
                })
                .collect(),
        };
        self
    }
}

impl RuleSource for StaticRuleSource {
    fn load_rule_set(&self, name: &str) -> Result<ComplianceRuleSet, DomainError> {
        if let Some(message) = self.broken.get(name) {
            return Err(DomainError::InvalidRuleSet {
                name: name.to_string(),
                field: "<document>".to_string(),
                message: message.clone(),
            });
        }
        self.sets
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::RuleSetNotFound {
                name: name.to_string(),
                path: PathBuf::from(format!("{}.json", name)),
            })
    }

    fn list_rule_sets(&self) -> Vec<String> {
        let mut names: Vec<String> = self.sets.keys().cloned().collect();
        names.sort();
        names
    }

    fn load_dimension_mapping(&self) -> Result<DimensionMapping, DomainError> {
        Ok(self.mapping.clone())
    }
}
