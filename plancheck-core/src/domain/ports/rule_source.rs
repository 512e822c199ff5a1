use crate::domain::compliance::{ComplianceRuleSet, DimensionMapping};
use crate::domain::error::DomainError;

/// Where rule sets and the layer mapping table come from.
pub trait RuleSource: Send + Sync {
    /// Loads one rule set by name. Fails with `RuleSetNotFound` when it does not exist.
    fn load_rule_set(&self, name: &str) -> Result<ComplianceRuleSet, DomainError>;

    /// Sorted names of the available rule sets; empty when there is nowhere to look.
    fn list_rule_sets(&self) -> Vec<String>;

    fn load_dimension_mapping(&self) -> Result<DimensionMapping, DomainError>;
}
