// plancheck-core/src/domain/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Rule set '{name}' not found at {}", path.display())]
    #[diagnostic(
        code(plancheck::domain::rule_set_not_found),
        help("Run `plancheck list-rules` to see the available rule sets.")
    )]
    RuleSetNotFound { name: String, path: PathBuf },

    #[error("Rule set '{name}' is invalid at `{field}`: {message}")]
    #[diagnostic(
        code(plancheck::domain::invalid_rule_set),
        help("Fix the rule-set JSON document; no partial load is attempted.")
    )]
    InvalidRuleSet {
        name: String,
        field: String,
        message: String,
    },

    #[error("Dimension mapping is invalid at `{field}`: {message}")]
    #[diagnostic(code(plancheck::domain::invalid_mapping))]
    InvalidMapping { field: String, message: String },

    #[error("Rule set name '{0}' is not a plain file stem")]
    #[diagnostic(
        code(plancheck::domain::unsafe_name),
        help("Use letters, digits, '-', '_' or '.' only (e.g. 'ubbl-spatial').")
    )]
    UnsafeRuleSetName(String),

    #[error("Cannot read {}: {reason}", path.display())]
    #[diagnostic(code(plancheck::domain::unreadable))]
    Unreadable { path: PathBuf, reason: String },
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RuleSetNotFound { .. })
    }

    /// True when the named rule set cannot exist in the store, either because
    /// no file backs it or because the name could never resolve to a file.
    pub fn is_missing_rule_set(&self) -> bool {
        matches!(
            self,
            Self::RuleSetNotFound { .. } | Self::UnsafeRuleSetName(_)
        )
    }
}
