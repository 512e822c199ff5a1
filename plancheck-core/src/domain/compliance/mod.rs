// plancheck-core/src/domain/compliance/mod.rs

pub mod finding;
pub mod mapping;
pub mod request;
pub mod rule;

// Re-exports
pub use finding::{
    ComplianceCheckResult, ComplianceFinding, ComplianceMeasurementResult,
    DimensionExtractionResult, FileDimensions, FileError, FindingStatus, MeasurementFinding,
    MeasurementStatus, SYSTEM_RULE_ID,
};
pub use mapping::{DimensionMapping, LayerMatcher, LayerParameterMapping};
pub use request::{
    ComplianceCheckRequest, ComplianceMeasurementRequest, DimensionExtractionRequest, RuleFilter,
};
pub use rule::{CheckType, ComplianceRule, ComplianceRuleSet, Severity};
