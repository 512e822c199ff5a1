// plancheck-core/src/domain/compliance/finding.rs

// Result DTOs handed back to the CLI (tables) or serialized as JSON reports.

use serde::{Deserialize, Serialize};

use super::rule::{CheckType, ComplianceRule, Severity};
use crate::ports::cad::DimensionEntity;

/// Rule id of the synthetic finding that reports an out-of-band condition.
pub const SYSTEM_RULE_ID: &str = "SYSTEM";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingStatus {
    ToVerify,
    Pass,
    Fail,
    Error,
}

impl FindingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToVerify => "to_verify",
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceFinding {
    pub rule_id: String,
    pub description: String,
    pub by_law: String,
    pub severity: Severity,
    pub status: FindingStatus,
    pub check_type: Option<CheckType>,
    pub parameter: Option<String>,
    pub threshold: Option<f64>,
    pub unit: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ComplianceFinding {
    /// A rule that applies to the request and still has to be verified on the drawings.
    pub fn applicable(rule: &ComplianceRule) -> Self {
        Self {
            rule_id: rule.id.clone(),
            description: rule.description.clone(),
            by_law: rule.by_law.clone(),
            severity: rule.severity,
            status: FindingStatus::ToVerify,
            check_type: Some(rule.check_type),
            parameter: Some(rule.parameter.clone()),
            threshold: Some(rule.threshold),
            unit: Some(rule.unit.clone()),
            tags: rule.tags.clone(),
        }
    }

    /// Sentinel reporting a requested rule set that does not exist.
    pub fn missing_rule_set(name: &str) -> Self {
        Self {
            rule_id: SYSTEM_RULE_ID.to_string(),
            description: format!("Rule set '{}' not found", name),
            by_law: "N/A".to_string(),
            severity: Severity::Error,
            status: FindingStatus::Error,
            check_type: None,
            parameter: None,
            threshold: None,
            unit: None,
            tags: vec![],
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.rule_id == SYSTEM_RULE_ID
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceCheckResult {
    /// Number of rule sets requested, found or not.
    pub rule_sets_loaded: usize,
    /// Number of rules that survived filtering.
    pub total_rules: usize,
    pub findings: Vec<ComplianceFinding>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementStatus {
    Pass,
    Fail,
}

impl MeasurementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementFinding {
    pub file: String,
    pub rule_id: String,
    pub description: String,
    pub by_law: String,
    pub parameter: String,
    pub threshold: f64,
    pub measured_value: f64,
    pub unit: String,
    pub status: MeasurementStatus,
    pub severity: Severity,
    /// False when the rule's check type cannot be judged from a linear dimension
    /// and the `pass` status carries no real verification.
    pub verified: bool,
}

impl MeasurementFinding {
    pub fn new(file: &str, rule: &ComplianceRule, measured_value: f64) -> Self {
        let outcome = rule.check_type.compare(measured_value, rule.threshold);
        let status = match outcome {
            Some(false) => MeasurementStatus::Fail,
            Some(true) | None => MeasurementStatus::Pass,
        };

        Self {
            file: file.to_string(),
            rule_id: rule.id.clone(),
            description: rule.description.clone(),
            by_law: rule.by_law.clone(),
            parameter: rule.parameter.clone(),
            threshold: rule.threshold,
            measured_value,
            unit: rule.unit.clone(),
            status,
            severity: rule.severity,
            verified: outcome.is_some(),
        }
    }
}

/// A drawing that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileError {
    pub file: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceMeasurementResult {
    pub files_processed: usize,
    pub total_checks: usize,
    pub pass_count: usize,
    pub fail_count: usize,
    pub findings: Vec<MeasurementFinding>,
    pub errors: Vec<FileError>,
    /// Requested rule sets that were missing and therefore not compared.
    #[serde(default)]
    pub skipped_rule_sets: Vec<String>,
}

impl ComplianceMeasurementResult {
    pub fn record(&mut self, finding: MeasurementFinding) {
        self.total_checks += 1;
        match finding.status {
            MeasurementStatus::Pass => self.pass_count += 1,
            MeasurementStatus::Fail => self.fail_count += 1,
        }
        self.findings.push(finding);
    }

    pub fn has_failures(&self) -> bool {
        self.fail_count > 0 || !self.errors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDimensions {
    pub file: String,
    pub dimensions: Vec<DimensionEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionExtractionResult {
    pub files_processed: usize,
    pub total_dimensions: usize,
    pub details: Vec<FileDimensions>,
    pub errors: Vec<FileError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compliance::rule::tests::rule;

    #[test]
    fn test_sentinel_finding_shape() {
        let f = ComplianceFinding::missing_rule_set("nonexistent");
        assert!(f.is_sentinel());
        assert_eq!(f.status, FindingStatus::Error);
        assert_eq!(f.by_law, "N/A");
        assert!(f.description.contains("nonexistent"));
        assert_eq!(f.threshold, None);
    }

    #[test]
    fn test_unverifiable_rule_passes_unverified() {
        let r = rule("F-1", "fire_resistance", CheckType::MinDuration, 60.0);
        let f = MeasurementFinding::new("plan.dwg", &r, 0.0);
        assert_eq!(f.status, MeasurementStatus::Pass);
        assert!(!f.verified);
    }

    #[test]
    fn test_record_updates_counters() {
        let r = rule("S-1", "corridor_width", CheckType::MinDimension, 1200.0);
        let mut result = ComplianceMeasurementResult::default();
        result.record(MeasurementFinding::new("a.dwg", &r, 1200.0));
        result.record(MeasurementFinding::new("a.dwg", &r, 1199.0));

        assert_eq!(result.total_checks, 2);
        assert_eq!(result.pass_count, 1);
        assert_eq!(result.fail_count, 1);
        assert!(result.has_failures());
    }

    #[test]
    fn test_status_serializes_snake_case() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_string(&FindingStatus::ToVerify)?, "\"to_verify\"");
        assert_eq!(serde_json::to_string(&MeasurementStatus::Fail)?, "\"fail\"");
        Ok(())
    }
}
