// plancheck-core/src/domain/compliance/rule.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// How a measured value is compared against a rule threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckType {
    MinDimension,
    MaxDimension,
    MinPercentage,
    MinDuration,
}

impl CheckType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MinDimension => "min_dimension",
            Self::MaxDimension => "max_dimension",
            Self::MinPercentage => "min_percentage",
            Self::MinDuration => "min_duration",
        }
    }

    /// Compares a raw linear measurement against `threshold`. Both bounds are inclusive.
    ///
    /// Returns `None` for check types that a single linear dimension cannot verify
    /// (percentages, fire-resistance durations).
    pub fn compare(&self, measured: f64, threshold: f64) -> Option<bool> {
        match self {
            Self::MinDimension => Some(measured >= threshold),
            Self::MaxDimension => Some(measured <= threshold),
            Self::MinPercentage | Self::MinDuration => None,
        }
    }

    pub fn is_dimensional(&self) -> bool {
        matches!(self, Self::MinDimension | Self::MaxDimension)
    }
}

impl fmt::Display for CheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One regulatory threshold, e.g. "corridors in residential buildings are at least 1.2 m wide".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ComplianceRule {
    #[validate(length(min = 1, message = "rule id cannot be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "description cannot be empty"))]
    pub description: String,

    #[validate(length(min = 1, message = "by-law citation cannot be empty"))]
    pub by_law: String,

    #[validate(length(min = 1, message = "category cannot be empty"))]
    pub category: String,

    /// Empty means the rule applies to every building type.
    #[serde(default)]
    pub building_type: Vec<String>,

    pub check_type: CheckType,

    #[validate(length(min = 1, message = "parameter cannot be empty"))]
    pub parameter: String,

    #[validate(range(min = 0.0, message = "threshold cannot be negative"))]
    pub threshold: f64,

    #[validate(length(min = 1, message = "a threshold needs a unit"))]
    pub unit: String,

    pub severity: Severity,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl ComplianceRule {
    pub fn applies_to_building(&self, building_type: &str) -> bool {
        self.building_type.is_empty() || self.building_type.iter().any(|b| b == building_type)
    }

    pub fn in_categories(&self, categories: &[String]) -> bool {
        categories.iter().any(|c| *c == self.category)
    }
}

/// Rules sourced from one regulatory document (one JSON file on disk).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ComplianceRuleSet {
    pub source_document: String,
    pub source_short: String,
    pub category: String,

    #[validate(nested)]
    pub rules: Vec<ComplianceRule>,
}

impl ComplianceRuleSet {
    /// Index of the first rule whose id repeats an earlier one.
    pub fn first_duplicate_id(&self) -> Option<usize> {
        let mut seen = std::collections::HashSet::new();
        self.rules.iter().position(|r| !seen.insert(r.id.as_str()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;
    use anyhow::Result;

    pub(crate) fn rule(id: &str, parameter: &str, check_type: CheckType, threshold: f64) -> ComplianceRule {
        ComplianceRule {
            id: id.to_string(),
            description: format!("{} rule", parameter),
            by_law: "By-Law 1".to_string(),
            category: "spatial".to_string(),
            building_type: vec![],
            check_type,
            parameter: parameter.to_string(),
            threshold,
            unit: "mm".to_string(),
            severity: Severity::Error,
            tags: vec![],
        }
    }

    #[test]
    fn test_min_dimension_boundary_is_inclusive() {
        assert_eq!(CheckType::MinDimension.compare(1200.0, 1200.0), Some(true));
        assert_eq!(CheckType::MinDimension.compare(1199.0, 1200.0), Some(false));
    }

    #[test]
    fn test_max_dimension_boundary_is_inclusive() {
        assert_eq!(CheckType::MaxDimension.compare(180.0, 180.0), Some(true));
        assert_eq!(CheckType::MaxDimension.compare(181.0, 180.0), Some(false));
    }

    #[test]
    fn test_non_linear_checks_are_not_comparable() {
        assert_eq!(CheckType::MinPercentage.compare(5.0, 10.0), None);
        assert_eq!(CheckType::MinDuration.compare(0.0, 60.0), None);
    }

    #[test]
    fn test_unknown_check_type_is_rejected() {
        let res: Result<CheckType, _> = serde_json::from_str("\"min_area\"");
        let err = res.unwrap_err().to_string();
        assert!(err.contains("min_area"));
        assert!(err.contains("min_dimension"));
    }

    #[test]
    fn test_building_type_semantics() {
        let mut r = rule("R1", "corridor_width", CheckType::MinDimension, 1.2);
        assert!(r.applies_to_building("industrial"));

        r.building_type = vec!["residential".into()];
        assert!(r.applies_to_building("residential"));
        assert!(!r.applies_to_building("commercial"));
    }

    #[test]
    fn test_optional_lists_default_to_empty() -> Result<()> {
        let json = r#"{
            "id": "X-1", "description": "d", "by_law": "By-Law 1", "category": "room_size",
            "check_type": "max_dimension", "parameter": "p", "threshold": 3.0,
            "unit": "metres", "severity": "warning"
        }"#;
        let r: ComplianceRule = serde_json::from_str(json)?;
        assert!(r.building_type.is_empty());
        assert!(r.tags.is_empty());
        assert_eq!(r.severity, Severity::Warning);
        Ok(())
    }

    #[test]
    fn test_validation_rejects_empty_unit_and_negative_threshold() {
        let mut r = rule("R1", "corridor_width", CheckType::MinDimension, -1.0);
        r.unit = String::new();
        let errors = r.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("unit"));
        assert!(fields.contains_key("threshold"));
    }

    #[test]
    fn test_first_duplicate_id() {
        let set = ComplianceRuleSet {
            source_document: "doc".into(),
            source_short: "DOC".into(),
            category: "spatial".into(),
            rules: vec![
                rule("A", "p", CheckType::MinDimension, 1.0),
                rule("B", "p", CheckType::MinDimension, 1.0),
                rule("A", "q", CheckType::MaxDimension, 2.0),
            ],
        };
        assert_eq!(set.first_duplicate_id(), Some(2));
    }
}
