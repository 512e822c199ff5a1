// plancheck-core/src/domain/compliance/request.rs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::rule::ComplianceRule;
use crate::ports::cad::DimensionKind;

fn default_check_rule_sets() -> Vec<String> {
    vec!["ubbl-spatial".to_string(), "ubbl-fire".to_string()]
}

fn default_measurement_rule_sets() -> Vec<String> {
    vec!["ubbl-spatial".to_string()]
}

fn default_recursive() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceCheckRequest {
    #[serde(default = "default_check_rule_sets")]
    pub rule_sets: Vec<String>,
    #[serde(default)]
    pub building_type: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

impl Default for ComplianceCheckRequest {
    fn default() -> Self {
        Self {
            rule_sets: default_check_rule_sets(),
            building_type: None,
            categories: None,
        }
    }
}

impl ComplianceCheckRequest {
    pub fn filter(&self) -> RuleFilter<'_> {
        RuleFilter::new(self.building_type.as_deref(), self.categories.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceMeasurementRequest {
    pub folder: PathBuf,
    #[serde(default = "default_measurement_rule_sets")]
    pub rule_sets: Vec<String>,
    #[serde(default)]
    pub building_type: Option<String>,
    #[serde(default = "default_recursive")]
    pub recursive: bool,
}

impl ComplianceMeasurementRequest {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            rule_sets: default_measurement_rule_sets(),
            building_type: None,
            recursive: true,
        }
    }

    pub fn filter(&self) -> RuleFilter<'_> {
        RuleFilter::new(self.building_type.as_deref(), None)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionExtractionRequest {
    pub folder: PathBuf,
    #[serde(default)]
    pub layers: Option<Vec<String>>,
    #[serde(default)]
    pub dimension_types: Option<Vec<DimensionKind>>,
    #[serde(default = "default_recursive")]
    pub recursive: bool,
}

impl DimensionExtractionRequest {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            layers: None,
            dimension_types: None,
            recursive: true,
        }
    }
}

/// Building-type and category filter shared by both evaluator entry points.
///
/// Absent, empty-string and empty-list criteria do not filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleFilter<'a> {
    building_type: Option<&'a str>,
    categories: Option<&'a [String]>,
}

impl<'a> RuleFilter<'a> {
    pub fn new(building_type: Option<&'a str>, categories: Option<&'a [String]>) -> Self {
        Self {
            building_type: building_type.filter(|b| !b.is_empty()),
            categories: categories.filter(|c| !c.is_empty()),
        }
    }

    pub fn admits(&self, rule: &ComplianceRule) -> bool {
        let building_ok = self
            .building_type
            .is_none_or(|b| rule.applies_to_building(b));
        let category_ok = self.categories.is_none_or(|c| rule.in_categories(c));
        building_ok && category_ok
    }
}
