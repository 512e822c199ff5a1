// plancheck-core/src/infrastructure/standards/schema.rs

// Strict parsing of the JSON documents under the standards directory.
// serde tells us *that* a document is wrong; this module works out *where*,
// as a path like `rules[3].threshold`, so a broken rule file can be fixed
// without bisecting it by hand.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::domain::compliance::{
    CheckType, ComplianceRuleSet, DimensionMapping, Severity,
};

/// Location and reason of the first schema problem found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub field: String,
    pub message: String,
}

impl SchemaViolation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

const DOCUMENT: &str = "<document>";

pub fn parse_rule_set(content: &str) -> Result<ComplianceRuleSet, SchemaViolation> {
    let doc = parse_document(content)?;
    let rule_set: ComplianceRuleSet = match serde_json::from_value(doc.clone()) {
        Ok(rs) => rs,
        Err(e) => {
            return Err(locate_in_rule_set(&doc).unwrap_or_else(|| {
                SchemaViolation::new(DOCUMENT, e.to_string())
            }));
        }
    };

    check_constraints(&rule_set)?;

    if let Some(i) = rule_set.first_duplicate_id() {
        return Err(SchemaViolation::new(
            format!("rules[{}].id", i),
            format!("duplicate rule id '{}'", rule_set.rules[i].id),
        ));
    }

    Ok(rule_set)
}

pub fn parse_dimension_mapping(content: &str) -> Result<DimensionMapping, SchemaViolation> {
    let doc = parse_document(content)?;
    let mapping: DimensionMapping = match serde_json::from_value(doc.clone()) {
        Ok(m) => m,
        Err(e) => {
            return Err(locate_in_mapping(&doc).unwrap_or_else(|| {
                SchemaViolation::new(DOCUMENT, e.to_string())
            }));
        }
    };

    check_constraints(&mapping)?;
    Ok(mapping)
}

fn parse_document(content: &str) -> Result<Value, SchemaViolation> {
    serde_json::from_str(content).map_err(|e| SchemaViolation::new(DOCUMENT, e.to_string()))
}

fn check_constraints<T: Validate>(value: &T) -> Result<(), SchemaViolation> {
    value.validate().map_err(|errors| {
        first_constraint_violation(&errors, "")
            .unwrap_or_else(|| SchemaViolation::new(DOCUMENT, errors.to_string()))
    })
}

/// Deterministic (sorted) first violation out of validator's nested error tree.
fn first_constraint_violation(errors: &ValidationErrors, prefix: &str) -> Option<SchemaViolation> {
    let mut keys: Vec<_> = errors.errors().keys().collect();
    keys.sort();

    for key in keys {
        let path = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        };

        let found = match errors.errors().get(key) {
            Some(ValidationErrorsKind::Field(errs)) => errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                SchemaViolation::new(path.clone(), message)
            }),
            Some(ValidationErrorsKind::Struct(inner)) => first_constraint_violation(inner, &path),
            Some(ValidationErrorsKind::List(items)) => items
                .iter()
                .find_map(|(i, inner)| first_constraint_violation(inner, &format!("{}[{}]", path, i))),
            None => None,
        };

        if found.is_some() {
            return found;
        }
    }

    None
}

/// `None` when the field is fine, otherwise the reason it is not.
fn probe<T: DeserializeOwned>(obj: &Map<String, Value>, key: &str, required: bool) -> Option<String> {
    match obj.get(key) {
        None if required => Some("missing required field".to_string()),
        None => None,
        Some(v) => serde_json::from_value::<T>(v.clone()).err().map(|e| e.to_string()),
    }
}

fn object_at<'a>(value: &'a Value, at: &str) -> Result<&'a Map<String, Value>, SchemaViolation> {
    value
        .as_object()
        .ok_or_else(|| SchemaViolation::new(at, "expected a JSON object"))
}

fn first_failing(checks: Vec<(&str, Option<String>)>, prefix: &str) -> Option<SchemaViolation> {
    checks.into_iter().find_map(|(key, failure)| {
        failure.map(|message| {
            let field = if prefix.is_empty() {
                key.to_string()
            } else {
                format!("{}.{}", prefix, key)
            };
            SchemaViolation::new(field, message)
        })
    })
}

fn locate_in_rule_set(doc: &Value) -> Option<SchemaViolation> {
    let obj = match object_at(doc, DOCUMENT) {
        Ok(o) => o,
        Err(v) => return Some(v),
    };

    let header = first_failing(
        vec![
            ("source_document", probe::<String>(obj, "source_document", true)),
            ("source_short", probe::<String>(obj, "source_short", true)),
            ("category", probe::<String>(obj, "category", true)),
            ("rules", probe::<Vec<Value>>(obj, "rules", true)),
        ],
        "",
    );
    if header.is_some() {
        return header;
    }

    let rules = obj.get("rules").and_then(Value::as_array)?;
    rules.iter().enumerate().find_map(|(i, rule)| {
        let at = format!("rules[{}]", i);
        match object_at(rule, &at) {
            Ok(r) => first_failing(
                vec![
                    ("id", probe::<String>(r, "id", true)),
                    ("description", probe::<String>(r, "description", true)),
                    ("by_law", probe::<String>(r, "by_law", true)),
                    ("category", probe::<String>(r, "category", true)),
                    ("building_type", probe::<Vec<String>>(r, "building_type", false)),
                    ("check_type", probe::<CheckType>(r, "check_type", true)),
                    ("parameter", probe::<String>(r, "parameter", true)),
                    ("threshold", probe::<f64>(r, "threshold", true)),
                    ("unit", probe::<String>(r, "unit", true)),
                    ("severity", probe::<Severity>(r, "severity", true)),
                    ("tags", probe::<Vec<String>>(r, "tags", false)),
                ],
                &at,
            ),
            Err(v) => Some(v),
        }
    })
}

fn locate_in_mapping(doc: &Value) -> Option<SchemaViolation> {
    let obj = match object_at(doc, DOCUMENT) {
        Ok(o) => o,
        Err(v) => return Some(v),
    };

    if let Some(message) = probe::<Vec<Value>>(obj, "mappings", true) {
        return Some(SchemaViolation::new("mappings", message));
    }

    let entries = obj.get("mappings").and_then(Value::as_array)?;
    entries.iter().enumerate().find_map(|(i, entry)| {
        let at = format!("mappings[{}]", i);
        match object_at(entry, &at) {
            Ok(m) => first_failing(
                vec![
                    ("layer_patterns", probe::<Vec<String>>(m, "layer_patterns", true)),
                    ("rule_parameter", probe::<String>(m, "rule_parameter", true)),
                ],
                &at,
            ),
            Err(v) => Some(v),
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "source_document": "Uniform Building By-Laws 1984",
        "source_short": "UBBL",
        "category": "spatial",
        "rules": [
            {
                "id": "UBBL-S-001", "description": "Corridor width", "by_law": "By-Law 34(1)",
                "category": "corridor", "building_type": ["residential"],
                "check_type": "min_dimension", "parameter": "corridor_width",
                "threshold": 1.2, "unit": "metres", "severity": "error", "tags": ["corridor"]
            },
            {
                "id": "UBBL-S-002", "description": "Riser height", "by_law": "By-Law 106(1)",
                "category": "staircase", "check_type": "max_dimension",
                "parameter": "stair_riser_height", "threshold": 180, "unit": "millimetres",
                "severity": "error"
            }
        ]
    }"#;

    fn with_second_rule(key: &str, value: Value) -> String {
        let mut doc: Value = serde_json::from_str(VALID).unwrap();
        doc["rules"][1][key] = value;
        doc.to_string()
    }

    fn without_second_rule_field(key: &str) -> String {
        let mut doc: Value = serde_json::from_str(VALID).unwrap();
        doc["rules"][1].as_object_mut().unwrap().remove(key);
        doc.to_string()
    }

    #[test]
    fn test_valid_rule_set_parses() {
        let rs = parse_rule_set(VALID).unwrap();
        assert_eq!(rs.rules.len(), 2);
        assert_eq!(rs.rules[1].threshold, 180.0);
    }

    #[test]
    fn test_missing_field_is_located() {
        let err = parse_rule_set(&without_second_rule_field("unit")).unwrap_err();
        assert_eq!(err.field, "rules[1].unit");
        assert_eq!(err.message, "missing required field");
    }

    #[test]
    fn test_wrong_type_is_located() {
        let err = parse_rule_set(&with_second_rule("threshold", Value::from("wide"))).unwrap_err();
        assert_eq!(err.field, "rules[1].threshold");
        assert!(err.message.contains("invalid type"));
    }

    #[test]
    fn test_unknown_check_type_is_located() {
        let err = parse_rule_set(&with_second_rule("check_type", Value::from("min_area"))).unwrap_err();
        assert_eq!(err.field, "rules[1].check_type");
        assert!(err.message.contains("min_area"));
    }

    #[test]
    fn test_constraint_violation_is_located() {
        let err = parse_rule_set(&with_second_rule("unit", Value::from(""))).unwrap_err();
        assert_eq!(err.field, "rules[1].unit");
        assert_eq!(err.message, "a threshold needs a unit");
    }

    #[test]
    fn test_duplicate_rule_id_is_rejected() {
        let err = parse_rule_set(&with_second_rule("id", Value::from("UBBL-S-001"))).unwrap_err();
        assert_eq!(err.field, "rules[1].id");
        assert!(err.message.contains("duplicate"));
    }

    #[test]
    fn test_missing_header_field() {
        let mut doc: Value = serde_json::from_str(VALID).unwrap();
        doc.as_object_mut().unwrap().remove("source_short");
        let err = parse_rule_set(&doc.to_string()).unwrap_err();
        assert_eq!(err.field, "source_short");
    }

    #[test]
    fn test_syntax_error_points_at_document() {
        let err = parse_rule_set("{ \"rules\": [").unwrap_err();
        assert_eq!(err.field, "<document>");
    }

    #[test]
    fn test_mapping_wrong_type_is_located() {
        let json = r#"{"mappings": [
            {"layer_patterns": ["CORRIDOR"], "rule_parameter": "corridor_width"},
            {"layer_patterns": "STAIR", "rule_parameter": "staircase_width"}
        ]}"#;
        let err = parse_dimension_mapping(json).unwrap_err();
        assert_eq!(err.field, "mappings[1].layer_patterns");
    }

    #[test]
    fn test_mapping_constraint_is_located() {
        let json = r#"{"mappings": [{"layer_patterns": [], "rule_parameter": "room_height"}]}"#;
        let err = parse_dimension_mapping(json).unwrap_err();
        assert_eq!(err.field, "mappings[0].layer_patterns");
    }
}
