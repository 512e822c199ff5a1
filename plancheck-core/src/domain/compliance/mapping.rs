// plancheck-core/src/domain/compliance/mapping.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::DomainError;

/// Content of `dimension_mapping.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct DimensionMapping {
    #[validate(nested)]
    pub mappings: Vec<LayerParameterMapping>,
}

/// Layers whose name contains any of `layer_patterns` carry a measurement of `rule_parameter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LayerParameterMapping {
    #[validate(length(min = 1, message = "at least one layer pattern is required"))]
    pub layer_patterns: Vec<String>,

    #[validate(length(min = 1, message = "rule parameter cannot be empty"))]
    pub rule_parameter: String,
}

impl DimensionMapping {
    pub fn compile(&self) -> Result<LayerMatcher, DomainError> {
        let mut entries = Vec::with_capacity(self.mappings.len());

        for (i, m) in self.mappings.iter().enumerate() {
            let mut patterns = Vec::with_capacity(m.layer_patterns.len());
            for (j, p) in m.layer_patterns.iter().enumerate() {
                // An empty pattern would claim every layer.
                if p.is_empty() {
                    return Err(DomainError::InvalidMapping {
                        field: format!("mappings[{}].layer_patterns[{}]", i, j),
                        message: "layer pattern cannot be empty".to_string(),
                    });
                }
                patterns.push(p.to_uppercase());
            }
            entries.push(CompiledMapping {
                patterns,
                parameter: m.rule_parameter.clone(),
            });
        }

        Ok(LayerMatcher { entries })
    }
}

struct CompiledMapping {
    patterns: Vec<String>,
    parameter: String,
}

/// Case-insensitive, first-match-wins lookup from CAD layer name to rule parameter.
///
/// Entries are scanned in file order and the first entry with a pattern contained in
/// the layer name wins, so more specific patterns (`DEAD-END`) must come before the
/// generic ones they contain (`CORRIDOR`).
pub struct LayerMatcher {
    entries: Vec<CompiledMapping>,
}

impl LayerMatcher {
    pub fn match_layer(&self, layer_name: &str) -> Option<&str> {
        let upper = layer_name.to_uppercase();
        self.entries
            .iter()
            .find(|e| e.patterns.iter().any(|p| upper.contains(p.as_str())))
            .map(|e| e.parameter.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn mapping(entries: Vec<(Vec<&str>, &str)>) -> DimensionMapping {
        DimensionMapping {
            mappings: entries
                .into_iter()
                .map(|(patterns, param)| LayerParameterMapping {
                    layer_patterns: patterns.iter().map(|s| s.to_string()).collect(),
                    rule_parameter: param.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_match_is_case_insensitive_substring() -> Result<()> {
        let matcher = mapping(vec![(vec!["corridor"], "corridor_width")]).compile()?;
        assert_eq!(matcher.match_layer("A-CORRIDOR-DIMS"), Some("corridor_width"));
        assert_eq!(matcher.match_layer("a-Corridor"), Some("corridor_width"));
        Ok(())
    }

    #[test]
    fn test_first_entry_wins() -> Result<()> {
        let matcher = mapping(vec![
            (vec!["DEAD-END"], "dead_end_corridor_length"),
            (vec!["CORRIDOR"], "corridor_width"),
        ])
        .compile()?;
        assert_eq!(
            matcher.match_layer("DEAD-END-CORRIDOR"),
            Some("dead_end_corridor_length")
        );

        let reversed = mapping(vec![
            (vec!["CORRIDOR"], "corridor_width"),
            (vec!["DEAD-END"], "dead_end_corridor_length"),
        ])
        .compile()?;
        assert_eq!(reversed.match_layer("DEAD-END-CORRIDOR"), Some("corridor_width"));
        Ok(())
    }

    #[test]
    fn test_pattern_whitespace_is_significant() -> Result<()> {
        let matcher = mapping(vec![(vec![" DOOR"], "door_width")]).compile()?;
        assert_eq!(matcher.match_layer("A DOOR"), Some("door_width"));
        assert_eq!(matcher.match_layer("A-DOOR"), None);
        Ok(())
    }

    #[test]
    fn test_unmatched_layer() -> Result<()> {
        let matcher = mapping(vec![(vec!["STAIR"], "staircase_width")]).compile()?;
        assert_eq!(matcher.match_layer("FURNITURE"), None);
        Ok(())
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        let res = mapping(vec![(vec!["STAIR", ""], "staircase_width")]).compile();
        match res {
            Err(DomainError::InvalidMapping { field, .. }) => {
                assert_eq!(field, "mappings[0].layer_patterns[1]");
            }
            _ => panic!("expected InvalidMapping"),
        }
    }

    #[test]
    fn test_mapping_without_patterns_fails_validation() {
        let m = mapping(vec![(vec![], "room_height")]);
        assert!(m.validate().is_err());
    }
}
