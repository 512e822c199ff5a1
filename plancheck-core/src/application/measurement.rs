// plancheck-core/src/application/measurement.rs

use std::collections::{HashMap, HashSet};
use tracing::{debug, error, info, instrument, warn};

use crate::domain::compliance::{
    ComplianceMeasurementRequest, ComplianceMeasurementResult, ComplianceRule, FileError,
    MeasurementFinding,
};
use crate::domain::ports::RuleSource;
use crate::error::PlancheckError;
use crate::infrastructure::fs::discover_drawings;
use crate::ports::cad::{CadAdapter, read_dimensions};

type RulesByParameter = HashMap<String, Vec<ComplianceRule>>;

/// Measures every drawing under `request.folder` against the requested rule sets.
///
/// Dimensions are routed to rules through the layer mapping table: the layer
/// name decides the parameter, the parameter selects the rules. Missing rule
/// sets are skipped (and listed in `skipped_rule_sets`). A drawing the adapter
/// cannot read is recorded in `errors` and the batch moves on.
#[instrument(skip(source, adapter, request), fields(folder = ?request.folder))]
pub fn measure_compliance(
    source: &dyn RuleSource,
    adapter: &mut dyn CadAdapter,
    request: &ComplianceMeasurementRequest,
) -> Result<ComplianceMeasurementResult, PlancheckError> {
    let matcher = source.load_dimension_mapping()?.compile()?;
    let mut result = ComplianceMeasurementResult::default();

    let rules_by_parameter = index_rules(source, request, &mut result.skipped_rule_sets)?;
    warn_unverifiable(&rules_by_parameter);

    let drawings = discover_drawings(&request.folder, request.recursive);
    info!(
        drawings = drawings.len(),
        parameters = rules_by_parameter.len(),
        "Starting measurement pass"
    );

    for drawing in &drawings {
        let file = drawing.display().to_string();

        let dimensions = match read_dimensions(adapter, drawing) {
            Ok(dims) => dims,
            Err(e) => {
                error!(file = %file, error = %e, "Error processing drawing");
                result.errors.push(FileError {
                    file,
                    error: e.to_string(),
                });
                continue;
            }
        };

        for dim in &dimensions {
            let Some(parameter) = matcher.match_layer(&dim.layer) else {
                continue;
            };
            let Some(rules) = rules_by_parameter.get(parameter) else {
                debug!(layer = %dim.layer, parameter, "No rule measures this parameter");
                continue;
            };
            for rule in rules {
                result.record(MeasurementFinding::new(&file, rule, dim.value));
            }
        }

        result.files_processed += 1;
    }

    info!(
        files = result.files_processed,
        checks = result.total_checks,
        failed = result.fail_count,
        errors = result.errors.len(),
        "Measurement pass complete"
    );
    Ok(result)
}

/// Groups the admitted rules of every requested set by parameter, keeping load order.
fn index_rules(
    source: &dyn RuleSource,
    request: &ComplianceMeasurementRequest,
    skipped: &mut Vec<String>,
) -> Result<RulesByParameter, PlancheckError> {
    let filter = request.filter();
    let mut by_parameter = RulesByParameter::new();

    for name in &request.rule_sets {
        let rule_set = match source.load_rule_set(name) {
            Ok(rs) => rs,
            Err(e) if e.is_missing_rule_set() => {
                warn!(rule_set = %name, "Rule set not found, skipping");
                skipped.push(name.clone());
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        for rule in rule_set.rules.into_iter().filter(|r| filter.admits(r)) {
            by_parameter.entry(rule.parameter.clone()).or_default().push(rule);
        }
    }

    Ok(by_parameter)
}

fn warn_unverifiable(rules_by_parameter: &RulesByParameter) {
    let mut seen = HashSet::new();
    for rule in rules_by_parameter.values().flatten() {
        if !rule.check_type.is_dimensional() && seen.insert(rule.id.as_str()) {
            warn!(
                rule = %rule.id,
                check_type = rule.check_type.as_str(),
                "Check type cannot be judged from a dimension; findings will pass unverified"
            );
        }
    }
}
