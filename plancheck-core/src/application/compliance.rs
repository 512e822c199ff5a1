// plancheck-core/src/application/compliance.rs

use tracing::{info, instrument, warn};

use crate::domain::compliance::{ComplianceCheckRequest, ComplianceCheckResult, ComplianceFinding};
use crate::domain::ports::RuleSource;
use crate::error::PlancheckError;

/// Lists the rules that apply to a building, without measuring anything.
///
/// A requested rule set that does not exist, or whose name can never resolve to
/// a rule file, becomes a single `SYSTEM` finding and the remaining sets are
/// still evaluated. Any other load failure (a broken rule file) aborts the call.
#[instrument(skip(source, request), fields(rule_sets = ?request.rule_sets))]
pub fn check_compliance(
    source: &dyn RuleSource,
    request: &ComplianceCheckRequest,
) -> Result<ComplianceCheckResult, PlancheckError> {
    let filter = request.filter();
    let mut findings = Vec::new();

    for name in &request.rule_sets {
        let rule_set = match source.load_rule_set(name) {
            Ok(rs) => rs,
            Err(e) if e.is_missing_rule_set() => {
                warn!(rule_set = %name, "Rule set not found, reporting it as a finding");
                findings.push(ComplianceFinding::missing_rule_set(name));
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        findings.extend(
            rule_set
                .rules
                .iter()
                .filter(|rule| filter.admits(rule))
                .map(ComplianceFinding::applicable),
        );
    }

    let total_rules = findings.iter().filter(|f| !f.is_sentinel()).count();
    info!(total_rules, "Compliance check complete");

    Ok(ComplianceCheckResult {
        rule_sets_loaded: request.rule_sets.len(),
        total_rules,
        findings,
    })
}
