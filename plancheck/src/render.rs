// plancheck/src/render.rs
//
// Terminal tables for the command outputs.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use plancheck_core::domain::compliance::{
    ComplianceCheckResult, ComplianceMeasurementResult, ComplianceRuleSet,
    DimensionExtractionResult, FileError, FindingStatus, MeasurementStatus,
};

fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn number(value: f64) -> String {
    format!("{}", value)
}

pub fn rule_set(rs: &ComplianceRuleSet) -> Table {
    let mut t = table(vec![
        "ID", "Category", "Check", "Parameter", "Threshold", "Unit", "By-law", "Buildings",
    ]);
    for r in &rs.rules {
        let buildings = if r.building_type.is_empty() {
            "all".to_string()
        } else {
            r.building_type.join(", ")
        };
        t.add_row(vec![
            Cell::new(&r.id),
            Cell::new(&r.category),
            Cell::new(r.check_type.as_str()),
            Cell::new(&r.parameter),
            Cell::new(number(r.threshold)),
            Cell::new(&r.unit),
            Cell::new(&r.by_law),
            Cell::new(buildings),
        ]);
    }
    t
}

pub fn check(result: &ComplianceCheckResult) -> Table {
    let mut t = table(vec!["Rule", "Description", "By-law", "Threshold", "Severity", "Status"]);
    for f in &result.findings {
        let threshold = match (f.threshold, f.unit.as_deref()) {
            (Some(v), Some(unit)) => format!("{} {}", number(v), unit),
            _ => "-".to_string(),
        };
        let status = match f.status {
            FindingStatus::Error | FindingStatus::Fail => Cell::new(f.status.as_str()).fg(Color::Red),
            FindingStatus::Pass => Cell::new(f.status.as_str()).fg(Color::Green),
            FindingStatus::ToVerify => Cell::new(f.status.as_str()).fg(Color::Yellow),
        };
        t.add_row(vec![
            Cell::new(&f.rule_id),
            Cell::new(&f.description),
            Cell::new(&f.by_law),
            Cell::new(threshold),
            Cell::new(f.severity.as_str()),
            status,
        ]);
    }
    t
}

pub fn measurement(result: &ComplianceMeasurementResult) -> Table {
    let mut t = table(vec!["File", "Rule", "Parameter", "Measured", "Threshold", "Status"]);
    for f in &result.findings {
        let status = match f.status {
            MeasurementStatus::Fail => Cell::new("fail").fg(Color::Red),
            MeasurementStatus::Pass if !f.verified => Cell::new("pass (unverified)").fg(Color::Yellow),
            MeasurementStatus::Pass => Cell::new("pass").fg(Color::Green),
        };
        t.add_row(vec![
            Cell::new(&f.file),
            Cell::new(&f.rule_id),
            Cell::new(&f.parameter),
            Cell::new(number(f.measured_value)),
            Cell::new(format!("{} {}", number(f.threshold), f.unit)),
            status,
        ]);
    }
    t
}

pub fn extraction(result: &DimensionExtractionResult) -> Table {
    let mut t = table(vec!["File", "Handle", "Type", "Layer", "Value"]);
    for detail in &result.details {
        for d in &detail.dimensions {
            t.add_row(vec![
                Cell::new(&detail.file),
                Cell::new(&d.handle),
                Cell::new(d.dimension_type.as_str()),
                Cell::new(&d.layer),
                Cell::new(number(d.value)),
            ]);
        }
    }
    t
}

pub fn file_errors(errors: &[FileError]) {
    if errors.is_empty() {
        return;
    }
    eprintln!("\n⚠️  {} file(s) could not be processed:", errors.len());
    for e in errors {
        eprintln!("   ❌ {}: {}", e.file, e.error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plancheck_core::domain::compliance::ComplianceFinding;

    #[test]
    fn test_number_formatting() {
        assert_eq!(number(1.2), "1.2");
        assert_eq!(number(1200.0), "1200");
    }

    #[test]
    fn test_check_table_shows_sentinel() {
        let result = ComplianceCheckResult {
            rule_sets_loaded: 1,
            total_rules: 0,
            findings: vec![ComplianceFinding::missing_rule_set("nonexistent")],
        };
        let rendered = check(&result).to_string();
        assert!(rendered.contains("SYSTEM"));
        assert!(rendered.contains("Rule set 'nonexistent' not found"));
    }
}
