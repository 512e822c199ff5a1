// plancheck/src/commands/measure.rs
//
// USE CASE: measure drawings against rule thresholds.

use std::path::PathBuf;

use plancheck_core::application::{measure_compliance, write_report};
use plancheck_core::domain::compliance::ComplianceMeasurementRequest;
use plancheck_core::infrastructure::adapters::DimensionExportAdapter;

use super::context::Context;
use crate::cli::OutputFormat;
use crate::render;

pub struct MeasureArgs {
    pub folder: PathBuf,
    pub rule_sets: Vec<String>,
    pub building_type: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub strict: bool,
}

/// Returns `false` when `--strict` is set and the pass found a failure or an unreadable drawing.
pub fn execute(ctx: &Context, args: MeasureArgs) -> anyhow::Result<bool> {
    let mut request = ComplianceMeasurementRequest::new(&args.folder);
    request.recursive = ctx.settings.recursive;
    request.building_type = args.building_type.clone();
    if !args.rule_sets.is_empty() {
        request.rule_sets = args.rule_sets.clone();
    }

    let store = ctx.store();
    let mut adapter = DimensionExportAdapter::new();
    let result = measure_compliance(&store, &mut adapter, &request)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Table => {
            println!("{}", render::measurement(&result));
            println!("📊 Summary:");
            println!("   Files Processed:  {}", result.files_processed);
            println!("   Checks:           {}", result.total_checks);
            println!("   Passed:           {}", result.pass_count);
            println!("   Failed:           {}", result.fail_count);
        }
    }
    for name in &result.skipped_rule_sets {
        eprintln!("⚠️  Rule set '{}' not found, skipped", name);
    }
    render::file_errors(&result.errors);

    if let Some(path) = &args.output {
        write_report(path, "compliance_measurement", &result)?;
        eprintln!("📄 JSON report saved to {}", path.display());
    }

    if args.strict && result.has_failures() {
        eprintln!("\n💥 --strict mode: failing due to non-compliant measurements.");
        return Ok(false);
    }
    Ok(true)
}
