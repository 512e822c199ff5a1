// plancheck/src/commands/check.rs
//
// USE CASE: which rules apply to this building?

use std::path::PathBuf;

use plancheck_core::application::{check_compliance, write_report};
use plancheck_core::domain::compliance::ComplianceCheckRequest;

use super::context::Context;
use crate::cli::OutputFormat;
use crate::render;

pub struct CheckArgs {
    pub rule_sets: Vec<String>,
    pub building_type: Option<String>,
    pub categories: Vec<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl CheckArgs {
    fn request(&self) -> ComplianceCheckRequest {
        let mut request = ComplianceCheckRequest::default();
        if !self.rule_sets.is_empty() {
            request.rule_sets = self.rule_sets.clone();
        }
        request.building_type = self.building_type.clone();
        if !self.categories.is_empty() {
            request.categories = Some(self.categories.clone());
        }
        request
    }
}

pub fn execute(ctx: &Context, args: CheckArgs) -> anyhow::Result<()> {
    let store = ctx.store();
    let result = check_compliance(&store, &args.request())?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Table => {
            println!("{}", render::check(&result));
            println!("📊 Summary:");
            println!("   Rule sets: {}", result.rule_sets_loaded);
            println!("   Applicable rules: {}", result.total_rules);
        }
    }

    if let Some(path) = &args.output {
        write_report(path, "compliance_check", &result)?;
        eprintln!("📄 JSON report saved to {}", path.display());
    }

    Ok(())
}
