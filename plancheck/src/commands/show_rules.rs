// plancheck/src/commands/show_rules.rs

use plancheck_core::PlancheckError;
use plancheck_core::domain::ports::RuleSource;

use super::context::Context;
use crate::cli::OutputFormat;
use crate::render;

pub fn execute(ctx: &Context, name: &str, format: OutputFormat) -> anyhow::Result<()> {
    let rule_set = ctx
        .store()
        .load_rule_set(name)
        .map_err(PlancheckError::from)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rule_set)?),
        OutputFormat::Table => {
            println!(
                "📖 {} ({}) - {} rules",
                rule_set.source_document,
                rule_set.source_short,
                rule_set.rules.len()
            );
            println!("{}", render::rule_set(&rule_set));
        }
    }
    Ok(())
}
