// plancheck/src/commands/extract.rs

use std::path::PathBuf;

use plancheck_core::application::extract_dimensions;
use plancheck_core::domain::compliance::DimensionExtractionRequest;
use plancheck_core::infrastructure::adapters::DimensionExportAdapter;
use plancheck_core::ports::DimensionKind;

use super::context::Context;
use crate::cli::OutputFormat;
use crate::render;

pub fn execute(
    ctx: &Context,
    folder: PathBuf,
    layers: Vec<String>,
    dimension_types: Vec<DimensionKind>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut request = DimensionExtractionRequest::new(folder);
    request.recursive = ctx.settings.recursive;
    request.layers = (!layers.is_empty()).then_some(layers);
    request.dimension_types = (!dimension_types.is_empty()).then_some(dimension_types);

    let mut adapter = DimensionExportAdapter::new();
    let result = extract_dimensions(&mut adapter, &request);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Table => {
            println!("{}", render::extraction(&result));
            println!("📊 Summary:");
            println!("   Files Processed:  {}", result.files_processed);
            println!("   Dimensions:       {}", result.total_dimensions);
        }
    }
    render::file_errors(&result.errors);

    Ok(())
}
