// plancheck-core/src/application/extraction.rs

use tracing::{error, info, instrument};

use crate::domain::compliance::{
    DimensionExtractionRequest, DimensionExtractionResult, FileDimensions, FileError,
};
use crate::infrastructure::fs::discover_drawings;
use crate::ports::cad::{CadAdapter, DimensionEntity, read_dimensions};

/// Lists the dimension entities of every drawing under `request.folder`.
#[instrument(skip(adapter, request), fields(folder = ?request.folder))]
pub fn extract_dimensions(
    adapter: &mut dyn CadAdapter,
    request: &DimensionExtractionRequest,
) -> DimensionExtractionResult {
    let mut result = DimensionExtractionResult::default();

    for drawing in discover_drawings(&request.folder, request.recursive) {
        let file = drawing.display().to_string();

        match read_dimensions(adapter, &drawing) {
            Ok(dims) => {
                let dimensions: Vec<DimensionEntity> =
                    dims.into_iter().filter(|d| keep(request, d)).collect();
                result.total_dimensions += dimensions.len();
                result.files_processed += 1;
                result.details.push(FileDimensions { file, dimensions });
            }
            Err(e) => {
                error!(file = %file, error = %e, "Error processing drawing");
                result.errors.push(FileError {
                    file,
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        files = result.files_processed,
        dimensions = result.total_dimensions,
        "Dimension extraction complete"
    );
    result
}

// Layer names compare case-insensitively, like CAD layer tables do.
fn keep(request: &DimensionExtractionRequest, dim: &DimensionEntity) -> bool {
    let layer_ok = match request.layers.as_deref() {
        None | Some([]) => true,
        Some(layers) => layers.iter().any(|l| l.eq_ignore_ascii_case(&dim.layer)),
    };
    let kind_ok = match request.dimension_types.as_deref() {
        None | Some([]) => true,
        Some(kinds) => kinds.contains(&dim.dimension_type),
    };
    layer_ok && kind_ok
}
