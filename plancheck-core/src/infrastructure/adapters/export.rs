// plancheck-core/src/infrastructure/adapters/export.rs

// Reads dimensions from the sidecar file the CAD-side export script writes next
// to each drawing: `plan.dwg` -> `plan.dims.json`, shaped as
// `{"dimensions": [{"handle", "dimension_type", "value", "layer", "text_override"}]}`.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::ports::cad::{AdapterError, CadAdapter, DimensionEntity};

pub const EXPORT_EXTENSION: &str = "dims.json";

#[derive(Debug, Deserialize)]
struct DimensionExport {
    #[serde(default)]
    dimensions: Vec<DimensionEntity>,
}

#[derive(Debug)]
struct OpenDrawing {
    drawing: PathBuf,
    export: PathBuf,
}

#[derive(Debug, Default)]
pub struct DimensionExportAdapter {
    current: Option<OpenDrawing>,
}

impl DimensionExportAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn export_path(drawing: &Path) -> PathBuf {
        drawing.with_extension(EXPORT_EXTENSION)
    }
}

impl CadAdapter for DimensionExportAdapter {
    fn open_drawing(&mut self, path: &Path) -> Result<(), AdapterError> {
        if !path.is_file() {
            return Err(AdapterError::DrawingNotFound(path.to_path_buf()));
        }

        let export = Self::export_path(path);
        if !export.is_file() {
            return Err(AdapterError::ExportMissing {
                drawing: path.to_path_buf(),
                export,
            });
        }

        debug!(drawing = ?path, export = ?export, "Drawing opened");
        self.current = Some(OpenDrawing {
            drawing: path.to_path_buf(),
            export,
        });
        Ok(())
    }

    fn get_dimensions(&mut self) -> Result<Vec<DimensionEntity>, AdapterError> {
        let open = self.current.as_ref().ok_or(AdapterError::NoOpenDrawing)?;

        let content = fs::read_to_string(&open.export)?;
        let parsed: DimensionExport =
            serde_json::from_str(&content).map_err(|e| AdapterError::Extraction {
                path: open.drawing.clone(),
                reason: e.to_string(),
            })?;

        Ok(parsed.dimensions)
    }

    fn close_drawing(&mut self) -> Result<(), AdapterError> {
        self.current
            .take()
            .map(|_| ())
            .ok_or(AdapterError::NoOpenDrawing)
    }
}
