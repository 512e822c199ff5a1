// plancheck-core/src/ports/cad.rs

// The capability set the engine needs from a CAD application, and nothing more.
// Whether the drawing is read through COM automation, an export file or an
// in-memory fixture is an adapter concern.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Drawing not found: {0}")]
    DrawingNotFound(PathBuf),

    #[error("No drawing is currently open")]
    NoOpenDrawing,

    #[error("Dimension export missing for {drawing} (expected {export})")]
    ExportMissing { drawing: PathBuf, export: PathBuf },

    #[error("Failed to read dimensions from {path}: {reason}")]
    Extraction { path: PathBuf, reason: String },

    #[error("Adapter I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Kind of dimension entity, as reported by the CAD application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionKind {
    Linear,
    Aligned,
    Angular,
    Radial,
    Diametric,
    Ordinate,
    ArcLength,
}

impl DimensionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Aligned => "aligned",
            Self::Angular => "angular",
            Self::Radial => "radial",
            Self::Diametric => "diametric",
            Self::Ordinate => "ordinate",
            Self::ArcLength => "arc_length",
        }
    }
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DimensionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "aligned" => Ok(Self::Aligned),
            "angular" => Ok(Self::Angular),
            "radial" => Ok(Self::Radial),
            "diametric" => Ok(Self::Diametric),
            "ordinate" => Ok(Self::Ordinate),
            "arc_length" | "arclength" => Ok(Self::ArcLength),
            _ => Err(format!("Unknown dimension type: {}", s)),
        }
    }
}

/// One measured dimension in an open drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionEntity {
    #[serde(default)]
    pub handle: String,
    pub dimension_type: DimensionKind,
    pub value: f64,
    pub layer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_override: Option<String>,
}

impl DimensionEntity {
    pub fn new(dimension_type: DimensionKind, value: f64, layer: impl Into<String>) -> Self {
        Self {
            handle: String::new(),
            dimension_type,
            value,
            layer: layer.into(),
            text_override: None,
        }
    }
}

pub trait CadAdapter {
    fn open_drawing(&mut self, path: &Path) -> Result<(), AdapterError>;

    /// Dimensions of the drawing opened last.
    fn get_dimensions(&mut self) -> Result<Vec<DimensionEntity>, AdapterError>;

    /// Closes the current drawing without saving.
    fn close_drawing(&mut self) -> Result<(), AdapterError>;
}

/// Opens `path`, reads its dimensions and closes it again.
///
/// The drawing is closed even when reading fails; the read error wins over a
/// close error in that case.
pub fn read_dimensions(
    adapter: &mut dyn CadAdapter,
    path: &Path,
) -> Result<Vec<DimensionEntity>, AdapterError> {
    adapter.open_drawing(path)?;

    match adapter.get_dimensions() {
        Ok(dims) => {
            adapter.close_drawing()?;
            Ok(dims)
        }
        Err(e) => {
            if let Err(close_err) = adapter.close_drawing() {
                tracing::debug!(path = ?path, error = %close_err, "Close after failed read also failed");
            }
            Err(e)
        }
    }
}
