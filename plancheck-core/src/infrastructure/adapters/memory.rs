// plancheck-core/src/infrastructure/adapters/memory.rs

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::ports::cad::{AdapterError, CadAdapter, DimensionEntity};

/// CAD adapter serving canned dimensions, keyed by drawing path.
///
/// Used by tests and dry runs where no CAD application is available.
#[derive(Debug, Default)]
pub struct InMemoryCadAdapter {
    drawings: HashMap<PathBuf, Vec<DimensionEntity>>,
    failures: HashMap<PathBuf, String>,
    current: Option<PathBuf>,
    opened: Vec<PathBuf>,
    closed: usize,
}

impl InMemoryCadAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drawing(mut self, path: impl Into<PathBuf>, dimensions: Vec<DimensionEntity>) -> Self {
        self.drawings.insert(path.into(), dimensions);
        self
    }

    /// Registers a drawing that opens but fails when its dimensions are read.
    pub fn with_failure(mut self, path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        self.failures.insert(path.into(), reason.into());
        self
    }

    /// Every drawing opened so far, in order.
    pub fn opened(&self) -> &[PathBuf] {
        &self.opened
    }

    pub fn close_count(&self) -> usize {
        self.closed
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

impl CadAdapter for InMemoryCadAdapter {
    fn open_drawing(&mut self, path: &Path) -> Result<(), AdapterError> {
        if !self.drawings.contains_key(path) && !self.failures.contains_key(path) {
            return Err(AdapterError::DrawingNotFound(path.to_path_buf()));
        }
        self.opened.push(path.to_path_buf());
        self.current = Some(path.to_path_buf());
        Ok(())
    }

    fn get_dimensions(&mut self) -> Result<Vec<DimensionEntity>, AdapterError> {
        let path = self.current.as_ref().ok_or(AdapterError::NoOpenDrawing)?;

        if let Some(reason) = self.failures.get(path) {
            return Err(AdapterError::Extraction {
                path: path.clone(),
                reason: reason.clone(),
            });
        }

        Ok(self.drawings.get(path).cloned().unwrap_or_default())
    }

    fn close_drawing(&mut self) -> Result<(), AdapterError> {
        if self.current.take().is_none() {
            return Err(AdapterError::NoOpenDrawing);
        }
        self.closed += 1;
        Ok(())
    }
}
