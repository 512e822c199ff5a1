// plancheck-core/src/ports/mod.rs

pub mod cad;

pub use cad::{AdapterError, CadAdapter, DimensionEntity, DimensionKind, read_dimensions};
