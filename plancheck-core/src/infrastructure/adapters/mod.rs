pub mod export;
pub mod memory;

pub use export::DimensionExportAdapter;
pub use memory::InMemoryCadAdapter;
