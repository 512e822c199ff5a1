// plancheck-core/src/application/mod.rs

pub mod compliance;
pub mod extraction;
pub mod measurement;
pub mod report;

#[cfg(test)]
pub(crate) mod testing;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use plancheck_core::application::{check_compliance, measure_compliance};`

pub use compliance::check_compliance;
pub use extraction::extract_dimensions;
pub use measurement::measure_compliance;
pub use report::{Report, write_report};
