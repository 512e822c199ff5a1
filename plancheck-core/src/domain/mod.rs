// plancheck-core/src/domain/mod.rs

pub mod compliance;
pub mod error;
pub mod ports;

pub use error::DomainError;
