// plancheck-core/src/lib.rs

#![allow(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// CAD capability contract (open, read dimensions, close).
pub mod ports;

// Rules, mapping, findings. Depends on nothing but `ports`.
pub mod domain;

// JSON rule store, settings, CAD adapters, filesystem helpers.
pub mod infrastructure;

// Use cases: check, measure, extract, report.
pub mod application;

pub mod error;

pub use error::PlancheckError;
