// plancheck/src/commands/mod.rs

pub mod check;
pub mod context;
pub mod extract;
pub mod list_rules;
pub mod measure;
pub mod show_rules;

pub use context::Context;
