// src/domain/ports/mod.rs

pub mod rule_source;

pub use rule_source::RuleSource;
