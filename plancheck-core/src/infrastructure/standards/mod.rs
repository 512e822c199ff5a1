// plancheck-core/src/infrastructure/standards/mod.rs

pub mod schema;
pub mod store;

pub use schema::SchemaViolation;
pub use store::{JsonRuleStore, MAPPING_FILE, RULES_SUBDIR};
