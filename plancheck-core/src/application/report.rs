// plancheck-core/src/application/report.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::error::PlancheckError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;

/// JSON envelope written around every exported result.
#[derive(Debug, Serialize)]
pub struct Report<'a, T: Serialize> {
    pub kind: &'a str,
    pub generated_at: DateTime<Utc>,
    pub tool_version: &'a str,
    pub result: &'a T,
}

impl<'a, T: Serialize> Report<'a, T> {
    pub fn new(kind: &'a str, result: &'a T) -> Self {
        Self {
            kind,
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION"),
            result,
        }
    }

    pub fn to_json(&self) -> Result<String, PlancheckError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlancheckError::Infrastructure(InfrastructureError::Json(e)))
    }
}

/// Writes `result` as a pretty JSON report to `path`, replacing any previous one atomically.
pub fn write_report<T: Serialize>(path: &Path, kind: &str, result: &T) -> Result<(), PlancheckError> {
    let json = Report::new(kind, result).to_json()?;
    atomic_write(path, json)?;
    info!(path = ?path, kind, "Report written");
    Ok(())
}
