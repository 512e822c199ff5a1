// plancheck-core/src/infrastructure/standards/store.rs

use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use super::schema::{self, SchemaViolation};
use crate::domain::compliance::{ComplianceRuleSet, DimensionMapping};
use crate::domain::error::DomainError;
use crate::domain::ports::RuleSource;
use crate::infrastructure::config::Settings;

pub const RULES_SUBDIR: &str = "rules";
pub const MAPPING_FILE: &str = "dimension_mapping.json";

fn re_rule_set_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-z0-9][a-z0-9_.\-]*$").unwrap_or_else(|_| {
            // Hardcoded pattern; the fallback matches nothing.
            Regex::new("$^").unwrap_or_else(|_| unreachable!())
        })
    })
}

/// Rule Store backed by `<standards>/rules/*.json` and `<standards>/dimension_mapping.json`.
///
/// Nothing is cached: every call re-reads the files, so edits to a rule set are
/// picked up by the next check.
#[derive(Debug, Clone)]
pub struct JsonRuleStore {
    rules_dir: PathBuf,
    mapping_path: PathBuf,
}

impl JsonRuleStore {
    pub fn new(standards_dir: impl AsRef<Path>) -> Self {
        let standards_dir = standards_dir.as_ref();
        Self {
            rules_dir: standards_dir.join(RULES_SUBDIR),
            mapping_path: standards_dir.join(MAPPING_FILE),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            rules_dir: settings.rules_dir(),
            mapping_path: settings.mapping_path(),
        }
    }

    pub fn rules_dir(&self) -> &Path {
        &self.rules_dir
    }

    pub fn mapping_path(&self) -> &Path {
        &self.mapping_path
    }

    /// File path for a rule-set name. Names are matched lowercase and must be plain stems.
    pub fn rule_set_path(&self, name: &str) -> Result<PathBuf, DomainError> {
        let stem = name.trim().to_lowercase();
        if !re_rule_set_name().is_match(&stem) {
            return Err(DomainError::UnsafeRuleSetName(name.to_string()));
        }
        Ok(self.rules_dir.join(format!("{}.json", stem)))
    }
}

fn read_document(path: &Path) -> Result<Option<String>, DomainError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DomainError::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

impl RuleSource for JsonRuleStore {
    #[instrument(skip(self), fields(rules_dir = ?self.rules_dir))]
    fn load_rule_set(&self, name: &str) -> Result<ComplianceRuleSet, DomainError> {
        let path = self.rule_set_path(name)?;

        let content = read_document(&path)?.ok_or_else(|| DomainError::RuleSetNotFound {
            name: name.to_string(),
            path: path.clone(),
        })?;

        let rule_set = schema::parse_rule_set(&content).map_err(
            |SchemaViolation { field, message }| DomainError::InvalidRuleSet {
                name: name.to_string(),
                field,
                message,
            },
        )?;

        debug!(rules = rule_set.rules.len(), "Rule set loaded");
        Ok(rule_set)
    }

    fn list_rule_sets(&self) -> Vec<String> {
        if !self.rules_dir.is_dir() {
            return Vec::new();
        }

        let mut names: Vec<String> = WalkDir::new(&self.rules_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
            .filter_map(|e| {
                e.path()
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
            })
            .collect();

        names.sort();
        names
    }

    #[instrument(skip(self), fields(path = ?self.mapping_path))]
    fn load_dimension_mapping(&self) -> Result<DimensionMapping, DomainError> {
        let Some(content) = read_document(&self.mapping_path)? else {
            warn!("Dimension mapping file not found; no layer will match a rule parameter");
            return Ok(DimensionMapping::default());
        };

        schema::parse_dimension_mapping(&content).map_err(|SchemaViolation { field, message }| {
            DomainError::InvalidMapping { field, message }
        })
    }
}
