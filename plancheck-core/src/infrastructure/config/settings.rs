// plancheck-core/src/infrastructure/config/settings.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::standards::{MAPPING_FILE, RULES_SUBDIR};

pub const CONFIG_CANDIDATES: [&str; 2] = ["plancheck.yaml", "plancheck.yml"];
pub const ENV_STANDARDS_DIR: &str = "PLANCHECK_STANDARDS_DIR";
pub const ENV_LOG_LEVEL: &str = "PLANCHECK_LOG_LEVEL";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(rename = "standards-dir", default = "default_standards_dir")]
    pub standards_dir: PathBuf,

    #[serde(rename = "log-level", default = "default_log_level")]
    pub log_level: String,

    /// Descend into sub-folders when looking for drawings.
    #[serde(default = "default_recursive")]
    pub recursive: bool,
}

fn default_standards_dir() -> PathBuf {
    PathBuf::from("standards")
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_recursive() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            standards_dir: default_standards_dir(),
            log_level: default_log_level(),
            recursive: default_recursive(),
        }
    }
}

impl Settings {
    pub fn rules_dir(&self) -> PathBuf {
        self.standards_dir.join(RULES_SUBDIR)
    }

    pub fn mapping_path(&self) -> PathBuf {
        self.standards_dir.join(MAPPING_FILE)
    }
}

// --- LOADER ---

/// Loads `plancheck.yaml` from `project_dir`, layers environment overrides on top and
/// resolves a relative standards directory against `project_dir`.
///
/// A project without a config file runs on defaults; a config file that does not
/// parse is an error.
#[instrument(skip(project_dir))]
pub fn load_settings(project_dir: &Path) -> Result<Settings, InfrastructureError> {
    load_settings_with(project_dir, |key| std::env::var(key).ok())
}

/// Same as [`load_settings`], with the environment lookup injected.
pub fn load_settings_with<F>(project_dir: &Path, env: F) -> Result<Settings, InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = match find_config(project_dir) {
        Some(path) => {
            info!(path = ?path, "Loading project settings");
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Settings::default()
            } else {
                serde_yaml::from_str(&content)?
            }
        }
        None => Settings::default(),
    };

    apply_env_overrides(&mut settings, &env);

    if settings.standards_dir.is_relative() {
        settings.standards_dir = project_dir.join(&settings.standards_dir);
    }

    if settings.log_level.trim().is_empty() {
        return Err(InfrastructureError::ConfigError(
            "log-level cannot be empty".to_string(),
        ));
    }

    Ok(settings)
}

fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
}

fn apply_env_overrides<F>(settings: &mut Settings, env: &F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = env(ENV_STANDARDS_DIR) {
        info!(old = ?settings.standards_dir, new = ?val, "Overriding standards dir via ENV");
        settings.standards_dir = PathBuf::from(val);
    }
    if let Some(val) = env(ENV_LOG_LEVEL) {
        info!(old = ?settings.log_level, new = ?val, "Overriding log level via ENV");
        settings.log_level = val;
    }
}
