// plancheck/src/commands/context.rs
//
// Settings resolution shared by every command.

use std::path::{Path, PathBuf};

use plancheck_core::PlancheckError;
use plancheck_core::infrastructure::config::{Settings, load_settings};
use plancheck_core::infrastructure::standards::JsonRuleStore;

pub struct Context {
    pub settings: Settings,
}

impl Context {
    /// Settings from `project_dir`, with `--standards-dir` taking precedence over file and ENV.
    pub fn load(project_dir: &Path, standards_dir: Option<PathBuf>) -> Result<Self, PlancheckError> {
        let mut settings = load_settings(project_dir)?;
        if let Some(dir) = standards_dir {
            settings.standards_dir = dir;
        }
        Ok(Self { settings })
    }

    pub fn store(&self) -> JsonRuleStore {
        JsonRuleStore::from_settings(&self.settings)
    }
}
