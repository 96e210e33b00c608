use crate::undo_stack::{RedoPolicy, DEFAULT_CAPACITY};
use covlet_common::CommonResult;
use covlet_profile::Profile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "config.yml";

/// Name of the templates folder under `home_dir`
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// `config.yml` format: the profile fields at the top level, plus
/// application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Folder holding the user's templates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_dir: Option<PathBuf>,

    #[serde(default)]
    pub editor: EditorOptions,

    #[serde(flatten)]
    pub profile: Profile,
}

/// Per-session editor settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    pub history_capacity: usize,
    pub redo_policy: RedoPolicy,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_CAPACITY,
            redo_policy: RedoPolicy::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: impl AsRef<Path>) -> CommonResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load config, falling back to defaults when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> CommonResult<Self> {
        match Self::load(path) {
            Err(e) if e.is_not_found() => Ok(Config::default()),
            other => other,
        }
    }

    pub fn from_yaml(content: &str) -> CommonResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> CommonResult<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// `<home_dir>/templates`, if a home directory is configured
    pub fn templates_dir(&self) -> Option<PathBuf> {
        self.home_dir
            .as_ref()
            .map(|home| home.join(TEMPLATES_DIR_NAME))
    }
}
