//! Configuration for machine settings module

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Machine settings configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JSON file mapping machine names to `{ type, config }`
    #[serde(default = "default_machines_file")]
    pub machines_file: PathBuf,

    /// Base directory for relative per-machine file paths.
    /// Defaults to the directory containing `machines_file`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            machines_file: default_machines_file(),
            settings_dir: None,
        }
    }
}

impl Config {
    /// Directory that relative machine file paths resolve against
    pub fn settings_base_dir(&self) -> PathBuf {
        match &self.settings_dir {
            Some(dir) => dir.clone(),
            None => self
                .machines_file
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        }
    }
}

fn default_machines_file() -> PathBuf {
    PathBuf::from("configurations/machines.json")
}
