//! Generation settings: persisted defaults and the resolved run config.

mod config;
mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use config::{Config, ConfigError};
pub use file::SettingsError;

/// Defaults stored in the settings file. Unset fields fall back to the
/// built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub length: Option<usize>,
    pub symbols: Option<bool>,
    pub min_entropy: Option<f64>,
    pub max_attempts: Option<usize>,
    /// Replacement symbol class.
    pub special: Option<String>,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        file::load(&Self::path())
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        file::save(self, &Self::path())
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }

    pub fn path() -> PathBuf {
        file::get_path()
    }
}
