//! Settings file persistence.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::Settings;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file I/O: {0}")]
    Io(#[from] io::Error),

    #[error("settings file is malformed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not encode settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Read settings from `path`. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file");
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };
    let settings = toml::from_str(&text)?;
    debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(settings)?)?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

#[inline]
pub fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/pronpass/settings.toml")
}
