//! Home settings file source: ~/.docker-janitor.yml

use crate::config::Settings;
use crate::error::SettingsError;
use directories::BaseDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the settings file inside the home directory
pub const SETTINGS_FILE_NAME: &str = ".docker-janitor.yml";

/// Path to the settings file. Existence is not checked.
pub fn settings_path() -> Result<PathBuf, SettingsError> {
    let base_dirs = BaseDirs::new().ok_or(SettingsError::HomeDirNotFound)?;
    Ok(base_dirs.home_dir().join(SETTINGS_FILE_NAME))
}

/// `Ok(false)` only when nothing is at `path`; other stat failures are errors.
pub fn file_exists(path: &Path) -> Result<bool, SettingsError> {
    path.try_exists().map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_text(path: &Path) -> Result<String, SettingsError> {
    fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite `path` with `text`. Parent directories are not created.
pub fn write_text(path: &Path, text: &str) -> Result<(), SettingsError> {
    fs::write(path, text).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the user's settings file, or `None` when nothing is there.
pub fn read_user_settings(path: &Path) -> Result<Option<Settings>, SettingsError> {
    if !file_exists(path)? {
        debug!(
            config_path = %path.display(),
            "No settings file found, using built-in defaults"
        );
        return Ok(None);
    }

    let text = read_text(path)?;
    Settings::parse(&text, Some(path)).map(Some)
}
