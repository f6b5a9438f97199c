//! Settings facade: the single entry point for loading and writing settings.

use super::defaults;
use super::sources::home_file;
use super::Settings;
use crate::error::SettingsError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What [`SettingsStore::write`] puts on disk: literal text, or a mapping to serialize.
#[derive(Debug, Clone, Copy)]
pub enum SettingsContents<'a> {
    Text(&'a str),
    Settings(&'a Settings),
}

impl SettingsContents<'_> {
    fn render(&self) -> Result<String, SettingsError> {
        match self {
            SettingsContents::Text(text) => Ok((*text).to_string()),
            SettingsContents::Settings(settings) => settings.to_yaml_string(),
        }
    }
}

impl<'a> From<&'a str> for SettingsContents<'a> {
    fn from(text: &'a str) -> Self {
        SettingsContents::Text(text)
    }
}

impl<'a> From<&'a String> for SettingsContents<'a> {
    fn from(text: &'a String) -> Self {
        SettingsContents::Text(text)
    }
}

impl<'a> From<&'a Settings> for SettingsContents<'a> {
    fn from(settings: &'a Settings) -> Self {
        SettingsContents::Settings(settings)
    }
}

/// Loads, merges and persists janitor settings.
///
/// Stateless: every call resolves the path and touches the filesystem anew.
/// The `*_from`/`*_to` variants take an explicit path; the others use
/// [`SettingsStore::config_path`].
pub struct SettingsStore;

impl SettingsStore {
    pub fn default_text() -> &'static str {
        defaults::default_text()
    }

    pub fn default_settings() -> Settings {
        defaults::default_settings()
    }

    /// `<home>/.docker-janitor.yml`
    pub fn config_path() -> Result<PathBuf, SettingsError> {
        let path = home_file::settings_path()?;
        debug!(config_path = %path.display(), "Resolved settings path");
        Ok(path)
    }

    pub fn file_exists(path: &Path) -> Result<bool, SettingsError> {
        home_file::file_exists(path)
    }

    /// Load effective settings from the default path.
    pub fn load() -> Result<Settings, SettingsError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Defaults when `path` does not exist; otherwise defaults shallow-merged
    /// with the file's mapping. A malformed file is an error, not a fallback.
    pub fn load_from(path: &Path) -> Result<Settings, SettingsError> {
        // Defaults are rebuilt on every load; nothing is cached between calls
        let defaults = Self::default_settings();

        // A missing file is not an error, a malformed one is
        match home_file::read_user_settings(path)? {
            Some(user) => {
                debug!(
                    config_path = %path.display(),
                    keys = user.len(),
                    "Merging user settings over defaults"
                );
                Ok(defaults.merged_with(user))
            }
            None => Ok(defaults),
        }
    }

    pub fn write<'a>(contents: impl Into<SettingsContents<'a>>) -> Result<(), SettingsError> {
        Self::write_to(contents, &Self::config_path()?)
    }

    /// Overwrite `path` with text as given, or with a serialized mapping.
    pub fn write_to<'a>(
        contents: impl Into<SettingsContents<'a>>,
        path: &Path,
    ) -> Result<(), SettingsError> {
        // Text is written as given; mappings are serialized first
        let text = contents.into().render()?;
        home_file::write_text(path, &text)?;
        info!(
            config_path = %path.display(),
            bytes = text.len(),
            "Wrote settings file"
        );
        Ok(())
    }

    pub fn write_defaults() -> Result<(), SettingsError> {
        Self::write_defaults_to(&Self::config_path()?)
    }

    /// Write the literal default template, comments included.
    pub fn write_defaults_to(path: &Path) -> Result<(), SettingsError> {
        Self::write_to(Self::default_text(), path)
    }
}
