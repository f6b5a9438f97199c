//! Error types for the docker-janitor settings store and CLI.

use crate::config::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Settings load/write errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to parse settings{}: {source}", display_path(.path))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Settings{} must be a YAML mapping at the top level", display_path(.path))]
    NotAMapping { path: Option<PathBuf> },

    #[error("Invalid '{key}' section: {source}")]
    InvalidSection {
        key: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Settings I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("Could not resolve a home directory for the settings file")]
    HomeDirNotFound,
}

impl SettingsError {
    /// Content was not valid YAML or did not have the expected shape.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            SettingsError::Parse { .. }
                | SettingsError::NotAMapping { .. }
                | SettingsError::InvalidSection { .. }
        )
    }

    /// Filesystem read/write failure.
    pub fn is_io(&self) -> bool {
        matches!(self, SettingsError::Io { .. })
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" in {}", path.display()),
        None => String::new(),
    }
}

/// Application-level errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum JanitorError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Settings file already exists at {}. Use --force to overwrite it.", .0.display())]
    AlreadyExists(PathBuf),

    #[error("{} invalid pattern(s):\n{}", .0.len(), join_lines(.0))]
    InvalidPatterns(Vec<ValidationError>),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    OutputError(String),
}

fn join_lines(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<config::ConfigError> for JanitorError {
    fn from(err: config::ConfigError) -> Self {
        JanitorError::ConfigError(err.to_string())
    }
}
