//! CLI route: single route table and run context. Dispatches to the settings store and presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation::{format_check_result, format_init_summary, format_settings};
use crate::cli::command_name;
use crate::config::SettingsStore;
use crate::error::JanitorError;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for CLI execution: the settings file every command works on.
pub struct RunContext {
    config_path: PathBuf,
}

impl RunContext {
    /// Use `config_path` when given, otherwise `~/.docker-janitor.yml`.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, JanitorError> {
        let config_path = match config_path {
            Some(path) => path,
            None => SettingsStore::config_path()?,
        };
        Ok(Self { config_path })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Run one command and return what should be printed to stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, JanitorError> {
        debug!(
            command = command_name(command),
            config_path = %self.config_path.display(),
            "Executing command"
        );

        match command {
            Commands::Path => Ok(self.config_path.display().to_string()),
            Commands::Show { format, defaults } => {
                let settings = if *defaults {
                    SettingsStore::default_settings()
                } else {
                    SettingsStore::load_from(&self.config_path)?
                };
                format_settings(&settings, *format)
            }
            Commands::Defaults => Ok(SettingsStore::default_text().trim_end().to_string()),
            Commands::Init { force } => self.handle_init(*force),
            Commands::Check => self.handle_check(std::io::stdout().is_terminal()),
        }
    }

    fn handle_init(&self, force: bool) -> Result<String, JanitorError> {
        let exists = SettingsStore::file_exists(&self.config_path)?;
        if exists && !force {
            return Err(JanitorError::AlreadyExists(self.config_path.clone()));
        }

        SettingsStore::write_defaults_to(&self.config_path)?;
        info!(
            config_path = %self.config_path.display(),
            overwritten = exists,
            "Initialized settings file"
        );
        Ok(format_init_summary(&self.config_path, exists))
    }

    fn handle_check(&self, color: bool) -> Result<String, JanitorError> {
        let settings = SettingsStore::load_from(&self.config_path)?;

        // No janitor section at all means nothing to check
        let lists = settings.safe_lists()?.unwrap_or_default();
        lists.validate().map_err(JanitorError::InvalidPatterns)?;
        Ok(format_check_result(&lists, color))
    }
}
