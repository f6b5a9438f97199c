//! docker-janitor: settings for the Docker cleanup utility
//!
//! Loads the patterns that mark containers, images and volumes as safe from
//! deletion, layering `~/.docker-janitor.yml` over built-in defaults, and
//! writes settings back to disk.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use config::{SafeLists, Settings, SettingsContents, SettingsStore};
pub use error::{JanitorError, SettingsError};
