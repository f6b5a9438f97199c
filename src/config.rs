//! Settings System
//!
//! Loads the janitor's protection lists from `~/.docker-janitor.yml`, layering the
//! user's file over the built-in defaults one key deep, and writes settings back.
//! Tests included.

use crate::error::SettingsError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::path::Path;

mod defaults;
mod facade;
mod merge;
mod sources;

pub use defaults::{default_settings, default_text};
pub use facade::{SettingsContents, SettingsStore};
pub use sources::home_file::{settings_path, SETTINGS_FILE_NAME};

/// Top-level key holding the protection lists
pub const JANITOR_KEY: &str = "docker-janitor";

/// Settings mapping as read from or written to the settings file.
///
/// Keys are kept in document order. Values are opaque to the store; use
/// [`Settings::safe_lists`] for a typed view of the janitor section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(Mapping);

impl Settings {
    pub fn new(mapping: Mapping) -> Self {
        Self(mapping)
    }

    /// Parse YAML text into a settings mapping.
    ///
    /// Symbol-style keys (`:docker-janitor:`, `:safe_containers:`) are read as
    /// their plain names on the top two levels.
    pub fn from_yaml_str(text: &str) -> Result<Self, SettingsError> {
        Self::parse(text, None)
    }

    pub(crate) fn parse(text: &str, path: Option<&Path>) -> Result<Self, SettingsError> {
        let value: Value = serde_yaml::from_str(text).map_err(|source| SettingsError::Parse {
            path: path.map(Path::to_path_buf),
            source,
        })?;
        match value {
            Value::Mapping(mapping) => Ok(Self(normalize_symbol_keys(mapping))),
            _ => Err(SettingsError::NotAMapping {
                path: path.map(Path::to_path_buf),
            }),
        }
    }

    /// Serialize to YAML text readable by [`Settings::from_yaml_str`].
    pub fn to_yaml_string(&self) -> Result<String, SettingsError> {
        serde_yaml::to_string(&self.0).map_err(SettingsError::Serialize)
    }

    /// Build a settings mapping holding all three protection lists.
    pub fn from_safe_lists(lists: &SafeLists) -> Self {
        let mut section = Mapping::new();
        section.insert("safe_containers".into(), string_seq(&lists.safe_containers));
        section.insert("safe_images".into(), string_seq(&lists.safe_images));
        section.insert("safe_volumes".into(), string_seq(&lists.safe_volumes));

        let mut mapping = Mapping::new();
        mapping.insert(JANITOR_KEY.into(), Value::Mapping(section));
        Self(mapping)
    }

    /// Layer `overrides` on top of `self`, replacing whole top-level entries.
    pub fn merged_with(self, overrides: Settings) -> Settings {
        Settings(merge::merge_policy::shallow_merge(self.0, overrides.0))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Top-level keys in document order
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode the `docker-janitor` section.
    ///
    /// Returns `None` when the section is absent. Lists missing from the section
    /// decode as empty, so a user file that only sets `safe_images` yields no
    /// container or volume protection.
    pub fn safe_lists(&self) -> Result<Option<SafeLists>, SettingsError> {
        let section = match self.0.get(JANITOR_KEY) {
            None => return Ok(None),
            // `docker-janitor:` with nothing under it
            Some(Value::Null) => return Ok(Some(SafeLists::default())),
            Some(section) => section,
        };
        serde_yaml::from_value(section.clone())
            .map(Some)
            .map_err(|source| SettingsError::InvalidSection {
                key: JANITOR_KEY.to_string(),
                source,
            })
    }
}

fn normalize_symbol_keys(mapping: Mapping) -> Mapping {
    mapping
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Mapping(section) => Value::Mapping(
                    section
                        .into_iter()
                        .map(|(k, v)| (strip_symbol_prefix(k), v))
                        .collect(),
                ),
                other => other,
            };
            (strip_symbol_prefix(key), value)
        })
        .collect()
}

fn strip_symbol_prefix(key: Value) -> Value {
    match key {
        Value::String(name) if name.len() > 1 && name.starts_with(':') => {
            Value::String(name[1..].to_string())
        }
        other => other,
    }
}

fn string_seq(items: &[String]) -> Value {
    Value::Sequence(items.iter().cloned().map(Value::String).collect())
}

/// Typed view of the `docker-janitor` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafeLists {
    /// Patterns matched against container names
    pub safe_containers: Vec<String>,

    /// Patterns matched against image digests/IDs
    pub safe_images: Vec<String>,

    /// Patterns matched against volume digests/IDs
    pub safe_volumes: Vec<String>,
}

impl SafeLists {
    /// Lists in file order, paired with their key
    pub fn lists(&self) -> [(&'static str, &[String]); 3] {
        [
            ("safe_containers", &self.safe_containers),
            ("safe_images", &self.safe_images),
            ("safe_volumes", &self.safe_volumes),
        ]
    }

    /// Compile every pattern, collecting one error per invalid pattern.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (list, patterns) in self.lists() {
            for (index, pattern) in patterns.iter().enumerate() {
                if let Err(e) = Regex::new(pattern) {
                    errors.push(ValidationError {
                        list,
                        index,
                        pattern: pattern.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A protection pattern that does not compile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub list: &'static str,
    pub index: usize,
    pub pattern: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Regex messages span several lines; the last one names the problem.
        let summary = self.message.lines().last().unwrap_or_default().trim();
        write!(
            f,
            "{}[{}] '{}': {}",
            self.list, self.index, self.pattern, summary
        )
    }
}

impl std::error::Error for ValidationError {}
