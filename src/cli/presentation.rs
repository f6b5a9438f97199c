//! CLI presentation: text and json formatters per command.

use crate::cli::parse::ShowFormat;
use crate::config::{SafeLists, Settings};
use crate::error::JanitorError;
use owo_colors::OwoColorize;
use std::path::Path;

/// Settings as YAML or pretty JSON, without a trailing newline.
pub fn format_settings(settings: &Settings, format: ShowFormat) -> Result<String, JanitorError> {
    match format {
        ShowFormat::Yaml => {
            let text = settings.to_yaml_string()?;
            Ok(text.trim_end().to_string())
        }
        ShowFormat::Json => serde_json::to_string_pretty(settings)
            .map_err(|e| JanitorError::OutputError(format!("Failed to render JSON: {}", e))),
    }
}

pub fn format_init_summary(path: &Path, overwritten: bool) -> String {
    if overwritten {
        format!("Overwrote settings file with defaults: {}", path.display())
    } else {
        format!("Created settings file: {}", path.display())
    }
}

/// One line per list; empty lists are called out since nothing of that kind is protected.
pub fn format_check_result(lists: &SafeLists, color: bool) -> String {
    let mut lines = vec!["All protection patterns are valid:".to_string()];
    for (name, patterns) in lists.lists() {
        let line = if patterns.is_empty() {
            let note = "no patterns, nothing protected";
            if color {
                format!("  {}: {}", name, note.yellow())
            } else {
                format!("  {}: {}", name, note)
            }
        } else {
            let status = format!("{} pattern(s) ok", patterns.len());
            if color {
                format!("  {}: {}", name, status.green())
            } else {
                format!("  {}: {}", name, status)
            }
        };
        lines.push(line);
    }
    lines.join("\n")
}
