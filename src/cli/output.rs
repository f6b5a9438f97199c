//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::JanitorError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &JanitorError) -> String {
    match e {
        JanitorError::Settings(inner) if inner.is_parse() => {
            format!("{}\nFix the settings file or regenerate it with `docker-janitor init --force`.", e)
        }
        _ => e.to_string(),
    }
}
