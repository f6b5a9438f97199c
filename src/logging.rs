//! Logging System
//!
//! Structured logging using the `tracing` crate. Log events go to stderr by
//! default so that stdout carries only command output.

use crate::error::JanitorError;
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a full filter directive (e.g. `docker_janitor=debug`)
pub const LOG_FILTER_ENV: &str = "JANITOR_LOG";

/// Prefix for the per-field overrides: `JANITOR_LOG_LEVEL`, `JANITOR_LOG_FORMAT`, ...
const LOG_ENV_PREFIX: &str = "JANITOR_LOG";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr
    #[serde(default = "default_output")]
    pub output: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            color: default_true(),
        }
    }
}

impl LoggingConfig {
    /// Defaults overlaid with `JANITOR_LOG_*` environment variables.
    pub fn from_env() -> Result<Self, JanitorError> {
        Self::from_source(Environment::with_prefix(LOG_ENV_PREFIX).try_parsing(true))
    }

    fn from_source(env: Environment) -> Result<Self, JanitorError> {
        // Defaults first, then environment overrides
        let config = Config::builder()
            .set_default("level", default_log_level())?
            .set_default("format", default_format())?
            .set_default("output", default_output())?
            .set_default("color", default_true())?
            .add_source(env)
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

/// Initialize the logging system
///
/// `JANITOR_LOG` overrides the configured level when set.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), JanitorError> {
    let default_config = LoggingConfig::default();
    let config = config.unwrap_or(&default_config);

    // Build filter from environment or config
    let filter = build_env_filter(config)?;

    // Determine format and destination
    let format = parse_format(&config.format)?;
    let output = parse_output(&config.output)?;

    // Build subscriber - start with registry and filter
    let base_subscriber = Registry::default().with(filter);

    // One arm per format/destination pair; the layer types differ
    let result = match (format, output) {
        (LogFormat::Json, Output::Stdout) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stdout),
            )
            .try_init(),
        (LogFormat::Json, Output::Stderr) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        (LogFormat::Text, Output::Stdout) => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stdout),
            )
            .try_init(),
        (LogFormat::Text, Output::Stderr) => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| JanitorError::ConfigError(format!("Failed to install logger: {}", e)))
}

fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, JanitorError> {
    // JANITOR_LOG wins over the configured level
    if let Ok(filter) = EnvFilter::try_from_env(LOG_FILTER_ENV) {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| JanitorError::ConfigError(format!("Invalid log level '{}': {}", config.level, e)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Stdout,
    Stderr,
}

fn parse_format(format: &str) -> Result<LogFormat, JanitorError> {
    match format {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => Err(JanitorError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        ))),
    }
}

fn parse_output(output: &str) -> Result<Output, JanitorError> {
    match output {
        "stdout" => Ok(Output::Stdout),
        "stderr" => Ok(Output::Stderr),
        _ => Err(JanitorError::ConfigError(format!(
            "Invalid log output: {} (must be 'stdout' or 'stderr')",
            output
        ))),
    }
}
