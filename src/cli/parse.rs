//! CLI parse: clap types for docker-janitor. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// docker-janitor - manage the patterns that protect containers, images and volumes
#[derive(Parser)]
#[command(name = "docker-janitor")]
#[command(about = "Manage docker-janitor protection settings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file path (default: ~/.docker-janitor.yml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the settings file path
    Path,
    /// Print the effective settings (defaults merged with the settings file)
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = ShowFormat::Yaml)]
        format: ShowFormat,
        /// Show the built-in defaults instead of the effective settings
        #[arg(long)]
        defaults: bool,
    },
    /// Print the default settings template
    Defaults,
    /// Write the default settings template to the settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
    /// Check that every protection pattern is a valid regular expression
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    Yaml,
    Json,
}
