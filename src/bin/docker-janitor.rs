//! docker-janitor CLI Binary
//!
//! Command-line interface for inspecting and writing the janitor's settings file.

use clap::Parser;
use docker_janitor::cli::{map_error, Cli, RunContext};
use docker_janitor::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = match build_logging_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read logging configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("docker-janitor starting");

    let context = match RunContext::new(cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error resolving settings path: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and environment.
/// Precedence: CLI flags override `JANITOR_LOG_*` override defaults.
fn build_logging_config(cli: &Cli) -> Result<LoggingConfig, docker_janitor::error::JanitorError> {
    let mut config = LoggingConfig::from_env()?;

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    Ok(config)
}
