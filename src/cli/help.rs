//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name string for log events (e.g. "show", "init").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Path => "path",
        Commands::Show { .. } => "show",
        Commands::Defaults => "defaults",
        Commands::Init { .. } => "init",
        Commands::Check => "check",
    }
}
