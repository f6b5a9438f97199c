//! CLI domain: parse, route, help, output, and presentation only.
//! Route handlers call into `SettingsStore`; formatting lives in presentation.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, ShowFormat};
pub use presentation::{format_check_result, format_init_summary, format_settings};
pub use route::RunContext;
