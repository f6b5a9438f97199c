//! Integration tests for the docker-janitor settings store

mod cli_commands;
mod home_settings_path;
mod test_utils;
