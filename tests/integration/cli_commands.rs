//! Integration tests for the docker-janitor binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_docker-janitor"))
        .env("HOME", home.as_os_str())
        .env_remove("JANITOR_LOG")
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_path_uses_home_directory() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["path"]);

    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(
        stdout(&output).trim_end(),
        temp_dir.path().join(".docker-janitor.yml").display().to_string()
    );
}

#[test]
fn test_defaults_prints_literal_template() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["defaults"]);

    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output), docker_janitor::SettingsStore::default_text());
}

#[test]
fn test_init_then_show_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join(".docker-janitor.yml");

    let output = run(temp_dir.path(), &["init"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert!(stdout(&output).starts_with("Created settings file"));
    assert_eq!(
        fs::read_to_string(&settings_path).unwrap(),
        docker_janitor::SettingsStore::default_text()
    );

    let again = run(temp_dir.path(), &["init"]);
    assert!(!again.status.success());
    assert!(stderr(&again).contains("--force"));

    let show = run(temp_dir.path(), &["show", "--format", "json"]);
    assert!(show.status.success(), "stderr={}", stderr(&show));
    let value: serde_json::Value = serde_json::from_str(&stdout(&show)).unwrap();
    assert_eq!(value["docker-janitor"]["safe_containers"][4], "mysql");
}

#[test]
fn test_show_with_explicit_config_applies_shallow_merge() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.yml");
    fs::write(&config_path, "docker-janitor:\n  safe_volumes: [pgdata]\n").unwrap();

    let output = run(
        temp_dir.path(),
        &["--config", config_path.to_str().unwrap(), "show"],
    );
    assert!(output.status.success(), "stderr={}", stderr(&output));

    let shown = docker_janitor::Settings::from_yaml_str(&stdout(&output)).unwrap();
    let lists = shown.safe_lists().unwrap().unwrap();
    assert_eq!(lists.safe_volumes, vec!["pgdata"]);
    assert!(lists.safe_containers.is_empty());
    assert!(lists.safe_images.is_empty());
}

#[test]
fn test_show_malformed_settings_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".docker-janitor.yml"), "[not, a, mapping]\n").unwrap();

    let output = run(temp_dir.path(), &["show"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("mapping"), "stderr={}", stderr(&output));
}

#[test]
fn test_check_fails_on_invalid_pattern() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".docker-janitor.yml"),
        "docker-janitor:\n  safe_containers: ['db$', '*oops']\n",
    )
    .unwrap();

    let output = run(temp_dir.path(), &["check"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("safe_containers[1] '*oops'"));
}

#[test]
fn test_check_passes_for_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["check"]);

    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert!(stdout(&output).contains("safe_containers: 5 pattern(s) ok"));
}

#[test]
fn test_verbose_logs_go_to_stderr_only() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(
        temp_dir.path(),
        &["--verbose", "--log-format", "json", "path"],
    );

    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output).lines().count(), 1);
    assert!(
        stderr(&output).contains("Resolved settings path"),
        "stderr={}",
        stderr(&output)
    );
}
