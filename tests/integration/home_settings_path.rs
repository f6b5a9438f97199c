//! Integration tests for resolving and using ~/.docker-janitor.yml

use super::test_utils::with_home_env;
use docker_janitor::SettingsStore;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_path_is_in_home() {
    let test_dir = TempDir::new().unwrap();
    with_home_env(&test_dir, |home| {
        let path = SettingsStore::config_path().unwrap();
        assert_eq!(path, home.join(".docker-janitor.yml"));
        assert!(!path.exists(), "config_path must not create the file");
    });
}

#[test]
fn test_default_path_operations_use_home() {
    let test_dir = TempDir::new().unwrap();
    with_home_env(&test_dir, |home| {
        let path = home.join(".docker-janitor.yml");

        assert_eq!(
            SettingsStore::load().unwrap(),
            SettingsStore::default_settings()
        );

        SettingsStore::write_defaults().unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            SettingsStore::default_text()
        );

        SettingsStore::write("docker-janitor:\n  safe_images: [img]\n").unwrap();
        let settings = SettingsStore::load().unwrap();
        let lists = settings.safe_lists().unwrap().unwrap();
        assert_eq!(lists.safe_images, vec!["img"]);
        assert!(lists.safe_containers.is_empty());
    });
}
