//! Built-in default settings template.

use super::Settings;

const DEFAULT_SETTINGS_YAML: &str = r#"---
docker-janitor:
  # safe_containers is a list of regular expressions that container
  # names are checked against to decide whether they are protected.
  # Use it to keep data-only containers (for example) from being
  # deleted by accident. A container is safe when any pattern
  # matches anywhere in its name; anchor with ^ and $ to be strict.
  safe_containers:
    - db$
    - postgres
    - mongo
    - dynamo
    - mysql
  safe_images:
    - a-sha-of-some-sort
  safe_volumes:
    - a-sha-of-some-sort
"#;

/// The default settings file, comments included.
pub fn default_text() -> &'static str {
    DEFAULT_SETTINGS_YAML
}

/// The default settings, parsed fresh on every call.
pub fn default_settings() -> Settings {
    Settings::from_yaml_str(DEFAULT_SETTINGS_YAML)
        .expect("embedded default settings must be a valid YAML mapping")
}
