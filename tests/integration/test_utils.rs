//! Shared test utilities for integration tests
//!
//! Provides HOME isolation so path resolution can be tested without touching
//! the real home directory.

use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize HOME access across all tests
/// This prevents race conditions when tests run in parallel
static HOME_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Run `f` with HOME pointing at `<test_dir>/home`, restoring it afterwards.
///
/// # Example
/// ```
/// use tempfile::TempDir;
/// use crate::test_utils::with_home_env;
///
/// let test_dir = TempDir::new().unwrap();
/// with_home_env(&test_dir, |home| {
///     // HOME is set to `home`
/// });
/// // Environment automatically restored
/// ```
pub fn with_home_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce(PathBuf) -> R,
{
    let _guard = HOME_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let original_home = std::env::var("HOME").ok();

    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_home).unwrap();
    std::env::set_var("HOME", test_home.to_str().unwrap());

    let result = f(test_home);

    if let Some(home) = original_home {
        std::env::set_var("HOME", home);
    } else {
        std::env::remove_var("HOME");
    }

    result
}

/// Settings file path inside a temp dir, not yet created
pub fn settings_file(test_dir: &TempDir) -> PathBuf {
    test_dir.path().join(".docker-janitor.yml")
}
