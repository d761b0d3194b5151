use client_core::config::{API_KEY_ENV, CONFIG_DIR_ENV, config_dir, load_api_key};
use client_core::error::config::ConfigError;

use std::path::PathBuf;

use serial_test::serial;

// These tests mutate process environment variables, so they run serially.

fn set_env(key: &str, value: &str) {
    // SAFETY: guarded by #[serial]; no other test thread touches the environment.
    unsafe { std::env::set_var(key, value) };
}

fn remove_env(key: &str) {
    // SAFETY: guarded by #[serial]; no other test thread touches the environment.
    unsafe { std::env::remove_var(key) };
}

/// **VALUE**: Verifies a real key is loaded and stays redacted.
#[test]
#[serial]
fn given_key_in_environment_when_load_api_key_then_returns_redacted_key() {
    set_env(API_KEY_ENV, "0123456789abcdef");

    let key = load_api_key().unwrap();

    assert_eq!(key.expose(), "0123456789abcdef");
    assert!(!format!("{key:?}").contains("0123456789abcdef"));
    remove_env(API_KEY_ENV);
}

/// **VALUE**: Verifies a missing key is a MissingApiKey error.
///
/// **WHY THIS MATTERS**: Without a key every request would come back as
/// AuthenticationRequired. Failing at startup gives a clearer message.
#[test]
#[serial]
fn given_no_key_when_load_api_key_then_returns_missing_api_key() {
    remove_env(API_KEY_ENV);

    let result = load_api_key();

    assert!(matches!(result, Err(ConfigError::MissingApiKey { .. })));
}

/// **VALUE**: Verifies template placeholders are rejected like missing keys.
#[test]
#[serial]
fn given_placeholder_key_when_load_api_key_then_returns_missing_api_key() {
    set_env(API_KEY_ENV, "changeme");

    let result = load_api_key();

    assert!(matches!(result, Err(ConfigError::MissingApiKey { .. })));
    remove_env(API_KEY_ENV);
}

/// **VALUE**: Verifies the config dir override wins over the platform directory.
#[test]
#[serial]
fn given_config_dir_override_when_config_dir_then_returns_override() {
    set_env(CONFIG_DIR_ENV, "/tmp/moviedb-test-config");

    let dir = config_dir().unwrap();

    assert_eq!(dir, PathBuf::from("/tmp/moviedb-test-config"));
    remove_env(CONFIG_DIR_ENV);
}

/// **VALUE**: Verifies a rejected key reports where the check failed, not who called it.
///
/// **WHY THIS MATTERS**: The application wraps this error with its own call-site
/// location. If both point at the same line the message repeats itself and the
/// rejection site is lost.
///
/// **BUG THIS CATCHES**: Would catch `load_api_key` capturing its caller's location.
#[test]
#[serial]
fn given_placeholder_key_when_load_api_key_then_location_points_into_config_module() {
    set_env(API_KEY_ENV, "changeme");

    let result = load_api_key();

    match result {
        Err(ConfigError::MissingApiKey { location, .. }) => {
            assert!(
                location.file.ends_with("mod.rs"),
                "Expected the config module, got {}",
                location.file
            );
            assert!(!location.file.contains("integration_tests"));
        }
        other => panic!("Expected MissingApiKey, got {other:?}"),
    }
    remove_env(API_KEY_ENV);
}
