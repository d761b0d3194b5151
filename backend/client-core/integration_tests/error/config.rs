use client_core::error::CoreError;
use client_core::error::config::ConfigError;

use common::ErrorLocation;

use std::io::{Error as IoError, ErrorKind};
use std::panic::Location;
use std::path::PathBuf;

/// **VALUE**: Verifies `ConfigError::ReadError` shows path, cause and location.
///
/// **WHY THIS MATTERS**: A config that cannot be read is usually a permissions problem.
/// The message has to say which file and why.
///
/// **BUG THIS CATCHES**: Would catch the path or io source being dropped from Display.
#[test]
fn given_read_error_when_formatted_then_includes_path_source_and_location() {
    // GIVEN: A read error with location
    let err = ConfigError::ReadError {
        location: ErrorLocation::from(Location::caller()),
        path: PathBuf::from("/etc/moviedb/config.json"),
        source: IoError::new(ErrorKind::PermissionDenied, "permission denied"),
    };

    // WHEN: Formatting
    let error_string = err.to_string();

    // THEN: Kind, path, cause and file location all present
    assert!(error_string.contains("Config Read Error"));
    assert!(error_string.contains("/etc/moviedb/config.json"));
    assert!(error_string.contains("permission denied"));
    assert!(error_string.contains("config.rs"));
}

/// **VALUE**: Verifies the io error is reachable through `source()`.
#[test]
fn given_write_error_when_source_requested_then_returns_io_error() {
    use std::error::Error;

    let err = ConfigError::WriteError {
        location: ErrorLocation::from(Location::caller()),
        path: PathBuf::from("config.json.tmp"),
        source: IoError::new(ErrorKind::StorageFull, "disk full"),
    };

    let source = err.source().expect("WriteError should expose its io source");
    assert!(source.to_string().contains("disk full"));
}

/// **VALUE**: Verifies CoreError forwards the inner message unchanged.
///
/// **BUG THIS CATCHES**: Would catch `#[error(transparent)]` being replaced by a wrapper
/// message that hides the location.
#[test]
fn given_validation_error_when_wrapped_in_core_error_then_display_is_transparent() {
    let inner = ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: "Invalid timeout: 0s (must be 1-300)".to_string(),
    };
    let expected = inner.to_string();

    let core: CoreError = inner.into();

    assert_eq!(core.to_string(), expected);
    assert!(matches!(core, CoreError::Config(_)));
}
