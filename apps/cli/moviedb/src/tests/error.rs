// Unit tests for MovieDbError conversions

use crate::error::MovieDbError;

use client_core::ClientError;
use client_core::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies classified request failures keep their user-facing text.
///
/// **BUG THIS CATCHES**: Would catch the conversion using Debug instead of Display.
#[test]
fn given_client_error_when_converted_then_request_variant_keeps_message() {
    let err: MovieDbError = ClientError::AuthenticationRequired.into();

    match &err {
        MovieDbError::Request { message, .. } => {
            assert_eq!(message, "Authentication required.")
        }
        other => panic!("Expected Request, got {other:?}"),
    }
    assert!(err.to_string().starts_with("Request Error: Authentication required."));
}

/// **VALUE**: Verifies config failures map to the Config variant with the inner reason.
#[test]
fn given_config_error_when_converted_then_config_variant_includes_reason() {
    let inner = ConfigError::MissingApiKey {
        location: ErrorLocation::from(Location::caller()),
        reason: "MOVIEDB_API_KEY: environment variable not found".to_string(),
    };

    let err = MovieDbError::from(inner);

    assert!(matches!(err, MovieDbError::Config { .. }));
    assert!(err.to_string().contains("MOVIEDB_API_KEY"));
}

/// **VALUE**: Verifies the conversion records where it happened.
///
/// **WHY THIS MATTERS**: `#[track_caller]` on `From` points the location at the `?`
/// site, which is what a developer needs when reading the log.
#[test]
fn given_client_error_when_converted_with_question_mark_then_location_is_this_file() {
    fn fails() -> Result<(), MovieDbError> {
        Err::<(), _>(ClientError::BrokenData)?;
        Ok(())
    }

    let err = fails().unwrap_err();

    assert!(err.to_string().contains("error.rs"));
}
