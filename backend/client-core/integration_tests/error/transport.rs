use client_core::error::transport::TransportSetupError;
use client_core::error::{ClientError, CoreError};

use common::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies `TransportSetupError::Build` includes message and location.
#[test]
fn given_build_error_when_formatted_then_includes_message_and_location() {
    let err = TransportSetupError::Build {
        message: "TLS backend unavailable".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let error_string = err.to_string();

    assert!(error_string.contains("HTTP Client Build Error"));
    assert!(error_string.contains("TLS backend unavailable"));
    assert!(error_string.contains("transport.rs"));
}

/// **VALUE**: Verifies the From conversion into CoreError keeps the variant.
#[test]
fn given_no_runtime_error_when_converted_then_core_error_wraps_it() {
    let err = TransportSetupError::NoRuntime {
        message: "must be called from the context of a Tokio runtime".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let core = CoreError::from(err);

    assert!(matches!(
        core,
        CoreError::TransportSetup(TransportSetupError::NoRuntime { .. })
    ));
}

/// **VALUE**: Verifies the user-facing text of every classified failure.
///
/// **WHY THIS MATTERS**: The presenter shows these strings verbatim.
///
/// **BUG THIS CATCHES**: Would catch an `#[error]` attribute edit that changes UI copy.
#[test]
fn given_classified_errors_when_formatted_then_match_display_copy() {
    let cases = [
        (ClientError::UrlNotFound, "URL not found."),
        (ClientError::Unknown("offline".to_string()), "offline"),
        (ClientError::BrokenData, "Broken data received."),
        (ClientError::InvalidHttpResponse, "Invalid HTTP response."),
        (ClientError::AuthenticationRequired, "Authentication required."),
        (ClientError::CouldNotFindHost, "Could not find host."),
        (ClientError::BadRequest, "Bad request."),
        (ClientError::CouldNotParseObject, "Could not parse object."),
        (ClientError::unexpected(), "Unexpected Error."),
    ];

    for (error, text) in cases {
        assert_eq!(error.to_string(), text);
    }
}

/// **VALUE**: Verifies classified errors compare by value.
#[test]
fn given_equal_variants_when_compared_then_are_equal() {
    assert_eq!(ClientError::BadRequest, ClientError::BadRequest.clone());
    assert_eq!(
        ClientError::Unknown("x".to_string()),
        ClientError::Unknown("x".to_string())
    );
    assert_ne!(
        ClientError::Unknown("x".to_string()),
        ClientError::Unknown("y".to_string())
    );
}
