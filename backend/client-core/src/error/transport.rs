use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failures while constructing a production transport.
#[derive(Debug, ThisError)]
pub enum TransportSetupError {
    #[error("No Runtime Error: {message} {location}")]
    NoRuntime {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP Client Build Error: {message} {location}")]
    Build {
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for TransportSetupError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        TransportSetupError::Build {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<tokio::runtime::TryCurrentError> for TransportSetupError {
    #[track_caller]
    fn from(error: tokio::runtime::TryCurrentError) -> Self {
        TransportSetupError::NoRuntime {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
