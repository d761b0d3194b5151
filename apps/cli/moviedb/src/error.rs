use client_core::ClientError;
use client_core::error::config::ConfigError;
use client_core::error::transport::TransportSetupError;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Errors that end a `moviedb` run.
///
/// Library errors are flattened to a message plus the location where they
/// crossed into the application.
#[derive(Debug, Error)]
pub enum MovieDbError {
    /// Error from this App
    #[error("MovieDb Error: {message} {location}")]
    MovieDb {
        message: String,
        location: ErrorLocation,
    },

    /// Bad command line input
    #[error("Argument Error: {message} {location}")]
    Argument {
        message: String,
        location: ErrorLocation,
    },

    /// Config file, config directory or API key problem
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// The upcoming movies request failed
    #[error("Request Error: {message} {location}")]
    Request {
        message: String,
        location: ErrorLocation,
    },
}

impl From<ConfigError> for MovieDbError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        MovieDbError::Config {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<TransportSetupError> for MovieDbError {
    #[track_caller]
    fn from(error: TransportSetupError) -> Self {
        MovieDbError::MovieDb {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for MovieDbError {
    #[track_caller]
    fn from(error: ClientError) -> Self {
        MovieDbError::Request {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
