//! Classified failures of a single typed request.
//!
//! Unlike the setup and config errors, these carry no `ErrorLocation`. They
//! are the terminal outcome handed to callers and are compared by value, so
//! two `BadRequest`s from different call sites must be equal.

use thiserror::Error as ThisError;

/// Diagnostic text for any non-2xx status without a dedicated variant.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected Error.";

/// Result delivered to a `request_data` completion.
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ClientError {
    /// The endpoint did not resolve to a usable address. No request was made.
    #[error("URL not found.")]
    UrlNotFound,

    /// Transport-level failure, or a status code with no dedicated variant.
    #[error("{0}")]
    Unknown(String),

    /// The transport succeeded but delivered no body.
    #[error("Broken data received.")]
    BrokenData,

    /// Response metadata missing or not an HTTP response.
    #[error("Invalid HTTP response.")]
    InvalidHttpResponse,

    /// 403
    #[error("Authentication required.")]
    AuthenticationRequired,

    /// 404
    #[error("Could not find host.")]
    CouldNotFindHost,

    /// 500
    #[error("Bad request.")]
    BadRequest,

    /// 2xx with a body that does not decode into the requested type.
    #[error("Could not parse object.")]
    CouldNotParseObject,
}

impl ClientError {
    pub fn unexpected() -> Self {
        ClientError::Unknown(UNEXPECTED_ERROR_MESSAGE.to_string())
    }
}
