//! Outcome classification.
//!
//! The checks run in a fixed order and the first match wins:
//! transport error, missing body, missing/non-HTTP metadata, status code,
//! then decoding.

use crate::error::{ClientError, ClientResult};
use crate::transport::{ResponseMetadata, TransportOutcome};

use common::HttpStatusCode;

use log::{debug, trace};
use serde::de::DeserializeOwned;

/// Map a status code to its failure, or `None` for the 2xx band.
///
/// Only 403, 404 and 500 have dedicated variants. Every other non-2xx code,
/// including 401, 429, 503 and negative platform codes, is
/// `Unknown("Unexpected Error.")`.
pub fn classify_status(status: HttpStatusCode) -> Option<ClientError> {
    if status.is_success() {
        return None;
    }

    Some(match status {
        HttpStatusCode::FORBIDDEN => ClientError::AuthenticationRequired,
        HttpStatusCode::NOT_FOUND => ClientError::CouldNotFindHost,
        HttpStatusCode::INTERNAL_SERVER_ERROR => ClientError::BadRequest,
        _ => ClientError::unexpected(),
    })
}

/// Validate a raw outcome and hand back the body bytes of a 2xx response.
pub fn classify_outcome(outcome: TransportOutcome) -> ClientResult<Vec<u8>> {
    let TransportOutcome {
        body,
        response,
        error,
    } = outcome;

    if let Some(error) = error {
        return Err(ClientError::Unknown(error.description().to_owned()));
    }

    let Some(body) = body else {
        return Err(ClientError::BrokenData);
    };

    let Some(ResponseMetadata::Http { status }) = response else {
        return Err(ClientError::InvalidHttpResponse);
    };

    trace!("Classifying status {status}");
    if let Some(error) = classify_status(status) {
        return Err(error);
    }

    Ok(body)
}

/// Classify, then decode a 2xx body as JSON into `T`.
pub fn decode_outcome<T: DeserializeOwned>(outcome: TransportOutcome) -> ClientResult<T> {
    let body = classify_outcome(outcome)?;

    serde_json::from_slice(&body).map_err(|e| {
        debug!("Response body did not decode: {e}");
        ClientError::CouldNotParseObject
    })
}
