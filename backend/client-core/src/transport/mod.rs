//! Transport seam between the typed client and the network.
//!
//! A [`Transport`] performs one byte-level request and reports a raw
//! [`TransportOutcome`]. It does no classification: status codes, missing
//! bodies and transport failures are passed through untouched so the client
//! can decide what they mean.
//!
//! # Exactly-once delivery
//!
//! The completion is a boxed `FnOnce`, moved into the returned task. Nothing
//! runs until [`TransportTask::resume`] consumes the task, which lets test
//! doubles control timing and keeps the completion from firing twice.

pub mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;

use common::HttpStatusCode;

use std::fmt;

use url::Url;

/// Callback receiving the raw outcome of one request.
pub type TransportCompletion = Box<dyn FnOnce(TransportOutcome) + Send + 'static>;

/// Transport-level failure (DNS, connect, TLS, body read).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    description: String,
}

impl TransportError {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// What the transport learned about the response, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMetadata {
    Http { status: HttpStatusCode },
    /// A response arrived but it is not a recognisable HTTP response.
    NonHttp,
}

/// Raw result of one network attempt. Any combination of fields may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportOutcome {
    pub body: Option<Vec<u8>>,
    pub response: Option<ResponseMetadata>,
    pub error: Option<TransportError>,
}

impl TransportOutcome {
    /// An HTTP response with the given status and body.
    pub fn http(status: impl Into<HttpStatusCode>, body: Option<Vec<u8>>) -> Self {
        Self {
            body,
            response: Some(ResponseMetadata::Http {
                status: status.into(),
            }),
            error: None,
        }
    }

    /// A failure before any response was received.
    pub fn failed(description: impl Into<String>) -> Self {
        Self {
            body: None,
            response: None,
            error: Some(TransportError::new(description)),
        }
    }

    pub fn with_error(mut self, description: impl Into<String>) -> Self {
        self.error = Some(TransportError::new(description));
        self
    }

    pub fn with_response(mut self, response: Option<ResponseMetadata>) -> Self {
        self.response = response;
        self
    }
}

/// A submitted but not yet started request.
pub trait TransportTask: Send {
    /// Start the request. The completion passed to
    /// [`Transport::perform_request`] fires exactly once afterwards.
    fn resume(self: Box<Self>);
}

/// Byte-level request executor.
pub trait Transport: Send + Sync {
    fn perform_request(&self, url: Url, completion: TransportCompletion) -> Box<dyn TransportTask>;
}
