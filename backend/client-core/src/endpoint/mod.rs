//! Endpoint descriptors.
//!
//! An [`Endpoint`] only knows how to produce an address string. Whether that
//! string is usable is decided by [`Endpoint::resolve`], which the client runs
//! before any network work. An unusable address is an expected outcome
//! ([`ClientError::UrlNotFound`]), not a programming error.

pub mod moviedb;

pub use moviedb::{MovieDbEndpoint, MovieDbRoute};

use crate::error::{ClientError, ClientResult};

use log::trace;
use url::Url;

const SUPPORTED_SCHEMES: [&str; 2] = ["http", "https"];

/// Something the client can be asked to call.
pub trait Endpoint {
    /// The raw target address. May be empty or malformed.
    fn endpoint(&self) -> String;

    /// Resolve [`endpoint`](Endpoint::endpoint) into a structured address.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UrlNotFound`] for blank strings, strings that do
    /// not parse as an absolute URL, and schemes other than http/https.
    fn resolve(&self) -> ClientResult<Url> {
        resolve_address(&self.endpoint())
    }
}

impl Endpoint for str {
    fn endpoint(&self) -> String {
        self.to_owned()
    }
}

impl Endpoint for String {
    fn endpoint(&self) -> String {
        self.clone()
    }
}

impl Endpoint for Url {
    fn endpoint(&self) -> String {
        self.as_str().to_owned()
    }
}

pub(crate) fn resolve_address(address: &str) -> ClientResult<Url> {
    if address.trim().is_empty() {
        trace!("Endpoint address is blank");
        return Err(ClientError::UrlNotFound);
    }

    let url = Url::parse(address).map_err(|e| {
        trace!("Endpoint address failed to parse: {e}");
        ClientError::UrlNotFound
    })?;

    if !SUPPORTED_SCHEMES.contains(&url.scheme()) {
        trace!("Endpoint scheme '{}' is not supported", url.scheme());
        return Err(ClientError::UrlNotFound);
    }

    Ok(url)
}

/// Address without its query string, for log output (queries carry the API key).
pub(crate) fn redacted(url: &Url) -> String {
    let mut shown = url.clone();
    shown.set_query(None);
    shown.to_string()
}
