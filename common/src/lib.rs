//! Shared leaf types for the movie database workspace.
//!
//! Nothing in here performs I/O. These are the small value types that both
//! the client core and the application layer agree on.
//!
//! ## Architecture
//!
//! - **common** (this crate): error locations, status codes, API keys
//! - **client-core**: typed HTTP client and the upcoming-movies feature
//! - **moviedb**: binary wiring config, logging and display together

pub mod api_key;
pub mod error;
pub mod http_status;

pub use api_key::ApiKey;
pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;

#[cfg(test)]
mod tests;
