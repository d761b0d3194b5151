pub mod config;
pub mod delivery;
pub mod endpoint;
pub mod error;
pub mod http_client;
pub mod transport;
pub mod upcoming;

#[cfg(test)]
mod tests;

pub use error::{ClientError, ClientResult};
pub use http_client::HttpClient;

pub const MOVIEDB_API_HOSTNAME: &str = "api.themoviedb.org";
pub const MOVIEDB_IMAGE_HOSTNAME: &str = "image.tmdb.org";
pub const DEFAULT_API_BASE_URL: &str =
    const_format::concatcp!("https://", MOVIEDB_API_HOSTNAME, "/3");
pub const DEFAULT_IMAGE_BASE_URL: &str =
    const_format::concatcp!("https://", MOVIEDB_IMAGE_HOSTNAME, "/t/p/w500");
pub const DEFAULT_USER_AGENT: &str =
    const_format::concatcp!("moviedb/", env!("CARGO_PKG_VERSION"));
