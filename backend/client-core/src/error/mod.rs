pub mod client;
pub mod config;
pub mod transport;

pub use client::{ClientError, ClientResult};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    TransportSetup(#[from] transport::TransportSetupError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
