mod config;
mod error;
mod http_client;
mod upcoming;
