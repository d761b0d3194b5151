mod config;
mod transport;
