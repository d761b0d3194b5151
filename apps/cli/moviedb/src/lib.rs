// Library exports for testing
// The binary (main.rs) imports these as well

pub mod args;
pub mod display;
pub mod error;
pub mod logger;
pub mod startup;

#[cfg(test)]
mod tests;
