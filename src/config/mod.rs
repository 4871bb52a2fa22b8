//! Configuration management with environment variable support.

mod base;
mod secret;

pub use base::{ConfigError, KeyConfig};
pub use secret::generate_random_secret;
