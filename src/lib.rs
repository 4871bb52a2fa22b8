//! Unique key generation for one-time confirmation and recovery links.
//!
//! This crate provides:
//!
//! - **key**: Secret-seeded key generator with injectable clock and RNG
//! - **config**: Secret and key length configuration from environment variables
//! - **bootstrap**: Tracing initialization utilities
//!
//! # Features
//!
//! - `config` - Configuration utilities (enabled by default)
//! - `bootstrap` - Tracing setup (enabled by default)
//! - `cli` - The `unique-key` command line tool
//! - `full` - All features
//!
//! # Example
//!
//! ```rust,ignore
//! use unique_key::{init_tracing, KeyConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     init_tracing("unique_key=info");
//!     let generator = KeyConfig::from_env().generator()?;
//!
//!     let confirm_url = format!("/accounts/confirm/{}/", generator.generate());
//!     Ok(())
//! }
//! ```

pub mod key;

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "bootstrap")]
pub mod bootstrap;

// Re-exports for convenience
pub use key::{
    derive_key, keys_match, Clock, FixedClock, FixedRandom, KeyError, KeyGenerator, RandomSource,
    Secret, SeededRandom, SystemClock, ThreadRandom, DEFAULT_KEY_LENGTH, DIGEST_HEX_LEN,
    MIN_SECURE_LENGTH,
};

#[cfg(feature = "config")]
pub use config::{generate_random_secret, ConfigError, KeyConfig};

#[cfg(feature = "bootstrap")]
pub use bootstrap::{init_tracing, try_init_tracing};
