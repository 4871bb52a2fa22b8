//! Unique key generation for one-time confirmation and recovery links.
//!
//! A key is the truncated lowercase hex SHA-256 digest of the server secret,
//! the current time and a fresh random sample. Both the clock and the random
//! source are injected, so a generator built from [`FixedClock`] and
//! [`FixedRandom`] is fully deterministic.

mod secret;
mod source;
mod verify;

pub use secret::Secret;
pub use source::{
    Clock, FixedClock, FixedRandom, RandomSource, SeededRandom, SystemClock, ThreadRandom,
};
pub use verify::keys_match;

use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::{debug, warn};

/// Length of a key when the caller does not ask for a specific one.
pub const DEFAULT_KEY_LENGTH: usize = 32;

/// Number of hex characters in a full SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Shortest key accepted by [`KeyGenerator::generate_checked`].
pub const MIN_SECURE_LENGTH: usize = 16;

/// Error returned by the length-checked generation path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The requested key is too short to resist collisions.
    #[error("requested key length {requested} is below the minimum of {minimum}")]
    TooShort { requested: usize, minimum: usize },
}

/// Derive a key from explicit inputs.
///
/// The digest input is the secret followed by `timestamp` and `sample`, each
/// rendered with 16 fractional digits. The result holds the first
/// `max_length` hex characters of the digest, or all 64 if `max_length` is
/// larger.
///
/// # Example
///
/// ```rust
/// use unique_key::derive_key;
///
/// let key = derive_key("abc", 0.0, 0.0, 8);
/// assert_eq!(key, "22ede964");
/// ```
pub fn derive_key(secret: &str, timestamp: f64, sample: f64, max_length: usize) -> String {
    let material = format!("{secret}{timestamp:.16}{sample:.16}");
    let mut key = hex::encode(Sha256::digest(material.as_bytes()));
    key.truncate(max_length);
    key
}

/// Generator for practically unique, unpredictable keys.
///
/// # Example
///
/// ```rust
/// use unique_key::{FixedClock, FixedRandom, KeyGenerator, Secret};
///
/// let generator = KeyGenerator::with_sources(
///     Secret::new("abc"),
///     FixedClock(0.0),
///     FixedRandom(0.0),
/// );
/// assert_eq!(generator.generate_unique_key(8), "22ede964");
/// ```
#[derive(Debug)]
pub struct KeyGenerator<C = SystemClock, R = ThreadRandom> {
    secret: Secret,
    clock: C,
    random: R,
    default_length: usize,
    // Set once the short-length warning has been logged.
    short_warned: AtomicBool,
}

impl<C: Clone, R: Clone> Clone for KeyGenerator<C, R> {
    fn clone(&self) -> Self {
        Self {
            secret: self.secret.clone(),
            clock: self.clock.clone(),
            random: self.random.clone(),
            default_length: self.default_length,
            short_warned: AtomicBool::new(self.short_warned.load(Ordering::Relaxed)),
        }
    }
}

impl KeyGenerator {
    /// Create a generator reading the system clock and the thread-local RNG.
    pub fn new(secret: Secret) -> Self {
        Self::with_sources(secret, SystemClock, ThreadRandom)
    }
}

impl<C: Clock, R: RandomSource> KeyGenerator<C, R> {
    /// Create a generator with explicit time and randomness sources.
    pub fn with_sources(secret: Secret, clock: C, random: R) -> Self {
        Self {
            secret,
            clock,
            random,
            default_length: DEFAULT_KEY_LENGTH,
            short_warned: AtomicBool::new(false),
        }
    }

    /// Set the length used by [`generate`](Self::generate).
    pub fn with_default_length(mut self, length: usize) -> Self {
        self.default_length = length;
        self
    }

    pub fn default_length(&self) -> usize {
        self.default_length
    }

    /// Generate a key of at most `max_length` hex characters.
    ///
    /// Never fails. Lengths above [`DIGEST_HEX_LEN`] return the whole digest
    /// and a length of zero returns an empty string. The first request below
    /// [`MIN_SECURE_LENGTH`] logs a warning; later ones do not.
    pub fn generate_unique_key(&self, max_length: usize) -> String {
        if max_length < MIN_SECURE_LENGTH && !self.short_warned.swap(true, Ordering::Relaxed) {
            warn!(
                max_length,
                minimum = MIN_SECURE_LENGTH,
                "unique key requested below the secure length"
            );
        }
        let timestamp = self.clock.now();
        let sample = self.random.sample();
        debug!(max_length, "generating unique key");
        derive_key(self.secret.expose(), timestamp, sample, max_length)
    }

    /// Generate a key using the generator's default length.
    pub fn generate(&self) -> String {
        self.generate_unique_key(self.default_length)
    }

    /// Like [`generate_unique_key`](Self::generate_unique_key), but refuses
    /// lengths below [`MIN_SECURE_LENGTH`].
    pub fn generate_checked(&self, max_length: usize) -> Result<String, KeyError> {
        if max_length < MIN_SECURE_LENGTH {
            return Err(KeyError::TooShort {
                requested: max_length,
                minimum: MIN_SECURE_LENGTH,
            });
        }
        Ok(self.generate_unique_key(max_length))
    }
}
