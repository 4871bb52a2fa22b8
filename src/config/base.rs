//! Key generation settings loaded from the environment.

use super::secret::generate_random_secret;
use crate::key::{KeyGenerator, Secret, DEFAULT_KEY_LENGTH, MIN_SECURE_LENGTH};
use thiserror::Error;
use tracing::warn;

const SECRET_VAR: &str = "SECRET_KEY";
const LENGTH_VAR: &str = "UNIQUE_KEY_LENGTH";

/// Error raised when the configuration cannot back a generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} is not set")]
    MissingSecret { var: &'static str },
    #[error("{var}={value} is below the minimum key length of {minimum}")]
    InvalidLength {
        var: &'static str,
        value: usize,
        minimum: usize,
    },
}

/// Settings for key generation.
///
/// Reads from environment variables with sensible defaults:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `SECRET_KEY` | (none) | Server secret mixed into every key |
/// | `UNIQUE_KEY_LENGTH` | `32` | Default key length, at least 16 |
///
/// # Example
///
/// ```rust
/// use unique_key::KeyConfig;
///
/// let config = KeyConfig::from_env();
/// let (secret, was_generated) = config.get_or_generate_secret();
///
/// if was_generated {
///     println!("Using a throwaway secret");
/// }
/// ```
#[derive(Clone, Debug)]
pub struct KeyConfig {
    /// Server secret (unset or empty means none)
    pub secret: Option<Secret>,
    /// Default key length (default: 32)
    pub key_length: usize,
}

impl KeyConfig {
    /// Create a new config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            secret: lookup(SECRET_VAR)
                .map(Secret::from)
                .filter(|s| !s.is_empty()),
            key_length: lookup(LENGTH_VAR)
                .and_then(|n| n.trim().parse().ok())
                .unwrap_or(DEFAULT_KEY_LENGTH),
        }
    }

    /// Get the configured secret, failing if none is set.
    pub fn require_secret(&self) -> Result<Secret, ConfigError> {
        self.secret
            .clone()
            .ok_or(ConfigError::MissingSecret { var: SECRET_VAR })
    }

    /// Get the configured key length, failing if it is too short to be safe.
    pub fn checked_key_length(&self) -> Result<usize, ConfigError> {
        if self.key_length < MIN_SECURE_LENGTH {
            return Err(ConfigError::InvalidLength {
                var: LENGTH_VAR,
                value: self.key_length,
                minimum: MIN_SECURE_LENGTH,
            });
        }
        Ok(self.key_length)
    }

    /// Get the configured secret or generate a new one.
    ///
    /// Returns a tuple of (secret, was_generated).
    pub fn get_or_generate_secret(&self) -> (Secret, bool) {
        match &self.secret {
            Some(secret) => (secret.clone(), false),
            None => {
                warn!("{SECRET_VAR} not set, generating a throwaway secret");
                (generate_random_secret(), true)
            }
        }
    }

    /// Build a production generator from the configured secret and length.
    pub fn generator(&self) -> Result<KeyGenerator, ConfigError> {
        let secret = self.require_secret()?;
        let length = self.checked_key_length()?;
        Ok(KeyGenerator::new(secret).with_default_length(length))
    }
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = KeyConfig::from_lookup(lookup(&[]));
        assert!(config.secret.is_none());
        assert_eq!(config.key_length, 32);
    }

    #[test]
    fn test_reads_values() {
        let config = KeyConfig::from_lookup(lookup(&[
            ("SECRET_KEY", "abc"),
            ("UNIQUE_KEY_LENGTH", " 20 "),
        ]));
        assert_eq!(config.secret, Some(Secret::new("abc")));
        assert_eq!(config.key_length, 20);
    }

    #[test]
    fn test_empty_secret_is_unset() {
        let config = KeyConfig::from_lookup(lookup(&[("SECRET_KEY", "")]));
        assert!(config.secret.is_none());
    }

    #[test]
    fn test_invalid_length_falls_back() {
        let config = KeyConfig::from_lookup(lookup(&[("UNIQUE_KEY_LENGTH", "lots")]));
        assert_eq!(config.key_length, DEFAULT_KEY_LENGTH);
    }

    #[test]
    fn test_require_secret_missing() {
        let config = KeyConfig::from_lookup(lookup(&[]));
        let err = config.require_secret().unwrap_err();
        assert_eq!(err, ConfigError::MissingSecret { var: "SECRET_KEY" });
        assert_eq!(err.to_string(), "SECRET_KEY is not set");
        assert!(config.generator().is_err());
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let config = KeyConfig::from_lookup(lookup(&[
            ("SECRET_KEY", "abc"),
            ("UNIQUE_KEY_LENGTH", "0"),
        ]));
        assert_eq!(config.key_length, 0);
        let err = config.generator().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidLength {
                var: "UNIQUE_KEY_LENGTH",
                value: 0,
                minimum: MIN_SECURE_LENGTH,
            }
        );
        assert_eq!(
            err.to_string(),
            "UNIQUE_KEY_LENGTH=0 is below the minimum key length of 16"
        );
    }

    #[test]
    fn test_length_floor_boundary() {
        let mut config = KeyConfig {
            secret: Some(Secret::new("abc")),
            key_length: MIN_SECURE_LENGTH - 1,
        };
        assert!(config.checked_key_length().is_err());
        assert!(config.generator().is_err());

        config.key_length = MIN_SECURE_LENGTH;
        assert_eq!(config.checked_key_length(), Ok(MIN_SECURE_LENGTH));
        assert_eq!(config.generator().unwrap().generate().len(), MIN_SECURE_LENGTH);
    }

    #[test]
    fn test_get_or_generate_secret_with_existing() {
        let config = KeyConfig {
            secret: Some(Secret::new("my-secret")),
            key_length: 32,
        };
        let (secret, generated) = config.get_or_generate_secret();
        assert_eq!(secret.expose(), "my-secret");
        assert!(!generated);
    }

    #[test]
    fn test_get_or_generate_secret_without_existing() {
        let config = KeyConfig {
            secret: None,
            key_length: 32,
        };
        let (secret, generated) = config.get_or_generate_secret();
        assert_eq!(secret.expose().len(), 50);
        assert!(generated);
    }

    #[test]
    fn test_generator_uses_configured_length() {
        let config = KeyConfig {
            secret: Some(Secret::new("abc")),
            key_length: 24,
        };
        let generator = config.generator().unwrap();
        assert_eq!(generator.default_length(), 24);
        assert_eq!(generator.generate().len(), 24);
    }
}
