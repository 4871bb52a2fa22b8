//! Secret generation utilities.

use crate::key::Secret;
use rand::rngs::OsRng;
use rand::Rng;

const SECRET_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*(-_=+)";
const SECRET_LENGTH: usize = 50;

/// Generate a random 50-character server secret.
///
/// Drawn from the operating system RNG. Intended for development setups
/// where no `SECRET_KEY` has been configured.
///
/// # Example
///
/// ```rust
/// use unique_key::generate_random_secret;
///
/// let secret = generate_random_secret();
/// assert_eq!(secret.expose().len(), 50);
/// ```
pub fn generate_random_secret() -> Secret {
    let mut rng = OsRng;
    let value: String = (0..SECRET_LENGTH)
        .map(|_| SECRET_CHARS[rng.gen_range(0..SECRET_CHARS.len())] as char)
        .collect();
    Secret::new(value)
}
