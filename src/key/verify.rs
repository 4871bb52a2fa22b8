//! Comparison of stored keys against presented ones.

use subtle::ConstantTimeEq;

/// Check a presented key against the one that was issued.
///
/// Runs in time independent of where the keys differ. Keys of different
/// lengths never match.
///
/// ```rust
/// use unique_key::keys_match;
///
/// assert!(keys_match("22ede964", "22ede964"));
/// assert!(!keys_match("22ede964", "22ede965"));
/// ```
pub fn keys_match(expected: &str, presented: &str) -> bool {
    expected.as_bytes().ct_eq(presented.as_bytes()).into()
}
