//! Access key generation
//!
//! Keys are 16 characters, each drawn uniformly and independently from the
//! 26 uppercase Latin letters. Uniqueness is not checked here; the store
//! regenerates on collision.

use rand::Rng;

/// Characters an access key is made of
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of characters in an access key
pub const KEY_LENGTH: usize = 16;

/// Source of candidate access keys
pub trait KeyGenerator: Send + Sync {
    /// Produce one candidate key
    fn generate(&self) -> String;
}

/// Generator backed by the thread-local CSPRNG
///
/// `rand::rng()` is a ChaCha-based generator seeded and periodically
/// reseeded from the operating system, suitable for security tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureKeyGenerator;

impl KeyGenerator for SecureKeyGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..KEY_LENGTH)
            .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
            .collect()
    }
}

/// Generate one candidate access key with [`SecureKeyGenerator`]
#[must_use]
pub fn generate_key() -> String {
    SecureKeyGenerator.generate()
}

/// Check that `key` is exactly 16 uppercase Latin letters
#[must_use]
pub fn is_well_formed(key: &str) -> bool {
    key.len() == KEY_LENGTH && key.bytes().all(|b| b.is_ascii_uppercase())
}
