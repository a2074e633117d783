//! Short key generation and validation.
//!
//! Keys are 6 characters drawn uniformly from the 62-character ASCII
//! alphanumeric alphabet. A single generator is created at startup and
//! shared by all requests; its RNG is seeded once from the operating system.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Alphabet used for short keys.
pub const KEY_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters in a short key.
pub const KEY_LENGTH: usize = 6;

/// Process-wide random short key generator.
#[derive(Debug)]
pub struct KeyGenerator {
    rng: Mutex<StdRng>,
}

impl KeyGenerator {
    /// Creates a generator seeded from the operating system entropy source.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a deterministic generator. Intended for tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Generates a new random short key.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let key = KeyGenerator::new().generate();
    /// assert_eq!(key.len(), 6);
    /// assert!(is_valid_key(&key));
    /// ```
    pub fn generate(&self) -> String {
        // A poisoned lock still holds a usable RNG.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        (0..KEY_LENGTH)
            .map(|_| KEY_CHARSET[rng.random_range(0..KEY_CHARSET.len())] as char)
            .collect()
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns true if `key` has the shape of a generated short key.
pub fn is_valid_key(key: &str) -> bool {
    key.len() == KEY_LENGTH && key.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_charset_has_62_unique_characters() {
        let unique: HashSet<u8> = KEY_CHARSET.iter().copied().collect();
        assert_eq!(KEY_CHARSET.len(), 62);
        assert_eq!(unique.len(), 62);
    }

    #[test]
    fn test_generate_has_correct_length() {
        let key = KeyGenerator::new().generate();
        assert_eq!(key.len(), KEY_LENGTH);
    }

    #[test]
    fn test_generate_uses_alphanumeric_characters() {
        let generator = KeyGenerator::new();
        for _ in 0..100 {
            let key = generator.generate();
            assert!(key.bytes().all(|b| KEY_CHARSET.contains(&b)), "{key}");
        }
    }

    #[test]
    fn test_rapid_successive_calls_differ() {
        let generator = KeyGenerator::new();
        let keys: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();

        // 62^6 possible keys; 1000 draws colliding more than a couple of times
        // would mean the RNG is being reset between calls.
        assert!(keys.len() >= 998);
    }

    #[test]
    fn test_seeded_generator_is_deterministic() {
        let a = KeyGenerator::from_seed(42);
        let b = KeyGenerator::from_seed(42);

        for _ in 0..10 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_is_valid_key() {
        assert!(is_valid_key("abc123"));
        assert!(is_valid_key("ZZZZZZ"));
        assert!(!is_valid_key("abc12"));
        assert!(!is_valid_key("abc1234"));
        assert!(!is_valid_key("abc-12"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("ábc123"));
    }
}
