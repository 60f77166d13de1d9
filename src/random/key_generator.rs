//! Random Playfair keyword generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::alphabet::ALPHABET;

/// Key length used when the requested length is not positive.
pub const DEFAULT_KEY_LENGTH: usize = 10;

/// Generates random keywords drawn uniformly from the 25-letter alphabet.
///
/// [`new`](Self::new) seeds from OS entropy, so every generator produces a
/// different sequence. [`with_seed`](Self::with_seed) is deterministic and
/// meant for tests and reproducible runs.
pub struct KeyGenerator {
    rng: StdRng,
    default_length: usize,
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyGenerator {
    /// Creates a generator seeded from OS entropy.
    pub fn new() -> Self {
        KeyGenerator {
            rng: StdRng::from_entropy(),
            default_length: DEFAULT_KEY_LENGTH,
        }
    }

    /// Creates a generator with a fixed, deterministic seed.
    ///
    /// # Parameters
    /// - `seed`: The seed value for deterministic output.
    pub fn with_seed(seed: u64) -> Self {
        KeyGenerator {
            rng: StdRng::seed_from_u64(seed),
            default_length: DEFAULT_KEY_LENGTH,
        }
    }

    /// Overrides the fallback length used for non-positive requests.
    ///
    /// A zero fallback is ignored and keeps the current value.
    pub fn default_length(mut self, length: usize) -> Self {
        if length > 0 {
            self.default_length = length;
        }
        self
    }

    /// Generates a keyword of `length` letters.
    ///
    /// If `length <= 0` the fallback length (10 unless overridden) is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair::KeyGenerator;
    ///
    /// let mut generator = KeyGenerator::with_seed(7);
    /// assert_eq!(generator.generate(20).len(), 20);
    /// assert_eq!(generator.generate(-5).len(), 10);
    /// ```
    pub fn generate(&mut self, length: i32) -> String {
        let length = if length <= 0 {
            self.default_length
        } else {
            length as usize
        };
        self.generate_exact(length)
    }

    /// Generates a keyword of exactly `length` letters, no fallback.
    pub fn generate_exact(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| ALPHABET[self.rng.gen_range(0..ALPHABET.len())])
            .collect()
    }
}

/// Generates a random keyword of `length` letters with a fresh generator.
///
/// Falls back to 10 letters when `length <= 0`.
pub fn generate_key(length: i32) -> String {
    KeyGenerator::new().generate(length)
}
