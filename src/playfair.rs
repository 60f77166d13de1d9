//! Playfair: encrypt/decrypt composition over the engine components.
//!
//! Each call builds (or looks up) the key square, splits the text into
//! digraphs and substitutes them in order. A [`Playfair`] value is
//! immutable apart from its optional key square cache and can be shared
//! across threads.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::alphabet;
use crate::config::PlayfairConfig;
use crate::digraph::PreparedText;
use crate::error::{PlayfairError, Result};
use crate::key_square::{self, KeySquare};
use crate::metadata::{self, CipherResult};
use crate::random::key_generator::KeyGenerator;
use crate::substitution::{substitute_digraph, Direction};

/// Playfair cipher engine.
///
/// # Examples
///
/// ```
/// use playfair::Playfair;
///
/// let engine = Playfair::new();
/// let cipher = engine.encrypt("HELLO", "MONARCHY").unwrap();
/// assert_eq!(cipher, "CFSEPM");
/// assert_eq!(engine.decrypt(&cipher, "MONARCHY").unwrap(), "HELILO");
/// ```
#[derive(Debug, Default)]
pub struct Playfair {
    config: PlayfairConfig,
    cache: Option<RwLock<HashMap<String, Arc<KeySquare>>>>,
}

impl Playfair {
    /// Creates an engine with the default configuration (no cache).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine from `config`.
    pub fn with_config(config: PlayfairConfig) -> Self {
        let cache = config.cache_matrices.then(|| RwLock::new(HashMap::new()));
        Playfair { config, cache }
    }

    pub fn config(&self) -> &PlayfairConfig {
        &self.config
    }

    /// Encrypts `text` under `key`.
    ///
    /// Empty text yields an empty string without touching the key.
    ///
    /// # Errors
    /// - [`PlayfairError::EmptyKey`] if the key has no letters.
    /// - [`PlayfairError::NonLatinInput`] in strict mode.
    pub fn encrypt(&self, text: &str, key: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }
        self.check_inputs(text, key)?;

        let square = self.key_square(key)?;
        let prepared = PreparedText::prepare(text);
        let out = run(&square, &prepared, Direction::Forward)?;
        tracing::debug!(
            pairs = prepared.len(),
            text_len = text.len(),
            "encrypted text"
        );
        Ok(out)
    }

    /// Decrypts `cipher_text` under `key`.
    ///
    /// The input is cleaned and paired as-is; filler letters inserted
    /// during encryption are kept in the output.
    ///
    /// # Errors
    /// - [`PlayfairError::EmptyKey`] if the key has no letters.
    /// - [`PlayfairError::OddLengthCipherText`] if the cleaned input has an
    ///   odd letter count.
    /// - [`PlayfairError::NonLatinInput`] in strict mode.
    pub fn decrypt(&self, cipher_text: &str, key: &str) -> Result<String> {
        if cipher_text.is_empty() {
            return Ok(String::new());
        }
        self.check_inputs(cipher_text, key)?;

        let square = self.key_square(key)?;
        let paired = PreparedText::pair_cipher_text(cipher_text).inspect_err(|err| {
            tracing::warn!(%err, "rejected cipher text");
        })?;
        let out = run(&square, &paired, Direction::Backward)?;
        tracing::debug!(pairs = paired.len(), "decrypted text");
        Ok(out)
    }

    /// [`encrypt`](Self::encrypt) with elapsed time and completion timestamp.
    pub fn encrypt_with_metadata(&self, text: &str, key: &str) -> Result<CipherResult> {
        let result = metadata::timed(|| self.encrypt(text, key))?;
        tracing::debug!(elapsed_ms = result.execution_time_ms, "encrypt finished");
        Ok(result)
    }

    /// [`decrypt`](Self::decrypt) with elapsed time and completion timestamp.
    pub fn decrypt_with_metadata(&self, cipher_text: &str, key: &str) -> Result<CipherResult> {
        let result = metadata::timed(|| self.decrypt(cipher_text, key))?;
        tracing::debug!(elapsed_ms = result.execution_time_ms, "decrypt finished");
        Ok(result)
    }

    /// Generates a random key, applying the configured length bounds.
    pub fn generate_key(&self, length: i32) -> String {
        self.generate_key_with(&mut KeyGenerator::new(), length)
    }

    /// Same as [`generate_key`](Self::generate_key) with a caller-supplied
    /// generator, e.g. a seeded one.
    pub fn generate_key_with(&self, generator: &mut KeyGenerator, length: i32) -> String {
        generator.generate_exact(self.config.key_length(length))
    }

    /// Number of cached key squares (always 0 with the cache disabled).
    pub fn cached_squares(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| {
            cache.read().unwrap_or_else(PoisonError::into_inner).len()
        })
    }

    fn check_inputs(&self, text: &str, key: &str) -> Result<()> {
        if key.trim().is_empty() {
            tracing::warn!("rejected empty key");
            return Err(PlayfairError::EmptyKey);
        }
        if self.config.strict_latin {
            let offending =
                alphabet::first_non_latin(key).or_else(|| alphabet::first_non_latin(text));
            if let Some(ch) = offending {
                tracing::warn!("rejected non-Latin input");
                return Err(PlayfairError::NonLatinInput(ch));
            }
        }
        Ok(())
    }

    fn key_square(&self, key: &str) -> Result<Arc<KeySquare>> {
        self.lookup_square(key).inspect_err(|err| {
            tracing::warn!(%err, "rejected key");
        })
    }

    /// Builds the square for `key`, going through the cache when enabled.
    ///
    /// Cache slots are keyed by the minimal keyword, so keywords that
    /// build the same square share one slot.
    fn lookup_square(&self, key: &str) -> Result<Arc<KeySquare>> {
        let Some(cache) = &self.cache else {
            return KeySquare::build(key).map(Arc::new);
        };

        let canonical = key_square::canonical_keyword(key);
        if canonical.is_empty() {
            return Err(PlayfairError::EmptyKey);
        }
        let slot = key_square::minimal_keyword(&canonical);
        if let Some(square) = cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&slot)
        {
            tracing::trace!("key square cache hit");
            return Ok(Arc::clone(square));
        }

        let square = Arc::new(KeySquare::build(&canonical)?);
        let mut entries = cache.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() >= self.config.max_cached_squares && !entries.contains_key(&slot) {
            tracing::trace!(cached = entries.len(), "key square cache full");
            return Ok(square);
        }
        let square = Arc::clone(entries.entry(slot).or_insert(square));
        tracing::trace!(cached = entries.len(), "key square cached");
        Ok(square)
    }
}

/// Substitutes every digraph of `text` and concatenates the letters.
fn run(square: &KeySquare, text: &PreparedText, direction: Direction) -> Result<String> {
    let mut out = String::with_capacity(text.len() * 2);
    for &digraph in text {
        let sub = substitute_digraph(square, digraph, direction)?;
        out.push(sub.first);
        out.push(sub.second);
    }
    Ok(out)
}

/// Encrypts `text` under `key` with the default configuration.
///
/// # Examples
///
/// ```
/// assert_eq!(playfair::encrypt("HELLO", "MONARCHY").unwrap(), "CFSEPM");
/// ```
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    Playfair::new().encrypt(text, key)
}

/// Decrypts `cipher_text` under `key` with the default configuration.
pub fn decrypt(cipher_text: &str, key: &str) -> Result<String> {
    Playfair::new().decrypt(cipher_text, key)
}

/// Encrypts and reports elapsed time and completion timestamp.
pub fn encrypt_with_metadata(text: &str, key: &str) -> Result<CipherResult> {
    Playfair::new().encrypt_with_metadata(text, key)
}

/// Decrypts and reports elapsed time and completion timestamp.
pub fn decrypt_with_metadata(cipher_text: &str, key: &str) -> Result<CipherResult> {
    Playfair::new().decrypt_with_metadata(cipher_text, key)
}
