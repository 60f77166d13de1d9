//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::random::key_generator::DEFAULT_KEY_LENGTH;

/// Default upper bound on cached key squares.
pub const DEFAULT_MAX_CACHED_SQUARES: usize = 1024;

/// Longest key the configured facade will generate.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 100;

/// Settings for a [`Playfair`](crate::Playfair) instance.
///
/// Every field has a default, so partial documents deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfairConfig {
    /// Key length used when a non-positive length is requested.
    pub default_key_length: usize,
    /// Requests above this length fall back to `default_key_length`.
    pub max_key_length: usize,
    /// Reject non-ASCII letters instead of dropping them.
    pub strict_latin: bool,
    /// Cache key squares per keyword.
    pub cache_matrices: bool,
    /// Once the cache holds this many squares, new ones are built per call
    /// and not stored.
    pub max_cached_squares: usize,
}

impl Default for PlayfairConfig {
    fn default() -> Self {
        Self {
            default_key_length: DEFAULT_KEY_LENGTH,
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            strict_latin: false,
            cache_matrices: false,
            max_cached_squares: DEFAULT_MAX_CACHED_SQUARES,
        }
    }
}

impl PlayfairConfig {
    /// Resolves a requested key length against the configured bounds.
    pub fn key_length(&self, requested: i32) -> usize {
        let fallback = self.default_key_length.max(1);
        match usize::try_from(requested) {
            Ok(len) if len > 0 && len <= self.max_key_length => len,
            _ => fallback,
        }
    }
}
