//! Input checks for text and keys.
//!
//! These mirror what a client does before calling the engine: drop
//! non-letters and refuse letters outside the Latin alphabet.

use crate::alphabet;
use crate::error::{PlayfairError, Result};

/// Returns the letters of `input` (case preserved), rejecting non-Latin
/// letters. Text without any letter yields an empty string.
pub fn check_text(input: &str) -> Result<String> {
    if let Some(ch) = alphabet::first_non_latin(input) {
        return Err(PlayfairError::NonLatinInput(ch));
    }
    Ok(input.chars().filter(char::is_ascii_alphabetic).collect())
}

/// Like [`check_text`], but a key without letters is an error.
pub fn check_key(input: &str) -> Result<String> {
    let cleaned = check_text(input)?;
    if cleaned.is_empty() {
        return Err(PlayfairError::EmptyKey);
    }
    Ok(cleaned)
}
