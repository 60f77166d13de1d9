//! Error types for the Playfair cipher engine.

/// Result type alias using [`PlayfairError`].
pub type Result<T> = std::result::Result<T, PlayfairError>;

/// Errors produced by the Playfair cipher engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayfairError {
    /// Key is empty, whitespace-only, or contains no Latin letters.
    #[error("Key must contain at least one Latin letter")]
    EmptyKey,

    /// Cleaned cipher text has an odd number of letters.
    #[error("Cipher text must contain an even number of letters, got {letters}")]
    OddLengthCipherText { letters: usize },

    /// A letter outside the 25-letter alphabet reached the substitution step.
    #[error("Letter '{0}' is not present in the key square")]
    LetterNotInMatrix(char),

    /// Strict mode found a letter that is not an unaccented Latin letter.
    #[error("Only Latin letters are supported, found '{0}'")]
    NonLatinInput(char),
}

impl PlayfairError {
    /// Returns `true` when the error rejects caller input, `false` when it
    /// signals a broken internal invariant.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, PlayfairError::LetterNotInMatrix(_))
    }
}
