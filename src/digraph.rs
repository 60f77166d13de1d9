//! Text normalization into digraphs.
//!
//! Plaintext is cleaned, folded onto the alphabet and split into letter
//! pairs. A doubled pair is broken with the filler letter and the second
//! letter of the pair is carried into the next digraph; an odd tail is
//! padded with the filler. Cipher text is only cleaned and paired.

use std::fmt;

use crate::alphabet::{self, FILLER};
use crate::error::{PlayfairError, Result};

/// An ordered pair of alphabet letters, the unit of substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digraph {
    pub first: char,
    pub second: char,
}

impl Digraph {
    pub fn new(first: char, second: char) -> Self {
        Digraph { first, second }
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// A sequence of digraphs ready for substitution.
///
/// Always holds an even number of letters by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreparedText {
    digraphs: Vec<Digraph>,
}

impl PreparedText {
    /// Splits plaintext into digraphs, applying the filler rules.
    ///
    /// Empty input (or input without letters) yields an empty sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair::PreparedText;
    ///
    /// assert_eq!(PreparedText::prepare("Hello").to_string(), "HELILO");
    /// assert_eq!(PreparedText::prepare("abc").to_string(), "ABCI");
    /// ```
    pub fn prepare(text: &str) -> Self {
        let letters = alphabet::clean(text);
        let mut digraphs = Vec::with_capacity(letters.len() / 2 + 1);
        let mut i = 0;
        while i < letters.len() {
            let first = letters[i];
            match letters.get(i + 1) {
                Some(&second) if second == first => {
                    digraphs.push(Digraph::new(first, FILLER));
                    i += 1;
                }
                Some(&second) => {
                    digraphs.push(Digraph::new(first, second));
                    i += 2;
                }
                None => {
                    digraphs.push(Digraph::new(first, FILLER));
                    i += 1;
                }
            }
        }
        PreparedText { digraphs }
    }

    /// Pairs cipher text as-is: cleaned and folded, no filler insertion.
    ///
    /// # Errors
    /// Returns [`PlayfairError::OddLengthCipherText`] when the cleaned
    /// letter count is odd.
    pub fn pair_cipher_text(cipher_text: &str) -> Result<Self> {
        let letters = alphabet::clean(cipher_text);
        if !letters.len().is_multiple_of(2) {
            return Err(PlayfairError::OddLengthCipherText {
                letters: letters.len(),
            });
        }
        let digraphs = letters
            .chunks_exact(2)
            .map(|pair| Digraph::new(pair[0], pair[1]))
            .collect();
        Ok(PreparedText { digraphs })
    }

    pub fn digraphs(&self) -> &[Digraph] {
        &self.digraphs
    }

    /// Number of digraphs.
    pub fn len(&self) -> usize {
        self.digraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digraphs.is_empty()
    }
}

impl fmt::Display for PreparedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digraph in &self.digraphs {
            write!(f, "{}", digraph)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PreparedText {
    type Item = &'a Digraph;
    type IntoIter = std::slice::Iter<'a, Digraph>;

    fn into_iter(self) -> Self::IntoIter {
        self.digraphs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &PreparedText) -> Vec<String> {
        text.digraphs().iter().map(Digraph::to_string).collect()
    }

    #[test]
    fn test_prepare_hello() {
        let prepared = PreparedText::prepare("HELLO");
        assert_eq!(pairs(&prepared), ["HE", "LI", "LO"]);
    }

    #[test]
    fn test_prepare_empty() {
        assert!(PreparedText::prepare("").is_empty());
        assert!(PreparedText::prepare(" 123 ,.").is_empty());
    }

    #[test]
    fn test_prepare_odd_tail() {
        assert_eq!(pairs(&PreparedText::prepare("a")), ["AI"]);
        assert_eq!(pairs(&PreparedText::prepare("abc")), ["AB", "CI"]);
    }

    #[test]
    fn test_prepare_strips_and_folds() {
        let prepared = PreparedText::prepare("Jump, over!");
        assert_eq!(prepared.to_string(), "IUMPOVER");
    }

    #[test]
    fn test_prepare_triple_letters() {
        assert_eq!(pairs(&PreparedText::prepare("AAA")), ["AI", "AI", "AI"]);
    }

    #[test]
    fn test_prepare_doubled_filler() {
        // A doubled filler letter still gets the filler inserted.
        assert_eq!(pairs(&PreparedText::prepare("II")), ["II", "II"]);
    }

    #[test]
    fn test_prepare_doubles_only_within_pair() {
        // "LL" straddling a pair boundary is not split.
        assert_eq!(pairs(&PreparedText::prepare("ALLO")), ["AL", "LO"]);
    }

    #[test]
    fn test_prepare_always_even() {
        for text in ["x", "xx", "xxx", "balloon", "Mississippi", "abcdefg"] {
            let prepared = PreparedText::prepare(text);
            assert_eq!(prepared.to_string().len() % 2, 0, "text {}", text);
        }
    }

    #[test]
    fn test_pair_cipher_text() {
        let paired = PreparedText::pair_cipher_text("cf-se pm").unwrap();
        assert_eq!(pairs(&paired), ["CF", "SE", "PM"]);
    }

    #[test]
    fn test_pair_cipher_text_keeps_doubles() {
        let paired = PreparedText::pair_cipher_text("LLOO").unwrap();
        assert_eq!(pairs(&paired), ["LL", "OO"]);
    }

    #[test]
    fn test_pair_cipher_text_odd() {
        assert_eq!(
            PreparedText::pair_cipher_text("A B C"),
            Err(PlayfairError::OddLengthCipherText { letters: 3 })
        );
    }
}
