//! Human-readable description of the cipher with a worked example.

use serde::Serialize;

use crate::playfair;

/// Keyword of the worked example.
const EXAMPLE_KEY: &str = "MONARCHY";

/// Plaintext of the worked example.
const EXAMPLE_PLAINTEXT: &str = "HELLO";

/// Description of the algorithm, suitable for an info endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub steps: [&'static str; 4],
    pub example: WorkedExample,
}

/// Worked example; the cipher text comes from the engine itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkedExample {
    pub key: &'static str,
    pub plain_text: &'static str,
    pub cipher_text: String,
}

/// Describes the Playfair algorithm as implemented by this crate.
pub fn algorithm_info() -> AlgorithmInfo {
    let cipher_text = playfair::encrypt(EXAMPLE_PLAINTEXT, EXAMPLE_KEY)
        .expect("worked example uses constant letter inputs");
    AlgorithmInfo {
        title: "Playfair cipher",
        description: "Digraph substitution cipher over a 5x5 key square built from a keyword; \
                      I and J share a cell.",
        steps: [
            "Key square: write the distinct keyword letters row by row, then the remaining \
             letters A..Z without J.",
            "Text preparation: drop non-letters, uppercase, replace J with I and split into \
             pairs. A doubled pair becomes the letter plus I and the second letter starts the \
             next pair; an odd tail is padded with I.",
            "Encryption: letters in the same row shift right, letters in the same column shift \
             down (both wrapping); otherwise each letter takes the corner in its own row and \
             the other letter's column.",
            "Decryption: the same rules with shifts left and up; filler letters stay in the \
             output.",
        ],
        example: WorkedExample {
            key: EXAMPLE_KEY,
            plain_text: EXAMPLE_PLAINTEXT,
            cipher_text,
        },
    }
}
