//! Playfair digraph substitution cipher engine.
//!
//! Playfair enciphers letter pairs using a 5×5 key square derived from a
//! keyword, over the 25-letter Latin alphabet with `I` and `J` merged.
//! It is a historical cipher and offers no real security.
//!
//! # Architecture
//!
//! ```text
//! KeySquare     (keyword → 5×5 permutation of the alphabet)
//! PreparedText  (raw text → digraphs, filler letter `I`)
//!     ↓
//! substitute    (row / column / rectangle rule, Forward or Backward)
//!     ↓
//! Playfair      (encrypt / decrypt / *_with_metadata / generate_key)
//! ```
//!
//! All components are pure; a [`Playfair`] value is `Send + Sync` and
//! may cache key squares per keyword when configured to.
//!
//! # Examples
//!
//! ```
//! let cipher = playfair::encrypt("HELLO", "MONARCHY").unwrap();
//! assert_eq!(cipher, "CFSEPM");
//!
//! // Filler letters inserted on encryption survive decryption.
//! let plain = playfair::decrypt(&cipher, "MONARCHY").unwrap();
//! assert_eq!(plain, "HELILO");
//! ```
//!
//! Validation failures are returned, not raised:
//!
//! ```
//! use playfair::PlayfairError;
//!
//! assert_eq!(playfair::encrypt("HELLO", ""), Err(PlayfairError::EmptyKey));
//! assert_eq!(
//!     playfair::decrypt("ABC", "KEY"),
//!     Err(PlayfairError::OddLengthCipherText { letters: 3 })
//! );
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod info;
pub mod random;
pub mod validate;

mod digraph;
mod key_square;
mod metadata;
mod playfair;
mod substitution;

pub use config::PlayfairConfig;
pub use digraph::{Digraph, PreparedText};
pub use error::{PlayfairError, Result};
pub use key_square::{KeySquare, Position};
pub use metadata::CipherResult;
pub use playfair::{decrypt, decrypt_with_metadata, encrypt, encrypt_with_metadata, Playfair};
pub use random::key_generator::{generate_key, KeyGenerator};
pub use substitution::{substitute, substitute_digraph, Direction};
