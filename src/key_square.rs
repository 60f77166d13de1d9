//! KeySquare: the 5×5 Playfair matrix derived from a keyword.
//!
//! The square is stored flat as 25 cells indexed by `row * 5 + col`,
//! together with a reverse lookup table from letter to position.

use std::fmt;

use crate::alphabet::{self, ALPHABET};
use crate::error::{PlayfairError, Result};

/// Side length of the key square.
pub const SIZE: usize = 5;

/// Number of cells in the key square.
const CELLS: usize = SIZE * SIZE;

/// A (row, column) location inside a [`KeySquare`], both in `0..5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    fn from_index(index: usize) -> Self {
        Position {
            row: index / SIZE,
            col: index % SIZE,
        }
    }

    /// Position one step to the right, wrapping around the row.
    pub fn right(self) -> Self {
        Position {
            row: self.row,
            col: (self.col + 1) % SIZE,
        }
    }

    /// Position one step to the left, wrapping around the row.
    pub fn left(self) -> Self {
        Position {
            row: self.row,
            col: (self.col + SIZE - 1) % SIZE,
        }
    }

    /// Position one step down, wrapping around the column.
    pub fn down(self) -> Self {
        Position {
            row: (self.row + 1) % SIZE,
            col: self.col,
        }
    }

    /// Position one step up, wrapping around the column.
    pub fn up(self) -> Self {
        Position {
            row: (self.row + SIZE - 1) % SIZE,
            col: self.col,
        }
    }
}

/// A permutation of the 25-letter alphabet laid out as a 5×5 grid.
///
/// Immutable once built. Two squares built from keywords with the same
/// letters (ignoring case, punctuation and `J`/`I`) are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    cells: [char; CELLS],
    positions: [Option<Position>; 26],
}

impl KeySquare {
    /// Builds the key square for `keyword`.
    ///
    /// Keyword letters are placed row-major in first-occurrence order,
    /// then the remaining alphabet letters follow in `A..Z` order.
    /// Non-letters in the keyword are ignored.
    ///
    /// # Errors
    /// Returns [`PlayfairError::EmptyKey`] if the keyword holds no letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair::KeySquare;
    ///
    /// let square = KeySquare::build("MONARCHY").unwrap();
    /// assert_eq!(square.row(1), ['C', 'H', 'Y', 'B', 'D']);
    /// assert!(KeySquare::build("  42 ").is_err());
    /// ```
    pub fn build(keyword: &str) -> Result<Self> {
        let letters = alphabet::clean(keyword);
        if letters.is_empty() {
            return Err(PlayfairError::EmptyKey);
        }

        let mut square = KeySquare {
            cells: ['\0'; CELLS],
            positions: [None; 26],
        };
        let mut next = 0;
        for ch in letters.into_iter().chain(ALPHABET) {
            if next == CELLS {
                break;
            }
            if square.place(ch, next) {
                next += 1;
            }
        }
        debug_assert_eq!(next, CELLS);
        Ok(square)
    }

    /// Places `ch` at cell `index` unless it is already in the square.
    fn place(&mut self, ch: char, index: usize) -> bool {
        let Some(slot) = alphabet::letter_index(ch) else {
            return false;
        };
        if self.positions[slot].is_some() {
            return false;
        }
        self.cells[index] = ch;
        self.positions[slot] = Some(Position::from_index(index));
        true
    }

    /// Returns the letter at `pos`.
    pub fn at(&self, pos: Position) -> char {
        self.cells[pos.row * SIZE + pos.col]
    }

    /// Returns the letter at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if `row` or `col` is not below 5.
    pub fn get(&self, row: usize, col: usize) -> char {
        assert!(row < SIZE && col < SIZE, "position out of the 5x5 square");
        self.cells[row * SIZE + col]
    }

    /// Returns the five letters of `row`.
    ///
    /// # Panics
    /// Panics if `row` is not below 5.
    pub fn row(&self, row: usize) -> [char; SIZE] {
        assert!(row < SIZE, "row out of the 5x5 square");
        let mut out = ['\0'; SIZE];
        out.copy_from_slice(&self.cells[row * SIZE..(row + 1) * SIZE]);
        out
    }

    /// Locates `ch` in the square.
    ///
    /// # Errors
    /// Returns [`PlayfairError::LetterNotInMatrix`] for anything outside
    /// the 25-letter alphabet, including `J` and lowercase letters.
    pub fn position(&self, ch: char) -> Result<Position> {
        alphabet::letter_index(ch)
            .and_then(|slot| self.positions[slot])
            .ok_or(PlayfairError::LetterNotInMatrix(ch))
    }

    /// All 25 letters in row-major order.
    pub fn letters(&self) -> &[char; CELLS] {
        &self.cells
    }
}

impl fmt::Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = self.row(row).iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Canonical form of a keyword: its distinct alphabet letters in order.
///
/// Keywords with the same canonical form build the same square.
pub(crate) fn canonical_keyword(keyword: &str) -> String {
    let mut seen = [false; 26];
    alphabet::clean(keyword)
        .into_iter()
        .filter(|&ch| match alphabet::letter_index(ch) {
            Some(slot) if !seen[slot] => {
                seen[slot] = true;
                true
            }
            _ => false,
        })
        .collect()
}

/// Shortest keyword building the same square as `canonical`.
///
/// A trailing letter that is the first alphabet letter not yet placed
/// would land in the same cell during the alphabet fill, so it is
/// dropped. `"A"`, `"AB"` and `"ABCDE"` all reduce to `""`.
pub(crate) fn minimal_keyword(canonical: &str) -> String {
    let mut letters: Vec<char> = canonical.chars().collect();
    while let Some(&last) = letters.last() {
        let prefix = &letters[..letters.len() - 1];
        let first_unused = ALPHABET.iter().find(|&&ch| !prefix.contains(&ch));
        if first_unused != Some(&last) {
            break;
        }
        letters.pop();
    }
    letters.into_iter().collect()
}
