//! Pairwise geometric substitution on a key square.

use crate::digraph::Digraph;
use crate::error::Result;
use crate::key_square::{KeySquare, Position};

/// Direction of a substitution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Encryption: shift right along rows, down along columns.
    Forward,
    /// Decryption: shift left along rows, up along columns.
    Backward,
}

/// Substitutes the letter pair (`a`, `b`) using `square`.
///
/// - Same row: each letter moves one column right (`Forward`) or left
///   (`Backward`), wrapping around.
/// - Same column: each letter moves one row down or up, wrapping around.
/// - Otherwise: each letter takes the letter in its own row and the other
///   letter's column. This case is its own inverse.
///
/// # Errors
/// Returns [`PlayfairError::LetterNotInMatrix`](crate::PlayfairError::LetterNotInMatrix)
/// if either letter is outside the alphabet.
///
/// # Examples
///
/// ```
/// use playfair::{substitute, Direction, KeySquare};
///
/// let square = KeySquare::build("MONARCHY").unwrap();
/// let out = substitute(&square, 'H', 'E', Direction::Forward).unwrap();
/// assert_eq!(out.to_string(), "CF");
/// ```
pub fn substitute(square: &KeySquare, a: char, b: char, direction: Direction) -> Result<Digraph> {
    let pos_a = square.position(a)?;
    let pos_b = square.position(b)?;

    let step: fn(Position) -> Position = if pos_a.row == pos_b.row {
        match direction {
            Direction::Forward => Position::right,
            Direction::Backward => Position::left,
        }
    } else if pos_a.col == pos_b.col {
        match direction {
            Direction::Forward => Position::down,
            Direction::Backward => Position::up,
        }
    } else {
        let first = Position {
            row: pos_a.row,
            col: pos_b.col,
        };
        let second = Position {
            row: pos_b.row,
            col: pos_a.col,
        };
        return Ok(Digraph::new(square.at(first), square.at(second)));
    };

    Ok(Digraph::new(square.at(step(pos_a)), square.at(step(pos_b))))
}

/// Substitutes one digraph.
pub fn substitute_digraph(
    square: &KeySquare,
    digraph: Digraph,
    direction: Direction,
) -> Result<Digraph> {
    substitute(square, digraph.first, digraph.second, direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlayfairError;

    // M O N A R
    // C H Y B D
    // E F G I K
    // L P Q S T
    // U V W X Z
    fn monarchy() -> KeySquare {
        KeySquare::build("MONARCHY").unwrap()
    }

    fn run(square: &KeySquare, pair: &str, direction: Direction) -> String {
        let mut chars = pair.chars();
        let a = chars.next().unwrap();
        let b = chars.next().unwrap();
        substitute(square, a, b, direction).unwrap().to_string()
    }

    #[test]
    fn test_same_row_forward_wraps() {
        let sq = monarchy();
        assert_eq!(run(&sq, "AR", Direction::Forward), "RM");
        assert_eq!(run(&sq, "CH", Direction::Forward), "HY");
    }

    #[test]
    fn test_same_row_backward_wraps() {
        let sq = monarchy();
        assert_eq!(run(&sq, "RM", Direction::Backward), "AR");
        assert_eq!(run(&sq, "MO", Direction::Backward), "RM");
    }

    #[test]
    fn test_same_column_forward_wraps() {
        let sq = monarchy();
        assert_eq!(run(&sq, "MU", Direction::Forward), "CM");
        assert_eq!(run(&sq, "OF", Direction::Forward), "HP");
    }

    #[test]
    fn test_same_column_backward_wraps() {
        let sq = monarchy();
        assert_eq!(run(&sq, "CM", Direction::Backward), "MU");
        assert_eq!(run(&sq, "HP", Direction::Backward), "OF");
    }

    #[test]
    fn test_rectangle() {
        let sq = monarchy();
        assert_eq!(run(&sq, "HE", Direction::Forward), "CF");
        assert_eq!(run(&sq, "LI", Direction::Forward), "SE");
        assert_eq!(run(&sq, "LO", Direction::Forward), "PM");
    }

    #[test]
    fn test_rectangle_is_direction_symmetric() {
        let sq = monarchy();
        for pair in ["HE", "LI", "LO", "MZ", "DU"] {
            assert_eq!(
                run(&sq, pair, Direction::Forward),
                run(&sq, pair, Direction::Backward),
                "pair {}",
                pair
            );
        }
    }

    #[test]
    fn test_backward_inverts_forward_everywhere() {
        let sq = monarchy();
        for &a in sq.letters() {
            for &b in sq.letters() {
                if a == b {
                    continue;
                }
                let enc = substitute(&sq, a, b, Direction::Forward).unwrap();
                let dec = substitute_digraph(&sq, enc, Direction::Backward).unwrap();
                assert_eq!(dec, Digraph::new(a, b));
            }
        }
    }

    #[test]
    fn test_letter_not_in_matrix() {
        let sq = monarchy();
        assert_eq!(
            substitute(&sq, 'J', 'A', Direction::Forward),
            Err(PlayfairError::LetterNotInMatrix('J'))
        );
        assert_eq!(
            substitute(&sq, 'A', '1', Direction::Backward),
            Err(PlayfairError::LetterNotInMatrix('1'))
        );
    }
}
