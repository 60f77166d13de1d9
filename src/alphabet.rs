//! The 25-letter Playfair alphabet and letter normalization.
//!
//! `J` never appears as a distinct symbol: it is folded into `I` on every
//! input path. Only unaccented ASCII Latin letters belong to the alphabet.

/// The 25 alphabet letters in natural order, `J` excluded.
pub const ALPHABET: [char; 25] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T',
    'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Letter inserted to split doubled letters and pad an odd tail.
pub const FILLER: char = 'I';

/// Maps a character onto the alphabet.
///
/// Returns `None` for anything that is not an ASCII Latin letter.
/// Lowercase is uppercased and `J` becomes `I`.
pub fn normalize(ch: char) -> Option<char> {
    if !ch.is_ascii_alphabetic() {
        return None;
    }
    match ch.to_ascii_uppercase() {
        'J' => Some('I'),
        upper => Some(upper),
    }
}

/// Strips every non-letter character and normalizes the rest.
pub fn clean(text: &str) -> Vec<char> {
    text.chars().filter_map(normalize).collect()
}

/// Returns the first letter that is alphabetic but not ASCII Latin.
pub fn first_non_latin(text: &str) -> Option<char> {
    text.chars().find(|ch| ch.is_alphabetic() && !ch.is_ascii_alphabetic())
}

/// Index of an alphabet letter in `A..Z` space (0..26), `None` otherwise.
pub(crate) fn letter_index(ch: char) -> Option<usize> {
    if ch.is_ascii_uppercase() {
        Some((ch as u8 - b'A') as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_has_no_j() {
        assert_eq!(ALPHABET.len(), 25);
        assert!(!ALPHABET.contains(&'J'));
    }

    #[test]
    fn test_alphabet_is_sorted_and_unique() {
        assert!(ALPHABET.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_normalize_letters() {
        assert_eq!(normalize('a'), Some('A'));
        assert_eq!(normalize('Z'), Some('Z'));
        assert_eq!(normalize('j'), Some('I'));
        assert_eq!(normalize('J'), Some('I'));
    }

    #[test]
    fn test_normalize_rejects_non_letters() {
        assert_eq!(normalize(' '), None);
        assert_eq!(normalize('7'), None);
        assert_eq!(normalize('!'), None);
        assert_eq!(normalize('é'), None);
        assert_eq!(normalize('Ж'), None);
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean("Hello, Jim!"), vec!['H', 'E', 'L', 'L', 'O', 'I', 'I', 'M']);
        assert!(clean("1234 ?!").is_empty());
    }

    #[test]
    fn test_first_non_latin() {
        assert_eq!(first_non_latin("plain text"), None);
        assert_eq!(first_non_latin("café"), Some('é'));
        assert_eq!(first_non_latin("12 ключ"), Some('к'));
    }

    #[test]
    fn test_letter_index() {
        assert_eq!(letter_index('A'), Some(0));
        assert_eq!(letter_index('Z'), Some(25));
        assert_eq!(letter_index('a'), None);
    }
}
