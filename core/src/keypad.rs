//! Keypad alphabet and character classification.
//!
//! This module owns the immutable lookup tables of the engine:
//! - the 14 valid keypad characters and their stable indices
//! - the classic letter -> digit grouping (ABC=2 ... WXYZ=9)
//! - the fixed Initial bijection (`'C' + (key - '#')`)
//!
//! Everything here is `const` data, safe for concurrent read-only use.

use std::fmt;

use crate::error::T9Error;

/// Valid keypad characters in index order.
///
/// `0`-`9` -> 0-9, `+` -> 10, `,` -> 11, `*` -> 12, `#` -> 13.
pub const VALID_T9_KEYS: [char; 14] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', ',', '*', '#',
];

/// Letter -> keypad digit, indexed by `letter - 'a'`.
const LETTER_T9_MAP: [u8; 26] = [
    b'2', b'2', b'2', // a b c
    b'3', b'3', b'3', // d e f
    b'4', b'4', b'4', // g h i
    b'5', b'5', b'5', // j k l
    b'6', b'6', b'6', // m n o
    b'7', b'7', b'7', b'7', // p q r s
    b'8', b'8', b'8', // t u v
    b'9', b'9', b'9', b'9', // w x y z
];

/// Base of the Initial letter range. `'#'` is the smallest keypad character.
const INITIAL_BASE: u8 = b'C';
const INITIAL_ORIGIN: u8 = b'#';
const INITIAL_LAST: u8 = b'Y';

/// One of the 14 characters found on a telephone keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeypadKey(u8);

impl KeypadKey {
    /// Wrap a keypad character, or `None` if `c` is not on the keypad.
    pub fn new(c: char) -> Option<Self> {
        if is_valid_symbol_char(c) {
            Some(KeypadKey(c as u8))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    pub fn is_digit(self) -> bool {
        self.0.is_ascii_digit()
    }

    pub fn is_punct(self) -> bool {
        !self.is_digit()
    }

    /// Stable index of this key, see [`VALID_T9_KEYS`].
    pub fn index(self) -> usize {
        match self.0 {
            b'0'..=b'9' => (self.0 - b'0') as usize,
            b'+' => 10,
            b',' => 11,
            b'*' => 12,
            _ => 13,
        }
    }

    /// The Initial letter for this key.
    pub fn initial_letter(self) -> char {
        (INITIAL_BASE + (self.0 - INITIAL_ORIGIN)) as char
    }

    fn from_initial_letter(c: char) -> Option<Self> {
        if !is_initial(c) {
            return None;
        }
        let raw = (c as u8 - INITIAL_BASE + INITIAL_ORIGIN) as char;
        KeypadKey::new(raw)
    }
}

/// A single rendered position of a T9 key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A plain keypad match (digit or punctuation).
    Key(KeypadKey),
    /// Same key space, marked as the start of a word or syllable.
    Initial(KeypadKey),
    /// Character without a keypad representation. Matches nothing.
    Placeholder,
}

impl Symbol {
    /// Promote to the Initial form. Placeholder stays a Placeholder.
    pub fn to_initial(self) -> Symbol {
        match self {
            Symbol::Key(k) | Symbol::Initial(k) => Symbol::Initial(k),
            Symbol::Placeholder => Symbol::Placeholder,
        }
    }

    pub fn is_initial(self) -> bool {
        matches!(self, Symbol::Initial(_))
    }

    /// Keypad key behind this symbol, if any.
    pub fn key(self) -> Option<KeypadKey> {
        match self {
            Symbol::Key(k) | Symbol::Initial(k) => Some(k),
            Symbol::Placeholder => None,
        }
    }

    /// Rendered character in the serialized key format.
    pub fn render(self) -> char {
        match self {
            Symbol::Key(k) => k.as_char(),
            Symbol::Initial(k) => k.initial_letter(),
            Symbol::Placeholder => ' ',
        }
    }

    /// Inverse of [`Symbol::render`].
    pub fn from_rendered(c: char) -> Option<Symbol> {
        if c == ' ' {
            return Some(Symbol::Placeholder);
        }
        if let Some(k) = KeypadKey::new(c) {
            return Some(Symbol::Key(k));
        }
        KeypadKey::from_initial_letter(c).map(Symbol::Initial)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Unicode range class used to pick the encoding path of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharRange {
    /// ASCII, Latin-1, Latin Extended-A/B and Latin Extended Additional.
    BasicOrExtendedLatin,
    /// Anything else; needs a reading lookup.
    Other,
}

/// True iff `c` is one of the 14 keypad characters.
pub fn is_valid_symbol_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | ',' | '*' | '#')
}

/// True iff every character of `query` is a keypad character.
///
/// An empty query is trivially valid.
pub fn is_valid_t9_key(query: &str) -> bool {
    query.chars().all(is_valid_symbol_char)
}

/// Map a Latin letter (either case) to its keypad digit.
///
/// Keypad characters map to themselves; anything else is a Placeholder.
pub fn digit_for_latin_letter(c: char) -> Symbol {
    if c.is_ascii_alphabetic() {
        let idx = (c.to_ascii_lowercase() as u8 - b'a') as usize;
        return Symbol::Key(KeypadKey(LETTER_T9_MAP[idx]));
    }
    match KeypadKey::new(c) {
        Some(k) => Symbol::Key(k),
        None => Symbol::Placeholder,
    }
}

pub fn classify_range(c: char) -> CharRange {
    let cp = c as u32;
    if cp < 0x250 || (0x1E00..0x1EFF).contains(&cp) {
        CharRange::BasicOrExtendedLatin
    } else {
        CharRange::Other
    }
}

/// True iff `c` lies in the Initial letter range `'C'..='Y'`.
pub fn is_initial(c: char) -> bool {
    (INITIAL_BASE as char..=INITIAL_LAST as char).contains(&c)
}

/// Keypad character for an index in `0..14`.
pub fn index_to_key(index: usize) -> Result<char, T9Error> {
    VALID_T9_KEYS
        .get(index)
        .copied()
        .ok_or_else(|| T9Error::InvalidArgument(format!("keypad index out of range: {}", index)))
}

/// Index of a keypad character, see [`VALID_T9_KEYS`].
pub fn key_to_index(c: char) -> Result<usize, T9Error> {
    KeypadKey::new(c)
        .map(KeypadKey::index)
        .ok_or_else(|| T9Error::InvalidArgument(format!("not a keypad character: {:?}", c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_groups() {
        let groups = [
            ("abc", '2'),
            ("def", '3'),
            ("ghi", '4'),
            ("jkl", '5'),
            ("mno", '6'),
            ("pqrs", '7'),
            ("tuv", '8'),
            ("wxyz", '9'),
        ];
        for (letters, digit) in groups {
            for c in letters.chars() {
                assert_eq!(digit_for_latin_letter(c).render(), digit, "letter {}", c);
            }
        }
    }

    #[test]
    fn letter_case_insensitive() {
        for c in 'a'..='z' {
            assert_eq!(
                digit_for_latin_letter(c),
                digit_for_latin_letter(c.to_ascii_uppercase())
            );
        }
    }

    #[test]
    fn keypad_chars_map_to_themselves() {
        for c in VALID_T9_KEYS {
            assert_eq!(digit_for_latin_letter(c), Symbol::Key(KeypadKey(c as u8)));
        }
        assert_eq!(digit_for_latin_letter('-'), Symbol::Placeholder);
        assert_eq!(digit_for_latin_letter(' '), Symbol::Placeholder);
        assert_eq!(digit_for_latin_letter('é'), Symbol::Placeholder);
    }

    #[test]
    fn initial_table_is_exact() {
        let expected = [
            ('#', 'C'),
            ('*', 'J'),
            ('+', 'K'),
            (',', 'L'),
            ('0', 'P'),
            ('1', 'Q'),
            ('2', 'R'),
            ('3', 'S'),
            ('4', 'T'),
            ('5', 'U'),
            ('6', 'V'),
            ('7', 'W'),
            ('8', 'X'),
            ('9', 'Y'),
        ];
        for (key, letter) in expected {
            let k = KeypadKey::new(key).unwrap();
            assert_eq!(Symbol::Initial(k).render(), letter);
            assert_eq!(Symbol::from_rendered(letter), Some(Symbol::Initial(k)));
        }
    }

    #[test]
    fn initial_is_injective_and_covers_is_initial() {
        let images: std::collections::HashSet<char> = VALID_T9_KEYS
            .iter()
            .map(|&c| KeypadKey::new(c).unwrap().initial_letter())
            .collect();
        assert_eq!(images.len(), 14);
        for c in images.iter() {
            assert!(is_initial(*c));
        }
        // no keypad character or placeholder collides with the Initial range
        for c in VALID_T9_KEYS.iter().chain(std::iter::once(&' ')) {
            assert!(!is_initial(*c));
        }
        assert!(!is_initial('B'));
        assert!(!is_initial('Z'));
    }

    #[test]
    fn digit_and_punct_keys() {
        for c in '0'..='9' {
            let k = KeypadKey::new(c).unwrap();
            assert!(k.is_digit(), "key {}", c);
            assert!(!k.is_punct(), "key {}", c);
        }
        for c in ['+', ',', '*', '#'] {
            let k = KeypadKey::new(c).unwrap();
            assert!(k.is_punct(), "key {}", c);
            assert!(!k.is_digit(), "key {}", c);
        }
    }

    #[test]
    fn symbol_key_ignores_initial_marker() {
        let k = KeypadKey::new('7').unwrap();
        assert_eq!(Symbol::Key(k).key(), Some(k));
        assert_eq!(Symbol::Initial(k).key(), Some(k));
        assert_eq!(Symbol::Placeholder.key(), None);
        assert_eq!(digit_for_latin_letter('s').to_initial().key(), Some(k));
    }

    #[test]
    fn placeholder_stays_placeholder() {
        assert_eq!(Symbol::Placeholder.to_initial(), Symbol::Placeholder);
        assert_eq!(Symbol::Placeholder.render(), ' ');
        assert_eq!(Symbol::from_rendered(' '), Some(Symbol::Placeholder));
        assert_eq!(Symbol::from_rendered('A'), None);
        assert_eq!(Symbol::from_rendered('D'), None);
    }

    #[test]
    fn range_boundaries() {
        assert_eq!(classify_range('a'), CharRange::BasicOrExtendedLatin);
        assert_eq!(classify_range('\u{24F}'), CharRange::BasicOrExtendedLatin);
        assert_eq!(classify_range('\u{250}'), CharRange::Other);
        assert_eq!(classify_range('\u{1DFF}'), CharRange::Other);
        assert_eq!(classify_range('\u{1E00}'), CharRange::BasicOrExtendedLatin);
        assert_eq!(classify_range('\u{1EFE}'), CharRange::BasicOrExtendedLatin);
        assert_eq!(classify_range('\u{1EFF}'), CharRange::Other);
        assert_eq!(classify_range('中'), CharRange::Other);
    }

    #[test]
    fn index_helpers() {
        for (i, c) in VALID_T9_KEYS.iter().enumerate() {
            assert_eq!(index_to_key(i).unwrap(), *c);
            assert_eq!(key_to_index(*c).unwrap(), i);
        }
        assert!(index_to_key(14).is_err());
        assert!(key_to_index('a').is_err());
    }

    #[test]
    fn query_validation() {
        assert!(is_valid_t9_key("0123456789+,*#"));
        assert!(is_valid_t9_key(""));
        assert!(!is_valid_t9_key("12a"));
        assert!(!is_valid_t9_key("1 2"));
    }
}
