// core/src/spelling.rs
//
// Encodes one romanized spelling (a single pinyin syllable such as "zhang")
// into its keypad sub-key. The first letter becomes an Initial, the rest are
// plain keys. A spelling with any non-letter character (tone digits, umlauts,
// apostrophes) is rejected as a whole and becomes a single Placeholder.

use crate::candidate::SubKey;
use crate::keypad::digit_for_latin_letter;

/// Encode a single spelling into a [`SubKey`].
pub fn encode(spelling: &str) -> SubKey {
    let mut out = SubKey::with_capacity(spelling.len());
    for (i, c) in spelling.chars().enumerate() {
        if !c.is_ascii_alphabetic() {
            return SubKey::placeholder();
        }
        let symbol = digit_for_latin_letter(c);
        out.push(if i == 0 { symbol.to_initial() } else { symbol });
    }
    if out.is_empty() {
        return SubKey::placeholder();
    }
    out
}
