//! Segment counting inside a single rendered candidate key.
//!
//! Used by matchers to score how many words a matched range spans.

use crate::keypad::is_initial;

/// Count word starts in `key[start..end)`, positions counted in chars.
///
/// A position counts when it is `start` itself, a Placeholder space, or an
/// Initial letter. An `end` at or past the key length is clamped to
/// `len - 1`, which leaves the last character out of the scan.
pub fn count_segments(key: &str, start: usize, end: usize) -> usize {
    let len = key.chars().count();
    let end = if end >= len { len.saturating_sub(1) } else { end };
    if start >= end {
        return 0;
    }

    key.chars()
        .enumerate()
        .skip(start)
        .take(end - start)
        .filter(|&(i, c)| i == start || c == ' ' || is_initial(c))
        .count()
}
