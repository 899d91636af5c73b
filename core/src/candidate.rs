//! Candidate types for T9 key expansion.
//!
//! This module provides:
//! - `SubKey`: symbols for one interpretation of one source character
//! - `CandidateKey`: symbols for one interpretation of the whole text
//! - `CandidateSet`: ordered, never-empty list of candidate keys
//! - `CandidateExpander`: incremental Cartesian product over sub-keys

use std::fmt;

use tracing::warn;

use crate::error::{Result, T9Error};
use crate::keypad::Symbol;

/// Divider between candidates in the serialized key format.
pub const T9_KEYS_DIVIDER: char = ';';

/// Symbols derived from one reading of one source character.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubKey {
    symbols: Vec<Symbol>,
}

impl SubKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            symbols: Vec::with_capacity(capacity),
        }
    }

    /// A one-symbol sub-key.
    pub fn single(symbol: Symbol) -> Self {
        Self {
            symbols: vec![symbol],
        }
    }

    /// The sub-key of a character without keypad representation.
    pub fn placeholder() -> Self {
        Self::single(Symbol::Placeholder)
    }

    pub fn push(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// One full-text interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateKey {
    symbols: Vec<Symbol>,
}

impl CandidateKey {
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    fn append(&mut self, sub_key: &SubKey) {
        self.symbols.extend_from_slice(sub_key.symbols());
    }
}

impl fmt::Display for CandidateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.symbols {
            write!(f, "{}", s)?;
        }
        Ok(())
    }
}

/// Every interpretation of one source text, in expansion order.
///
/// Never empty: a fresh set holds a single empty candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    keys: Vec<CandidateKey>,
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self {
            keys: vec![CandidateKey::default()],
        }
    }
}

impl CandidateSet {
    pub fn keys(&self) -> &[CandidateKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CandidateKey> {
        self.keys.iter()
    }

    /// Render every candidate and join them with [`T9_KEYS_DIVIDER`].
    pub fn serialize(&self) -> String {
        let capacity = self.keys.iter().map(|k| k.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                out.push(T9_KEYS_DIVIDER);
            }
            out.extend(key.symbols().iter().map(|s| s.render()));
        }
        out
    }

    /// Split a serialized key back into its candidate strings.
    pub fn parse(serialized: &str) -> Vec<&str> {
        serialized.split(T9_KEYS_DIVIDER).collect()
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a CandidateKey;
    type IntoIter = std::slice::Iter<'a, CandidateKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// Grows a [`CandidateSet`] one source character at a time.
#[derive(Debug, Clone, Default)]
pub struct CandidateExpander {
    set: CandidateSet,
    limit: Option<usize>,
}

impl CandidateExpander {
    /// Unbounded expander.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expander that refuses to grow past `limit` candidates.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            set: CandidateSet::default(),
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Fold the readings of one source character into the set.
    ///
    /// One sub-key is appended to every candidate. With k > 1 sub-keys each
    /// existing candidate is replaced by k copies, one per sub-key; existing
    /// candidates form the outer loop and sub-keys the inner loop. On error
    /// the set is left unchanged.
    pub fn extend(&mut self, sub_keys: &[SubKey]) -> Result<()> {
        match sub_keys {
            [] => Err(T9Error::InvalidArgument(
                "extend requires at least one sub-key".to_string(),
            )),
            [only] => {
                for key in self.set.keys.iter_mut() {
                    key.append(only);
                }
                Ok(())
            }
            many => {
                let n = self.set.keys.len();
                let required = n.saturating_mul(many.len());
                if let Some(limit) = self.limit {
                    if required > limit {
                        warn!(limit, required, "candidate ceiling exceeded, aborting expansion");
                        return Err(T9Error::CapacityExceeded { limit, required });
                    }
                }
                let mut next = Vec::with_capacity(required);
                for key in &self.set.keys {
                    for sub in many {
                        let mut expanded = key.clone();
                        expanded.append(sub);
                        next.push(expanded);
                    }
                }
                self.set.keys = next;
                Ok(())
            }
        }
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.set
    }

    pub fn finish(self) -> CandidateSet {
        self.set
    }
}
