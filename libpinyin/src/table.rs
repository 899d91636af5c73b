// libpinyin/src/table.rs
//
// In-memory reading table: character -> ordered pinyin readings.
//
// Text format, one character per line:
//
//     # comment
//     单 dan,shan,chan
//     曾	zeng ceng
//
// The first token is the character, the rest are readings separated by
// commas and/or whitespace. Repeated lines for the same character append
// readings; duplicates keep their first position.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use t9search_core::PinyinProvider;
use tracing::{debug, warn};

use crate::config::PinyinConfig;
use crate::syllables::is_known_syllable;

/// Normalization applied to readings on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingOptions {
    pub strip_tone_numbers: bool,
    pub known_syllables_only: bool,
}

impl Default for ReadingOptions {
    fn default() -> Self {
        Self {
            strip_tone_numbers: true,
            known_syllables_only: false,
        }
    }
}

impl From<&PinyinConfig> for ReadingOptions {
    fn from(config: &PinyinConfig) -> Self {
        Self {
            strip_tone_numbers: config.strip_tone_numbers,
            known_syllables_only: config.known_syllables_only,
        }
    }
}

/// Character -> readings provider backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct PinyinTable {
    map: HashMap<char, Vec<String>>,
    options: ReadingOptions,
}

impl PinyinTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReadingOptions) -> Self {
        Self {
            map: HashMap::new(),
            options,
        }
    }

    /// Add one reading for `ch`. Returns false if the reading was dropped
    /// (empty, filtered, or already present).
    pub fn insert(&mut self, ch: char, reading: &str) -> bool {
        let Some(reading) = self.normalize(reading) else {
            return false;
        };
        let readings = self.map.entry(ch).or_default();
        if readings.iter().any(|r| *r == reading) {
            return false;
        }
        readings.push(reading);
        true
    }

    /// Readings of `ch` in insertion order.
    pub fn lookup(&self, ch: char) -> &[String] {
        self.map.get(&ch).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of characters with at least one entry.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Parse a table from any buffered reader. Malformed lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R, options: ReadingOptions) -> Result<Self> {
        let mut table = Self::with_options(options);
        for (line_num, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("read table line {}", line_num + 1))?;
            table.insert_line(&line, line_num + 1);
        }
        debug!(characters = table.len(), "loaded pinyin table");
        Ok(table)
    }

    /// Load a table file.
    pub fn load<P: AsRef<Path>>(path: P, options: ReadingOptions) -> Result<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("open table {}", path.display()))?;
        Self::from_reader(BufReader::new(f), options)
    }

    fn insert_line(&mut self, line: &str, line_num: usize) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }
        let mut tokens = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty());
        let Some(head) = tokens.next() else {
            return;
        };
        let mut chars = head.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            warn!(line = line_num, entry = head, "expected a single character, skipping line");
            return;
        };
        let mut any = false;
        for reading in tokens {
            any |= self.insert(ch, reading);
        }
        if !any && self.lookup(ch).is_empty() {
            warn!(line = line_num, ch = %ch, "no usable readings");
        }
    }

    fn normalize(&self, reading: &str) -> Option<String> {
        let mut reading = reading.trim().to_lowercase();
        if self.options.strip_tone_numbers
            && reading.len() > 1
            && reading.ends_with(|c: char| ('1'..='5').contains(&c))
        {
            reading.pop();
        }
        if reading.is_empty() {
            return None;
        }
        if self.options.known_syllables_only && !is_known_syllable(&reading) {
            return None;
        }
        Some(reading)
    }
}

impl PinyinProvider for PinyinTable {
    fn pinyin(&self, ch: char) -> Vec<String> {
        self.lookup(ch).to_vec()
    }
}
