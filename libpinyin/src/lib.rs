//! t9search-pinyin crate root
//!
//! This crate provides the pinyin side of t9search: concrete
//! `PinyinProvider` implementations for the core engine and the
//! configuration that ties a reading table to the engine config.
//!
//! Public API exported here:
//! - `PinyinTable` and `ReadingOptions` from `table`
//! - `DemoTable` from `demo`
//! - `PinyinConfig` from `config`
//! - `PINYIN_SYLLABLES` and `is_known_syllable` from `syllables`

pub mod config;
pub mod demo;
pub mod syllables;
pub mod table;

// Re-export the engine API so callers only need this crate.
pub use t9search_core::{
    build_t9_key, count_segments, is_valid_t9_key, CandidateSet, Config, PinyinProvider,
    T9Error, T9KeyBuilder, T9_KEYS_DIVIDER,
};

pub use config::PinyinConfig;
pub use demo::DemoTable;
pub use syllables::{is_known_syllable, PINYIN_SYLLABLES};
pub use table::{PinyinTable, ReadingOptions};

/// Reading source selected by a `PinyinConfig`.
#[derive(Debug, Clone)]
pub enum Readings {
    Table(PinyinTable),
    Demo(DemoTable),
}

impl Readings {
    /// Load the configured table, or fall back to the built-in demo table.
    pub fn from_config(config: &PinyinConfig) -> anyhow::Result<Self> {
        match &config.table_path {
            Some(path) => Ok(Readings::Table(PinyinTable::load(
                path,
                ReadingOptions::from(config),
            )?)),
            None => Ok(Readings::Demo(DemoTable)),
        }
    }
}

impl PinyinProvider for Readings {
    fn pinyin(&self, ch: char) -> Vec<String> {
        match self {
            Readings::Table(t) => t.pinyin(ch),
            Readings::Demo(d) => d.pinyin(ch),
        }
    }
}
