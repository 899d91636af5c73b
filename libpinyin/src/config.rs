//! Pinyin-side configuration that extends the engine `Config` from core.
//!
//! This configuration includes:
//! - All engine options from `t9search_core::Config` (flattened via serde)
//! - Reading table options (tone stripping, syllable filtering)
//! - The path of the reading table to load
//!
//! # Example
//!
//! ```rust
//! use t9search_pinyin::PinyinConfig;
//!
//! let config = PinyinConfig::default();
//! assert!(config.strip_tone_numbers);
//! let engine_config = config.into_base();
//! assert!(engine_config.max_candidates.is_some());
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PinyinConfig {
    /// Engine fields (candidate ceiling, normalization)
    #[serde(flatten)]
    pub base: t9search_core::Config,

    /// Drop a trailing tone number from table readings ("ma3" -> "ma").
    /// Readings left with a tone number encode to a placeholder.
    pub strip_tone_numbers: bool,

    /// Only keep table readings that are standard pinyin syllables.
    pub known_syllables_only: bool,

    /// Reading table to load; the built-in demo table is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_path: Option<PathBuf>,
}

impl Default for PinyinConfig {
    fn default() -> Self {
        Self {
            base: t9search_core::Config::default(),
            strip_tone_numbers: true,
            known_syllables_only: false,
            table_path: None,
        }
    }
}

impl PinyinConfig {
    /// Convert into the engine config used by `T9KeyBuilder::new()`.
    pub fn into_base(self) -> t9search_core::Config {
        self.base
    }

    pub fn base(&self) -> &t9search_core::Config {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut t9search_core::Config {
        &mut self.base
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PinyinConfig = toml::from_str(content).context("parse pinyin config")?;
        config.base.validate()?;
        Ok(config)
    }
}
