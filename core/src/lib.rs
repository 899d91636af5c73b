//! t9search-core
//!
//! Encodes text (names, labels) into T9 keys: strings over the telephone
//! keypad alphabet, annotated with word-initial markers, used for numeric
//! keypad predictive search. Characters outside the Latin ranges are looked
//! up through a `PinyinProvider`; characters with several readings expand
//! the result into several alternative keys joined by `;`.
//!
//! Public API:
//! - `T9KeyBuilder` / `build_t9_key` - the encoding pipeline
//! - `CandidateSet`, `CandidateKey`, `SubKey` - expansion results
//! - `Symbol`, `KeypadKey` - the keypad alphabet
//! - `count_segments` - word counting inside one rendered key
//! - `PinyinProvider` - reading lookup capability
//! - `Config` - configuration (TOML)

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::T9Error;

pub mod keypad;
pub use keypad::{
    classify_range, digit_for_latin_letter, index_to_key, is_initial, is_valid_symbol_char,
    is_valid_t9_key, key_to_index, CharRange, KeypadKey, Symbol, VALID_T9_KEYS,
};

pub mod spelling;

pub mod candidate;
pub use candidate::{CandidateExpander, CandidateKey, CandidateSet, SubKey, T9_KEYS_DIVIDER};

pub mod provider;
pub use provider::PinyinProvider;

pub mod builder;
pub use builder::{build_t9_key, T9KeyBuilder};

pub mod words;
pub use words::count_segments;

/// Default ceiling on the number of candidates one text may expand into.
pub const DEFAULT_MAX_CANDIDATES: usize = 4096;

/// Engine configuration.
///
/// In TOML, `max_candidates = 0` means no ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Abort a build once expansion needs more candidates than this.
    /// `None` reproduces unbounded growth.
    #[serde(with = "ceiling")]
    pub max_candidates: Option<usize>,

    /// NFC-normalize text before encoding, so decomposed accents collapse
    /// into a single character.
    pub normalize_input: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_candidates: Some(DEFAULT_MAX_CANDIDATES),
            normalize_input: false,
        }
    }
}

impl Config {
    /// Configuration without a candidate ceiling.
    pub fn unbounded() -> Self {
        Self {
            max_candidates: None,
            ..Self::default()
        }
    }

    /// Reject settings the engine cannot honour.
    pub fn validate(&self) -> Result<(), T9Error> {
        if self.max_candidates == Some(0) {
            return Err(T9Error::InvalidArgument(
                "max_candidates must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, T9Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| T9Error::ConfigIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), T9Error> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|e| T9Error::ConfigIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, T9Error> {
        let config: Config =
            toml::from_str(content).map_err(|e| T9Error::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, T9Error> {
        toml::to_string_pretty(self).map_err(|e| T9Error::ConfigParse(e.to_string()))
    }
}

/// `Option<usize>` <-> integer with 0 standing for `None`.
mod ceiling {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(value.unwrap_or(0) as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<usize>, D::Error> {
        let raw = u64::deserialize(d)?;
        Ok(if raw == 0 { None } else { Some(raw as usize) })
    }
}

/// Utility helpers.
pub mod utils {
    use unicode_normalization::UnicodeNormalization;

    /// NFC-normalize a string. Unlike a display normalizer this keeps
    /// surrounding whitespace, since every character produces a key symbol.
    pub fn nfc(s: &str) -> String {
        s.nfc().collect()
    }
}
