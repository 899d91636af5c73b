// core/src/builder.rs
//
// Drives the per-character encoding loop:
// classify -> sub-key(s) (directly or via the pinyin provider) -> expand.
//
// Latin-range characters are always treated as one-letter words, so each
// contributes exactly one Initial (or a Placeholder). Other characters are
// looked up in the provider; every reading becomes one sub-key and several
// readings multiply the candidate set.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::candidate::{CandidateExpander, CandidateSet, SubKey};
use crate::error::Result;
use crate::keypad::{classify_range, digit_for_latin_letter, CharRange};
use crate::provider::PinyinProvider;
use crate::{spelling, utils, Config};

/// Builds T9 keys for text using a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct T9KeyBuilder {
    config: Config,
}

impl T9KeyBuilder {
    /// Create a builder, rejecting invalid configurations.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encode `text` into its full candidate set.
    pub fn build<P>(&self, text: &str, provider: &P) -> Result<CandidateSet>
    where
        P: PinyinProvider + ?Sized,
    {
        let text: Cow<'_, str> = if self.config.normalize_input {
            Cow::Owned(utils::nfc(text))
        } else {
            Cow::Borrowed(text)
        };

        let mut expander = CandidateExpander::with_limit(self.config.max_candidates);
        for c in text.chars() {
            match classify_range(c) {
                CharRange::BasicOrExtendedLatin => {
                    let symbol = digit_for_latin_letter(c).to_initial();
                    expander.extend(&[SubKey::single(symbol)])?;
                }
                CharRange::Other => {
                    let readings = provider.pinyin(c);
                    if readings.len() > 1 {
                        trace!(ch = %c, readings = ?readings, "ambiguous character");
                    }
                    let sub_keys: Vec<SubKey> = if readings.is_empty() {
                        vec![SubKey::placeholder()]
                    } else {
                        readings.iter().map(|r| spelling::encode(r)).collect()
                    };
                    expander.extend(&sub_keys)?;
                }
            }
        }

        let set = expander.finish();
        debug!(candidates = set.len(), "built t9 key");
        Ok(set)
    }

    /// Encode `text` and serialize the candidates joined by `;`.
    pub fn build_t9_key<P>(&self, text: &str, provider: &P) -> Result<String>
    where
        P: PinyinProvider + ?Sized,
    {
        self.build(text, provider).map(|set| set.serialize())
    }
}

/// Encode `text` with the default configuration.
pub fn build_t9_key<P>(text: &str, provider: &P) -> Result<String>
where
    P: PinyinProvider + ?Sized,
{
    T9KeyBuilder::default().build_t9_key(text, provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::T9Error;
    use std::collections::HashMap;

    struct MapProvider(HashMap<char, Vec<String>>);

    impl MapProvider {
        fn new(entries: &[(char, &[&str])]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|(c, rs)| (*c, rs.iter().map(|r| r.to_string()).collect()))
                    .collect(),
            )
        }
    }

    impl PinyinProvider for MapProvider {
        fn pinyin(&self, ch: char) -> Vec<String> {
            self.0.get(&ch).cloned().unwrap_or_default()
        }
    }

    /// Provider that panics when queried.
    struct NeverProvider;

    impl PinyinProvider for NeverProvider {
        fn pinyin(&self, ch: char) -> Vec<String> {
            panic!("provider queried for {:?}", ch);
        }
    }

    #[test]
    fn latin_text_is_all_initials() {
        assert_eq!(build_t9_key("Hi", &NeverProvider).unwrap(), "TT");
        assert_eq!(build_t9_key("abc", &NeverProvider).unwrap(), "RRR");
    }

    #[test]
    fn latin_punctuation_and_unmapped() {
        // '1' -> Q, '#' -> C, '-' and ' ' are placeholders
        assert_eq!(build_t9_key("1#- a", &NeverProvider).unwrap(), "QC  R");
    }

    #[test]
    fn extended_latin_is_placeholder_without_lookup() {
        assert_eq!(build_t9_key("é", &NeverProvider).unwrap(), " ");
        assert_eq!(build_t9_key("\u{1E00}", &NeverProvider).unwrap(), " ");
    }

    #[test]
    fn unknown_ideograph_is_placeholder() {
        let p = MapProvider::new(&[]);
        assert_eq!(build_t9_key("中", &p).unwrap(), " ");
    }

    #[test]
    fn single_reading() {
        let p = MapProvider::new(&[('马', &["ma"])]);
        assert_eq!(build_t9_key("马", &p).unwrap(), "V2");
    }

    #[test]
    fn rejected_reading_keeps_its_slot() {
        let p = MapProvider::new(&[('马', &["ma", "ma3"])]);
        assert_eq!(build_t9_key("马", &p).unwrap(), "V2; ");
    }

    #[test]
    fn two_by_three_is_row_major() {
        let p = MapProvider::new(&[('甲', &["a", "b"]), ('乙', &["d", "e", "f"])]);
        // a -> R, b -> R, d/e/f -> S
        let set = T9KeyBuilder::default().build("甲乙", &p).unwrap();
        assert_eq!(set.len(), 6);
        let p = MapProvider::new(&[('甲', &["ma", "ga"]), ('乙', &["ta", "da", "wa"])]);
        assert_eq!(
            build_t9_key("甲乙", &p).unwrap(),
            "V2X2;V2S2;V2Y2;T2X2;T2S2;T2Y2"
        );
    }

    #[test]
    fn mixed_text_keeps_latin_fixed() {
        let p = MapProvider::new(&[('单', &["dan", "shan"])]);
        assert_eq!(build_t9_key("A单1", &p).unwrap(), "RS26Q;RW426Q");
    }

    #[test]
    fn provider_called_once_per_ideograph() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        struct CountingProvider(AtomicUsize);
        impl PinyinProvider for CountingProvider {
            fn pinyin(&self, _ch: char) -> Vec<String> {
                self.0.fetch_add(1, Ordering::SeqCst);
                vec!["a".into(), "b".into()]
            }
        }
        let p = CountingProvider(AtomicUsize::new(0));
        build_t9_key("中a国", &p).unwrap();
        assert_eq!(p.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn ceiling_is_enforced() {
        let p = MapProvider::new(&[('字', &["a", "b", "c", "d"])]);
        let mut config = Config::default();
        config.max_candidates = Some(16);
        let builder = T9KeyBuilder::new(config).unwrap();
        assert_eq!(builder.build("字字", &p).unwrap().len(), 16);
        assert_eq!(
            builder.build("字字字", &p).unwrap_err(),
            T9Error::CapacityExceeded {
                limit: 16,
                required: 64
            }
        );
    }

    #[test]
    fn unbounded_config_allows_growth() {
        let p = MapProvider::new(&[('字', &["a", "b", "c", "d"])]);
        let mut config = Config::default();
        config.max_candidates = None;
        let builder = T9KeyBuilder::new(config).unwrap();
        assert_eq!(builder.config().max_candidates, None);
        assert_eq!(builder.build("字字字字字字", &p).unwrap().len(), 4096);
    }

    #[test]
    fn zero_ceiling_is_invalid() {
        let mut config = Config::default();
        config.max_candidates = Some(0);
        assert!(matches!(
            T9KeyBuilder::new(config),
            Err(T9Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn normalization_composes_before_encoding() {
        let mut config = Config::default();
        config.normalize_input = true;
        let builder = T9KeyBuilder::new(config).unwrap();
        let p = MapProvider::new(&[]);
        // "e" + combining acute composes to one extended-Latin character
        assert_eq!(builder.build_t9_key("e\u{301}", &p).unwrap(), " ");
        // uncomposed, the combining mark is looked up and has no reading
        assert_eq!(
            T9KeyBuilder::default().build_t9_key("e\u{301}", &p).unwrap(),
            "S "
        );
    }
}
