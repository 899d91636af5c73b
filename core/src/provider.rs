use std::sync::Arc;

/// Source of romanized readings for characters outside the Latin ranges.
///
/// Implementations are expected to be fast in-memory lookups. They must be
/// safe to share between threads; builds only ever read from a provider.
pub trait PinyinProvider: Send + Sync {
    /// All readings of `ch` in preference order. Empty when unknown.
    fn pinyin(&self, ch: char) -> Vec<String>;
}

impl<P: PinyinProvider + ?Sized> PinyinProvider for &P {
    fn pinyin(&self, ch: char) -> Vec<String> {
        (**self).pinyin(ch)
    }
}

impl<P: PinyinProvider + ?Sized> PinyinProvider for Arc<P> {
    fn pinyin(&self, ch: char) -> Vec<String> {
        (**self).pinyin(ch)
    }
}

impl<P: PinyinProvider + ?Sized> PinyinProvider for Box<P> {
    fn pinyin(&self, ch: char) -> Vec<String> {
        (**self).pinyin(ch)
    }
}
