use crate::CompiledPattern;
use ahash::AHashMap;

/// Caller-owned cache of compiled patterns, keyed by pattern text and case
/// mode.
#[derive(Debug, Default)]
pub struct PatternCache {
    entries: AHashMap<(String, bool), CompiledPattern>,
}

impl PatternCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compile(&mut self, pattern: &str, case_insensitive: bool) -> &CompiledPattern {
        self.entries
            .entry((pattern.to_owned(), case_insensitive))
            .or_insert_with(|| CompiledPattern::new(pattern, case_insensitive))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
