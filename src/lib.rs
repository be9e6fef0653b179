mod alphabet;
mod bitap;
mod builder;
mod cache;
mod error;
mod exact;
mod harness;
mod ranking;
mod score;
mod structs;

pub use alphabet::{Alphabet, CompiledPattern};
pub use builder::FuzzyMatcherBuilder;
pub use cache::PatternCache;
pub use error::MatchError;
pub use harness::{HarnessFields, HarnessQuery};
pub use ranking::RANK_TIERS;
pub use score::Scorer;
pub use structs::*;

use alphabet::graphemes;
use log::debug;

/// Finds the best approximate occurrence of `pattern` in `text` near
/// `expected_location` (in graphemes; clamped into the text).
///
/// ```rust
/// use fuzzy_locate::{MatchOptions, MatchResult, locate};
///
/// let options = MatchOptions::new().distance(0).threshold(0.0);
/// assert_eq!(locate("abcabcabc", "abc", 6, &options), MatchResult::Found(6));
/// ```
#[must_use]
pub fn locate(
    text: &str,
    pattern: &str,
    expected_location: isize,
    options: &MatchOptions,
) -> MatchResult {
    FuzzyMatcher::from(*options).locate(text, pattern, expected_location)
}

#[inline]
fn clamp_location(expected_location: isize, text_len: usize) -> usize {
    usize::try_from(expected_location).map_or(0, |loc| loc.min(text_len))
}

/// Location-biased fuzzy search engine
impl FuzzyMatcher {
    #[must_use]
    pub fn locate(&self, text: &str, pattern: &str, expected_location: isize) -> MatchResult {
        self.best_match(text, pattern, expected_location)
            .map(|m| m.index)
            .into()
    }

    /// Like [`locate`](Self::locate) but reuses a pattern compiled ahead of
    /// time. The text is compared using the pattern's case mode.
    #[must_use]
    pub fn locate_compiled(
        &self,
        text: &str,
        pattern: &CompiledPattern,
        expected_location: isize,
    ) -> MatchResult {
        self.best_match_compiled(text, pattern, expected_location)
            .map(|m| m.index)
            .into()
    }

    /// Like [`locate`](Self::locate), compiling `pattern` through `cache`.
    pub fn locate_cached(
        &self,
        cache: &mut PatternCache,
        text: &str,
        pattern: &str,
        expected_location: isize,
    ) -> MatchResult {
        let compiled = cache.get_or_compile(pattern, self.options.case_insensitive);
        self.locate_compiled(text, compiled, expected_location)
    }

    /// Best candidate together with its score.
    #[must_use]
    pub fn best_match(
        &self,
        text: &str,
        pattern: &str,
        expected_location: isize,
    ) -> Option<ScoredMatch> {
        let compiled = CompiledPattern::new(pattern, self.options.case_insensitive);
        self.best_match_compiled(text, &compiled, expected_location)
    }

    #[must_use]
    pub fn best_match_compiled(
        &self,
        text: &str,
        pattern: &CompiledPattern,
        expected_location: isize,
    ) -> Option<ScoredMatch> {
        let text = graphemes(text, pattern.case_insensitive());
        let location = clamp_location(expected_location, text.len());

        if pattern.is_empty() {
            return Some(ScoredMatch {
                index: location,
                score: 0.0,
            });
        }
        if text.is_empty() {
            return None;
        }
        if exact::matches_at(&text, pattern.graphemes(), location) {
            return Some(ScoredMatch {
                index: location,
                score: 0.0,
            });
        }

        match pattern.alphabet() {
            Ok(alphabet) => {
                bitap::search(&text, pattern.graphemes(), alphabet, location, &self.options)
            }
            Err(err) => {
                debug!("{err}; falling back to exact search");
                let index = exact::find_nearest(&text, pattern.graphemes(), location)?;
                let score =
                    Scorer::new(location, pattern.len(), self.options.distance).score(0, index);
                (score <= self.options.threshold).then_some(ScoredMatch { index, score })
            }
        }
    }
}
