use crate::{CompiledPattern, FuzzyMatcher};

/// Thresholds an item is tried against, loosest last.
pub const RANK_TIERS: [f64; 9] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];

impl FuzzyMatcher {
    /// Confidence that `pattern` occurs in `text` near `expected_location`:
    /// the score of the best candidate accepted at threshold `1.0`.
    /// Lower is more confident; `None` when nothing matches at all.
    ///
    /// ```rust
    /// use fuzzy_locate::FuzzyMatcher;
    ///
    /// let matcher = FuzzyMatcher::default();
    /// assert_eq!(matcher.score("hello world", "world", 6), Some(0.0));
    /// assert_eq!(matcher.score("", "world", 0), None);
    /// ```
    #[must_use]
    pub fn score(&self, text: &str, pattern: &str, expected_location: isize) -> Option<f64> {
        let relaxed = FuzzyMatcher {
            options: self.options.threshold(1.0),
        };
        relaxed
            .best_match(text, pattern, expected_location)
            .map(|m| m.score)
    }

    /// Orders `items` by how well each matches `pattern`: items are grouped
    /// by the first of [`RANK_TIERS`] that accepts them, keeping input order
    /// inside a group. Items no tier accepts come last, in input order.
    #[must_use]
    pub fn sort_by_match<'a, T: AsRef<str>>(
        &self,
        items: &'a [T],
        pattern: &str,
        expected_location: isize,
    ) -> Vec<&'a T> {
        let compiled = CompiledPattern::new(pattern, self.options.case_insensitive);
        let relaxed = FuzzyMatcher {
            options: self.options.threshold(1.0),
        };
        let mut ranked: Vec<(usize, &T)> = items
            .iter()
            .map(|item| {
                let tier = relaxed
                    .best_match_compiled(item.as_ref(), &compiled, expected_location)
                    .and_then(|m| RANK_TIERS.iter().position(|&t| m.score <= t))
                    .unwrap_or(RANK_TIERS.len());
                (tier, item)
            })
            .collect();
        ranked.sort_by_key(|&(tier, _)| tier);
        ranked.into_iter().map(|(_, item)| item).collect()
    }
}
