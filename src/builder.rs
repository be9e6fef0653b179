use crate::{FuzzyMatcher, MatchOptions};

/// Builder for [`FuzzyMatcher`].
///
/// ```rust
/// use fuzzy_locate::{FuzzyMatcherBuilder, MatchResult};
///
/// let matcher = FuzzyMatcherBuilder::new()
///     .threshold(0.5)
///     .distance(10)
///     .build();
///
/// assert_eq!(
///     matcher.locate("the quick brown fox", "quikc", 4),
///     MatchResult::Found(4)
/// );
/// ```
#[derive(Debug, Default)]
pub struct FuzzyMatcherBuilder {
    options: MatchOptions,
}

impl FuzzyMatcherBuilder {
    /// Starts from the defaults: threshold `0.5`, distance `1000`,
    /// case-sensitive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum accepted score, clamped into `[0, 1]`.
    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.options = self.options.threshold(threshold);
        self
    }

    /// Drift (in graphemes) from the expected location that costs a full
    /// point of score.
    #[must_use]
    pub fn distance(mut self, distance: usize) -> Self {
        self.options = self.options.distance(distance);
        self
    }

    /// Compare lowercased graphemes.
    #[must_use]
    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.options = self.options.case_insensitive(value);
        self
    }

    /// Replaces all options at once.
    #[must_use]
    pub fn options(mut self, options: MatchOptions) -> Self {
        self.options = options.threshold(options.threshold);
        self
    }

    #[must_use]
    pub fn build(self) -> FuzzyMatcher {
        FuzzyMatcher {
            options: self.options,
        }
    }
}

impl From<MatchOptions> for FuzzyMatcher {
    fn from(options: MatchOptions) -> Self {
        FuzzyMatcherBuilder::new().options(options).build()
    }
}
