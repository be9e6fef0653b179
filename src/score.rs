/// Scores candidates of one search: character errors relative to the pattern
/// length plus drift from the expected location relative to `distance`.
///
/// ```rust
/// use fuzzy_locate::Scorer;
///
/// let scorer = Scorer::new(10, 4, 100);
/// assert_eq!(scorer.score(0, 10), 0.0);
/// assert_eq!(scorer.score(1, 10), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scorer {
    location: usize,
    pattern_len: usize,
    distance: usize,
}

impl Scorer {
    #[must_use]
    pub fn new(location: usize, pattern_len: usize, distance: usize) -> Self {
        Self {
            location,
            pattern_len,
            distance,
        }
    }

    /// Combined score of a candidate starting at `index` with `errors`
    /// character errors. `0.0` is perfect.
    #[inline]
    #[must_use]
    pub fn score(&self, errors: usize, index: usize) -> f64 {
        self.accuracy(errors) + self.location_penalty(index)
    }

    /// Fraction of the pattern that is wrong.
    #[inline]
    #[must_use]
    pub fn accuracy(&self, errors: usize) -> f64 {
        if self.pattern_len == 0 {
            return 0.0;
        }
        errors as f64 / self.pattern_len as f64
    }

    /// Drift penalty ∈ `[0, 1]`. With `distance == 0` any drift is maximal.
    #[inline]
    #[must_use]
    pub fn location_penalty(&self, index: usize) -> f64 {
        let proximity = index.abs_diff(self.location);
        if proximity == 0 {
            0.0
        } else if self.distance == 0 {
            1.0
        } else {
            (proximity as f64 / self.distance as f64).min(1.0)
        }
    }
}
