use std::fmt;

/// One bit-parallel register. Bit `i` stands for pattern position
/// `len - i - 1`, so the pattern length is bounded by its width.
pub type Mask = u64;

/// Longest pattern (in graphemes) the bit-parallel search accepts.
pub const MAX_PATTERN_LEN: usize = Mask::BITS as usize;

/// Default score threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Default location distance.
pub const DEFAULT_DISTANCE: usize = 1000;

/// Tuning knobs for a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    /// Maximum accepted combined score. `0.0` only accepts perfect matches,
    /// `1.0` accepts nearly anything.
    pub threshold: f64,
    /// How far (in graphemes) a match may drift from the expected location
    /// before the drift alone costs a full point. `0` makes any drift fatal.
    pub distance: usize,
    /// Compare lowercased graphemes.
    pub case_insensitive: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            distance: DEFAULT_DISTANCE,
            case_insensitive: false,
        }
    }
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the threshold, clamped into `[0, 1]`. NaN keeps the default.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    pub fn distance(mut self, distance: usize) -> Self {
        self.distance = distance;
        self
    }

    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }
}

/// Outcome of [`FuzzyMatcher::locate`](crate::FuzzyMatcher::locate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    /// Grapheme index in the text where the match starts.
    Found(usize),
    NotFound,
}

impl MatchResult {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            MatchResult::Found(i) => Some(i),
            MatchResult::NotFound => None,
        }
    }

    #[must_use]
    pub fn is_found(self) -> bool {
        matches!(self, MatchResult::Found(_))
    }
}

impl From<Option<usize>> for MatchResult {
    fn from(index: Option<usize>) -> Self {
        index.map_or(MatchResult::NotFound, MatchResult::Found)
    }
}

/// Label shown by the harness: the index, or `no match`.
impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::Found(i) => write!(f, "{i}"),
            MatchResult::NotFound => f.write_str("no match"),
        }
    }
}

/// Best candidate together with its combined score ∈ `[0, 2]`
/// (lower is better).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch {
    pub index: usize,
    pub score: f64,
}

/// Immutable search engine produced by
/// [`FuzzyMatcherBuilder`](crate::FuzzyMatcherBuilder).
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    pub(crate) options: MatchOptions,
}

impl FuzzyMatcher {
    #[must_use]
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }
}
