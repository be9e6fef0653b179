use crate::{MAX_PATTERN_LEN, Mask, MatchError};
use std::borrow::Cow;
use std::collections::BTreeMap;
use unicode_segmentation::UnicodeSegmentation;

/// Splits `s` into extended grapheme clusters, lowercasing each one when
/// `case_insensitive` is set.
pub(crate) fn graphemes(s: &str, case_insensitive: bool) -> Vec<Cow<'_, str>> {
    s.graphemes(true)
        .map(|g| {
            if case_insensitive {
                Cow::Owned(g.to_lowercase())
            } else {
                Cow::Borrowed(g)
            }
        })
        .collect()
}

/// Per-grapheme occurrence masks of a pattern.
///
/// For a pattern of length `n`, the mask of grapheme `g` has bit `n - i - 1`
/// set for every position `i` holding `g`. Graphemes absent from the pattern
/// map to `0`.
///
/// ```rust
/// use fuzzy_locate::Alphabet;
///
/// let alphabet = Alphabet::new(&["a", "b", "c", "a"]).unwrap();
/// assert_eq!(alphabet.mask("a"), 0b1001);
/// assert_eq!(alphabet.mask("z"), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    masks: BTreeMap<String, Mask>,
}

impl Alphabet {
    /// Fails with [`MatchError::UnsupportedPatternLength`] when the pattern
    /// does not fit into one [`Mask`].
    pub fn new<S: AsRef<str>>(pattern: &[S]) -> Result<Self, MatchError> {
        let len = pattern.len();
        if len > MAX_PATTERN_LEN {
            return Err(MatchError::UnsupportedPatternLength {
                len,
                max: MAX_PATTERN_LEN,
            });
        }
        let mut masks = BTreeMap::new();
        for (i, grapheme) in pattern.iter().enumerate() {
            *masks.entry(grapheme.as_ref().to_owned()).or_insert(0) |= 1 << (len - i - 1);
        }
        Ok(Self { masks })
    }

    #[inline]
    #[must_use]
    pub fn mask(&self, grapheme: &str) -> Mask {
        self.masks.get(grapheme).copied().unwrap_or(0)
    }

    /// Number of distinct graphemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}

/// A pattern segmented and precomputed once, reusable across searches.
///
/// Patterns longer than [`MAX_PATTERN_LEN`] still compile; they carry no
/// alphabet and are searched exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPattern {
    graphemes: Vec<String>,
    alphabet: Result<Alphabet, MatchError>,
    case_insensitive: bool,
}

impl CompiledPattern {
    #[must_use]
    pub fn new(pattern: &str, case_insensitive: bool) -> Self {
        let graphemes: Vec<String> = graphemes(pattern, case_insensitive)
            .into_iter()
            .map(Cow::into_owned)
            .collect();
        let alphabet = Alphabet::new(&graphemes);
        Self {
            graphemes,
            alphabet,
            case_insensitive,
        }
    }

    #[must_use]
    pub fn graphemes(&self) -> &[String] {
        &self.graphemes
    }

    pub fn alphabet(&self) -> Result<&Alphabet, MatchError> {
        self.alphabet.as_ref().map_err(Clone::clone)
    }

    #[must_use]
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Length in graphemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graphemes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graphemes.is_empty()
    }
}
