//! Bit-parallel approximate search biased towards an expected location.

use crate::exact::{find_from, rfind_from};
use crate::{Alphabet, Mask, MatchOptions, ScoredMatch, Scorer};
use log::trace;

/// Working state of one search. Lives only for the duration of the call.
struct SearchState {
    /// Best score so far; candidates must not exceed it.
    threshold: f64,
    best: Option<usize>,
    /// Registers of the current error level, indexed by text position + 1.
    rd: Vec<Mask>,
    /// Registers of the previous error level.
    last_rd: Vec<Mask>,
}

impl SearchState {
    fn new(threshold: f64, capacity: usize) -> Self {
        Self {
            threshold,
            best: None,
            rd: Vec::with_capacity(capacity),
            last_rd: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    fn last(&self, j: usize) -> Mask {
        self.last_rd.get(j).copied().unwrap_or(0)
    }
}

/// Finds the lowest-scoring start index of `pattern` in `text` within
/// `options.threshold`, allowing insertions, deletions and substitutions.
///
/// `pattern` must be non-empty and described by `alphabet`; `location` must
/// already be clamped to `0..=text.len()`.
pub(crate) fn search<T: AsRef<str>, P: AsRef<str>>(
    text: &[T],
    pattern: &[P],
    alphabet: &Alphabet,
    location: usize,
    options: &MatchOptions,
) -> Option<ScoredMatch> {
    let pattern_len = pattern.len();
    let text_len = text.len();
    debug_assert!(pattern_len > 0 && location <= text_len);

    let scorer = Scorer::new(location, pattern_len, options.distance);
    let mut state = SearchState::new(options.threshold, text_len + pattern_len + 2);

    // Exact occurrences around the location bound the threshold up front.
    if let Some(i) = find_from(text, pattern, location) {
        state.threshold = state.threshold.min(scorer.score(0, i));
        if let Some(i) = rfind_from(text, pattern, location + pattern_len) {
            state.threshold = state.threshold.min(scorer.score(0, i));
        }
    }

    let match_mask: Mask = 1 << (pattern_len - 1);
    let mut bin_max = pattern_len + text_len;

    for errors in 0..pattern_len {
        // Widest drift from `location` that can still score within the
        // threshold at this error level.
        let mut bin_min = 0;
        let mut bin_mid = bin_max;
        while bin_min < bin_mid {
            if scorer.score(errors, location + bin_mid) <= state.threshold {
                bin_min = bin_mid;
            } else {
                bin_max = bin_mid;
            }
            bin_mid = (bin_max - bin_min) / 2 + bin_min;
        }
        bin_max = bin_mid;

        let mut start = (location + 1).saturating_sub(bin_mid).max(1);
        let finish = (location + bin_mid).min(text_len) + pattern_len;
        trace!(
            "errors={errors} window={}..{} threshold={:.4}",
            start - 1,
            finish,
            state.threshold
        );

        state.rd.clear();
        state.rd.resize(finish + 2, 0);
        state.rd[finish + 1] = (1 << errors) - 1;

        let mut j = finish;
        while j >= start {
            let char_match = text
                .get(j - 1)
                .map_or(0, |grapheme| alphabet.mask(grapheme.as_ref()));
            let mut register = ((state.rd[j + 1] << 1) | 1) & char_match;
            if errors > 0 {
                let next = state.last(j + 1);
                register |= ((next | state.last(j)) << 1) | 1 | next;
            }
            state.rd[j] = register;

            if register & match_mask != 0 {
                let score = scorer.score(errors, j - 1);
                if score <= state.threshold {
                    trace!("candidate at {} score={score:.4}", j - 1);
                    state.threshold = score;
                    state.best = Some(j - 1);
                    if j - 1 > location {
                        // Nothing further left than the mirror image can win.
                        start = (2 * location).saturating_sub(j - 1).max(1);
                    } else {
                        break;
                    }
                }
            }
            j -= 1;
        }

        if scorer.score(errors + 1, location) > state.threshold {
            break;
        }
        std::mem::swap(&mut state.rd, &mut state.last_rd);
    }

    state.best.map(|index| ScoredMatch {
        index,
        score: state.threshold,
    })
}
