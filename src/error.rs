use thiserror::Error;

/// Errors surfaced by pattern compilation and harness field parsing.
///
/// The search itself never fails: [`MatchError::UnsupportedPatternLength`] is
/// recovered inside [`FuzzyMatcher::locate`](crate::FuzzyMatcher::locate) and
/// [`MatchError::InvalidParameter`] only comes out of
/// [`HarnessFields::parse`](crate::HarnessFields::parse).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("pattern is {len} graphemes long, bit-parallel search supports at most {max}")]
    UnsupportedPatternLength { len: usize, max: usize },

    #[error("invalid {field} {value:?}: {reason}")]
    InvalidParameter {
        field: &'static str,
        value: String,
        reason: String,
    },
}
