//! Raw text fields of the manual test rig, parsed once into a validated
//! query.

use crate::{MatchError, MatchOptions, MatchResult, locate};
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

/// The five input fields exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessFields {
    pub sample_text: String,
    pub pattern: String,
    pub location: String,
    pub distance: String,
    pub threshold: String,
    pub ignore_case: bool,
}

/// Validated search request.
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessQuery {
    pub sample_text: String,
    pub pattern: String,
    pub location: isize,
    pub options: MatchOptions,
}

fn parse_field<T: FromStr>(field: &'static str, raw: &str) -> Result<T, MatchError>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|err: T::Err| MatchError::InvalidParameter {
            field,
            value: raw.to_owned(),
            reason: err.to_string(),
        })
}

/// Parses an integer field, saturating at `min`/`max` when the digits do not
/// fit.
fn parse_saturating<T>(field: &'static str, raw: &str, min: T, max: T) -> Result<T, MatchError>
where
    T: FromStr<Err = ParseIntError>,
{
    match raw.trim().parse::<T>() {
        Ok(value) => Ok(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(max),
            IntErrorKind::NegOverflow => Ok(min),
            _ => Err(MatchError::InvalidParameter {
                field,
                value: raw.to_owned(),
                reason: err.to_string(),
            }),
        },
    }
}

impl HarnessFields {
    /// Parses the numeric fields. Integers too large for their type saturate,
    /// negative distances clamp to `0` and the threshold clamps into
    /// `[0, 1]`; text that is not a number is rejected.
    pub fn parse(&self) -> Result<HarnessQuery, MatchError> {
        let location = parse_saturating("location", &self.location, isize::MIN, isize::MAX)?;
        let distance = parse_saturating("distance", &self.distance, i128::MIN, i128::MAX)?;
        let threshold: f64 = parse_field("threshold", &self.threshold)?;
        if !threshold.is_finite() {
            return Err(MatchError::InvalidParameter {
                field: "threshold",
                value: self.threshold.clone(),
                reason: "must be a finite number".to_owned(),
            });
        }
        let options = MatchOptions::new()
            .threshold(threshold)
            .distance(usize::try_from(distance.max(0)).unwrap_or(usize::MAX))
            .case_insensitive(self.ignore_case);
        Ok(HarnessQuery {
            sample_text: self.sample_text.clone(),
            pattern: self.pattern.clone(),
            location,
            options,
        })
    }
}

impl HarnessQuery {
    #[must_use]
    pub fn run(&self) -> MatchResult {
        locate(&self.sample_text, &self.pattern, self.location, &self.options)
    }
}
