//! Exact grapheme-sequence search used to seed the bit-parallel pass and as
//! the fallback for patterns too long for it.

#[inline]
pub(crate) fn matches_at<T: AsRef<str>, P: AsRef<str>>(
    text: &[T],
    pattern: &[P],
    at: usize,
) -> bool {
    text.get(at..at + pattern.len()).is_some_and(|window| {
        window
            .iter()
            .zip(pattern)
            .all(|(t, p)| t.as_ref() == p.as_ref())
    })
}

/// First occurrence starting at or after `from`.
pub(crate) fn find_from<T: AsRef<str>, P: AsRef<str>>(
    text: &[T],
    pattern: &[P],
    from: usize,
) -> Option<usize> {
    let last = text.len().checked_sub(pattern.len())?;
    (from..=last).find(|&i| matches_at(text, pattern, i))
}

/// Last occurrence starting at or before `from`.
pub(crate) fn rfind_from<T: AsRef<str>, P: AsRef<str>>(
    text: &[T],
    pattern: &[P],
    from: usize,
) -> Option<usize> {
    let last = text.len().checked_sub(pattern.len())?;
    (0..=from.min(last))
        .rev()
        .find(|&i| matches_at(text, pattern, i))
}

/// Occurrence closest to `location`, probing outward. On equal distance the
/// earlier one wins.
pub(crate) fn find_nearest<T: AsRef<str>, P: AsRef<str>>(
    text: &[T],
    pattern: &[P],
    location: usize,
) -> Option<usize> {
    let last = text.len().checked_sub(pattern.len())?;
    let reach = location.max(last.saturating_sub(location));
    for offset in 0..=reach {
        if let Some(i) = location.checked_sub(offset) {
            if i <= last && matches_at(text, pattern, i) {
                return Some(i);
            }
        }
        let i = location + offset;
        if offset > 0 && i <= last && matches_at(text, pattern, i) {
            return Some(i);
        }
    }
    None
}
