//! Relational references: URLs whose last path segment is a record id.

use std::collections::HashSet;

/// Extracts the id encoded in the last path segment of `reference`.
///
/// Returns `0` when the segment is empty, non-numeric, negative, or does not
/// fit an `i32`. Upstream ids start at 1, so `0` never names a real record.
#[must_use]
pub fn resolve_id(reference: &str) -> i32 {
    let segment = reference.rsplit('/').next().unwrap_or_default();

    match segment.parse::<i32>() {
        Ok(id) if id > 0 => id,
        _ => 0,
    }
}

/// Resolves every reference and keeps each id once, in first-seen order.
#[must_use]
pub fn dedupe<I, S>(references: I) -> Vec<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    references
        .into_iter()
        .map(|r| resolve_id(r.as_ref()))
        .filter(|id| seen.insert(*id))
        .collect()
}
