//! Deduplication and final ordering.

use std::collections::HashSet;

use super::data::ClassifiedCandidate;

/// Keep the first occurrence of every name, then sort by name.
///
/// Which duplicate survives depends on the incoming order (priority order
/// after classification); the returned list is ordered by `value` using
/// code point comparison, so presentation no longer reflects priority.
pub fn dedupe(candidates: Vec<ClassifiedCandidate>) -> Vec<ClassifiedCandidate> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique: Vec<ClassifiedCandidate> = candidates
        .into_iter()
        .filter(|c| seen.insert(c.value.clone()))
        .collect();

    unique.sort_by(|a, b| a.value.cmp(&b.value));
    unique
}
