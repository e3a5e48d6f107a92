//! Input normalization shared by every layout.

use crate::Key;

/// Sort entries by key, ascending, and collapse duplicate keys.
///
/// The sort is stable, so the survivor of an equal-key run is the entry that
/// appeared first in the caller's input. Every layout builds from the output
/// of this function, which is what makes duplicate resolution identical and
/// deterministic across the whole family.
pub(crate) fn normalize<V>(mut entries: Vec<(Key, V)>) -> Vec<(Key, V)> {
    entries.sort_by_key(|e| e.0);
    entries.dedup_by_key(|e| e.0);
    entries
}

/// Precondition of the `from_sorted_entries` constructors: keys ascending
/// with no duplicates.
pub(crate) fn is_strictly_sorted<V>(entries: &[(Key, V)]) -> bool {
    entries.windows(2).all(|w| w[0].0 < w[1].0)
}
