//! Sorted-array baseline: two parallel arrays and a classical lower-bound
//! binary search.
//!
//! This layout exists to validate the harder ones and to anchor latency
//! comparisons. Each probe of the search depends on memory the branch
//! predictor has not seen, so roughly half of the log2(n) branches
//! mispredict on random queries.

use crate::{build, Key};

/// A static key-value map over a sorted pair of parallel arrays.
pub struct SortedMap<V> {
    keys: Vec<Key>,
    vals: Vec<V>,
}

impl<V> SortedMap<V> {
    /// Build a map from arbitrary entries.
    ///
    /// Entries are sorted internally; when several entries share a key, the
    /// one that appears first in `entries` wins.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arraylayout::SortedMap;
    /// let m = SortedMap::from_entries(vec![(42, "a"), (7, "b")]);
    /// assert_eq!(m.find(7), Some(&"b"));
    /// assert_eq!(m.find(8), None);
    /// ```
    pub fn from_entries(entries: Vec<(Key, V)>) -> Self {
        Self::from_sorted_entries(build::normalize(entries))
    }

    /// Build a map from entries that are already sorted by key with no
    /// duplicate keys, skipping normalization.
    ///
    /// Handing this function unsorted or duplicated keys is not detected in
    /// release builds and makes lookups return arbitrary results.
    pub fn from_sorted_entries(entries: Vec<(Key, V)>) -> Self {
        debug_assert!(build::is_strictly_sorted(&entries));
        let mut keys = Vec::with_capacity(entries.len());
        let mut vals = Vec::with_capacity(entries.len());
        for (key, val) in entries {
            keys.push(key);
            vals.push(val);
        }
        SortedMap { keys, vals }
    }

    /// Look up the value stored under `key`.
    pub fn find(&self, key: Key) -> Option<&V> {
        let i = self.keys.partition_point(|&k| k < key);
        if i < self.keys.len() && self.keys[i] == key {
            Some(&self.vals[i])
        } else {
            None
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the map stores no entries.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<V> From<Vec<(Key, V)>> for SortedMap<V> {
    fn from(entries: Vec<(Key, V)>) -> Self {
        Self::from_entries(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_bound_hits_only_on_equal_key() {
        let m = SortedMap::from_entries(vec![(10, 'a'), (20, 'b'), (30, 'c')]);
        assert_eq!(m.find(9), None);
        assert_eq!(m.find(10), Some(&'a'));
        assert_eq!(m.find(11), None);
        assert_eq!(m.find(30), Some(&'c'));
        assert_eq!(m.find(31), None);
    }

    #[test]
    fn keys_and_vals_stay_parallel() {
        let m = SortedMap::from_entries(vec![(5, 50), (1, 10), (3, 30)]);
        assert_eq!(m.find(1), Some(&10));
        assert_eq!(m.find(3), Some(&30));
        assert_eq!(m.find(5), Some(&50));
        assert_eq!(m.len(), 3);
    }
}
