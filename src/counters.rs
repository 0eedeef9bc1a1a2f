//! Mergeable counters keyed by string
//!
//! Counters start at zero on first use, and two counter maps can be merged by
//! adding their values key by key. Nothing here is thread safe; merge
//! per-thread maps instead of sharing one.

use std::collections::hash_map;

use rustc_hash::FxHashMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A map of `i64` counters keyed by `String`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ByString {
    counts: FxHashMap<String, i64>,
}

impl ByString {
    /// Creates an empty counter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `inc` to the counter for `key` and returns the updated value
    ///
    /// Counters wrap around on overflow instead of panicking.
    pub fn add(&mut self, key: &str, inc: i64) -> i64 {
        if let Some(slot) = self.counts.get_mut(key) {
            *slot = slot.wrapping_add(inc);
            return *slot;
        }
        self.counts.insert(key.to_owned(), inc);
        inc
    }

    /// Adds every counter of `other` into this map
    pub fn merge_with(&mut self, other: &ByString) {
        for (key, value) in &other.counts {
            self.add(key, *value);
        }
    }

    /// Returns the counter for `key`, zero if it was never touched
    pub fn get(&self, key: &str) -> i64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Returns the number of keys with a counter
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no counter was ever touched
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(key, value)` pairs in arbitrary order
    pub fn iter(&self) -> hash_map::Iter<'_, String, i64> {
        self.counts.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for ByString {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut counters = ByString::new();
        for (key, value) in iter {
            let slot = counters.counts.entry(key.into()).or_insert(0);
            *slot = slot.wrapping_add(value);
        }
        counters
    }
}

impl<'a> IntoIterator for &'a ByString {
    type Item = (&'a String, &'a i64);
    type IntoIter = hash_map::Iter<'a, String, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
