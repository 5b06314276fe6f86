//! Insertion-ordered occurrence counter.
//!
//! Rankings (busiest users, common words, emoji) order by descending count
//! and break ties by first occurrence. [`Counter`] keeps keys in the order
//! they were first seen, so a stable sort by count gives exactly that.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences of keys, remembering first-seen order.
#[derive(Debug, Clone)]
pub struct Counter<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Hash + Eq + Clone> Counter<K> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Counts one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 += 1;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, 1));
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries by descending count, ties in first-seen order, at most
    /// `limit` of them.
    pub fn most_common(&self, limit: Option<usize>) -> Vec<(K, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }
}

impl<K: Hash + Eq + Clone> Default for Counter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone> FromIterator<K> for Counter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Counter::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}
