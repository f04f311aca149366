//! Insertion-ordered adjacency mapping

use indexmap::{IndexMap, IndexSet};

/// Mapping from a node name to the ordered set of names it links to.
///
/// Keys keep insertion order. Values per key are unique and keep first-seen
/// order; re-adding an existing value is a no-op. Keys are created lazily on
/// first reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMap {
    entries: IndexMap<String, IndexSet<String>>,
}

impl AdjacencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the key if absent, leaving its list empty.
    pub fn ensure_key(&mut self, key: &str) {
        if !self.entries.contains_key(key) {
            self.entries.insert(key.to_string(), IndexSet::new());
        }
    }

    /// Append `value` to `key`'s list, creating the key if needed.
    /// Duplicate values are skipped.
    pub fn add_link(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_default().insert(value.into());
    }

    /// Union another mapping into this one. Keys new to `self` are appended
    /// in `other`'s order; for shared keys, only values not already present
    /// are appended, preserving first-seen order.
    pub fn merge(&mut self, other: AdjacencyMap) {
        for (key, values) in other.entries {
            let list = self.entries.entry(key).or_default();
            for value in values {
                list.insert(value);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&IndexSet<String>> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &IndexSet<String>)> {
        self.entries.iter()
    }
}

/// Count how many times each name appears across the mapping, once per
/// appearance as a key and once per appearance as a list member.
///
/// Derived per render; never stored.
pub fn degree_counts(map: &AdjacencyMap) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for (key, values) in map.iter() {
        *counts.entry(key.clone()).or_insert(0) += 1;
        for value in values {
            *counts.entry(value.clone()).or_insert(0) += 1;
        }
    }
    counts
}
