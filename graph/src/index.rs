//! Indexes for efficient record lookups.

use std::collections::HashMap;
use std::hash::Hash;

/// Id index: Id -> position in the owning collection.
#[derive(Debug, Clone)]
pub struct IdIndex<K> {
    positions: HashMap<K, usize>,
}

impl<K> Default for IdIndex<K> {
    fn default() -> Self {
        Self {
            positions: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> IdIndex<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: K, position: usize) {
        self.positions.insert(key, position);
    }

    pub fn get(&self, key: &K) -> Option<usize> {
        self.positions.get(key).copied()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Rebuild from the collection's keys, in collection order.
    ///
    /// Removal shifts positions, so the index is recomputed rather than
    /// patched.
    pub fn rebuild<'a, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        self.positions.clear();
        for (position, key) in keys.into_iter().enumerate() {
            self.positions.insert(key.clone(), position);
        }
    }
}
