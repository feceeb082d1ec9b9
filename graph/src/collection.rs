//! A single ordered, id-indexed record collection.

use crate::index::IdIndex;
use scribe_core::{Record, StoreError, StoreResult};

/// Ordered storage for one record kind.
#[derive(Debug, Clone)]
pub struct Collection<R: Record> {
    records: Vec<R>,
    index: IdIndex<R::Id>,
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: IdIndex::new(),
        }
    }
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order.
    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by id.
    pub fn find(&self, id: &R::Id) -> Option<&R> {
        self.index.get(id).and_then(|pos| self.records.get(pos))
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.index.contains(id)
    }

    /// Append a record. Fails if the id is already present.
    pub fn insert(&mut self, record: R) -> StoreResult<()> {
        let id = record.id().clone();
        if self.index.contains(&id) {
            return Err(StoreError::duplicate_id(R::KIND, id.to_string()));
        }

        self.index.insert(id, self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Remove every record matching `predicate`, returning them in store
    /// order. Matching nothing is not an error.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> Vec<R>
    where
        F: FnMut(&R) -> bool,
    {
        let (removed, kept): (Vec<R>, Vec<R>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|record| predicate(record));

        self.records = kept;
        if !removed.is_empty() {
            self.index.rebuild(self.records.iter().map(|r| r.id()));
        }
        removed
    }

    /// Remove a single record by id, if present.
    pub fn remove(&mut self, id: &R::Id) -> Option<R> {
        let pos = self.index.get(id)?;
        let record = self.records.remove(pos);
        self.index.rebuild(self.records.iter().map(|r| r.id()));
        Some(record)
    }
}

impl<'a, R: Record> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
