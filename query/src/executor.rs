//! Query execution.

use scribe_core::{Comment, Post, User};
use scribe_graph::{Store, Stored};

use crate::filter::{SearchFilter, TextMatch};

/// Query executor.
pub struct QueryExecutor<'s> {
    store: &'s Store,
}

impl<'s> QueryExecutor<'s> {
    /// Create a new executor.
    pub fn new(store: &'s Store) -> Self {
        Self { store }
    }

    /// Users whose name contains `query`, or all users.
    pub fn users(&self, query: Option<&str>) -> Vec<&'s User> {
        self.search(query)
    }

    /// Posts whose title or body contains `query`, or all posts.
    pub fn posts(&self, query: Option<&str>) -> Vec<&'s Post> {
        self.search(query)
    }

    /// All comments.
    pub fn comments(&self) -> Vec<&'s Comment> {
        self.store.list::<Comment>().iter().collect()
    }

    /// Filter one collection by a search term, keeping store order.
    pub fn search<R>(&self, query: Option<&str>) -> Vec<&'s R>
    where
        R: Stored + SearchFilter,
    {
        let records = self.store.list::<R>().iter();
        match TextMatch::new(query) {
            Some(term) => records.filter(|r| r.matches_search(&term)).collect(),
            None => records.collect(),
        }
    }
}
