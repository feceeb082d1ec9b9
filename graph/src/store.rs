//! Core record storage implementation.

use crate::collection::Collection;
use scribe_core::{Comment, EntityKind, Post, Record, StoreResult, User};

/// A record kind with a home collection in the [`Store`].
///
/// Kinds are closed: only users, posts and comments are stored, so asking
/// the store for an unknown kind cannot be expressed.
pub trait Stored: Record {
    fn collection(store: &Store) -> &Collection<Self>;
    fn collection_mut(store: &mut Store) -> &mut Collection<Self>;
}

impl Stored for User {
    fn collection(store: &Store) -> &Collection<Self> {
        &store.users
    }

    fn collection_mut(store: &mut Store) -> &mut Collection<Self> {
        &mut store.users
    }
}

impl Stored for Post {
    fn collection(store: &Store) -> &Collection<Self> {
        &store.posts
    }

    fn collection_mut(store: &mut Store) -> &mut Collection<Self> {
        &mut store.posts
    }
}

impl Stored for Comment {
    fn collection(store: &Store) -> &Collection<Self> {
        &store.comments
    }

    fn collection_mut(store: &mut Store) -> &mut Collection<Self> {
        &mut store.comments
    }
}

/// Record counts per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreCounts {
    pub users: usize,
    pub posts: usize,
    pub comments: usize,
}

impl StoreCounts {
    pub fn get(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::User => self.users,
            EntityKind::Post => self.posts,
            EntityKind::Comment => self.comments,
        }
    }
}

/// The in-memory record storage.
#[derive(Debug, Clone, Default)]
pub struct Store {
    users: Collection<User>,
    posts: Collection<Post>,
    comments: Collection<Comment>,
}

impl Store {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Record Operations ====================

    /// All records of a kind, in insertion order.
    pub fn list<R: Stored>(&self) -> &[R] {
        R::collection(self).as_slice()
    }

    /// Find a record by id.
    pub fn find<R: Stored>(&self, id: &R::Id) -> Option<&R> {
        R::collection(self).find(id)
    }

    /// Returns true if a record with this id is stored.
    pub fn contains<R: Stored>(&self, id: &R::Id) -> bool {
        R::collection(self).contains(id)
    }

    /// Append a record to its collection.
    pub fn insert<R: Stored>(&mut self, record: R) -> StoreResult<()> {
        R::collection_mut(self).insert(record)
    }

    /// Remove every record of a kind matching `predicate`.
    pub fn remove_where<R, F>(&mut self, predicate: F) -> Vec<R>
    where
        R: Stored,
        F: FnMut(&R) -> bool,
    {
        R::collection_mut(self).remove_where(predicate)
    }

    /// Remove a single record by id, if present.
    pub fn remove<R: Stored>(&mut self, id: &R::Id) -> Option<R> {
        R::collection_mut(self).remove(id)
    }

    // ==================== Statistics ====================

    pub fn len<R: Stored>(&self) -> usize {
        R::collection(self).len()
    }

    pub fn is_empty<R: Stored>(&self) -> bool {
        R::collection(self).is_empty()
    }

    /// Get the number of records in every collection.
    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            users: self.users.len(),
            posts: self.posts.len(),
            comments: self.comments.len(),
        }
    }

    pub fn users(&self) -> &[User] {
        self.users.as_slice()
    }

    pub fn posts(&self) -> &[Post] {
        self.posts.as_slice()
    }

    pub fn comments(&self) -> &[Comment] {
        self.comments.as_slice()
    }
}
