//! Mutation result types.

use scribe_core::{CommentId, PostId};

/// Result of a delete: the removed record plus everything removed with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Deleted<R> {
    /// The record the delete targeted.
    pub record: R,
    /// Dependent records removed as a side effect.
    pub cascade: CascadeReport,
}

impl<R> Deleted<R> {
    pub fn new(record: R, cascade: CascadeReport) -> Self {
        Self { record, cascade }
    }

    /// Drop the cascade details, keeping the record.
    pub fn into_record(self) -> R {
        self.record
    }
}

/// Ids of records removed by cascade, in store order per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub posts: Vec<PostId>,
    pub comments: Vec<CommentId>,
}

impl CascadeReport {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.comments.is_empty()
    }

    /// Number of dependent records removed.
    pub fn total(&self) -> usize {
        self.posts.len() + self.comments.len()
    }
}
