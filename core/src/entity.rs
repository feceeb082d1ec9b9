//! Record structures for Scribe.
//!
//! Users, posts and comments are the three record kinds held by the store.
//! Relationships are expressed as id-valued foreign keys; no record owns
//! another.

use crate::{CommentId, EntityKind, PostId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// A record that can live in a store collection.
pub trait Record: Clone + fmt::Debug {
    /// Identifier type of this record kind.
    type Id: Clone + Eq + Hash + fmt::Display + fmt::Debug;

    /// Collection this record belongs to.
    const KIND: EntityKind;

    /// The record's identifier.
    fn id(&self) -> &Self::Id;
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Unique across all users.
    pub email: String,
    pub age: Option<i32>,
}

impl Record for User {
    type Id = UserId;
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> &UserId {
        &self.id
    }
}

/// A post authored by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub published: bool,
    /// Foreign key to the authoring user.
    pub author: UserId,
}

impl Post {
    /// Returns true if the post was written by `user`.
    pub fn is_authored_by(&self, user: &UserId) -> bool {
        &self.author == user
    }
}

impl Record for Post {
    type Id = PostId;
    const KIND: EntityKind = EntityKind::Post;

    fn id(&self) -> &PostId {
        &self.id
    }
}

/// A comment left by a user on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    /// Foreign key to the authoring user.
    pub author: UserId,
    /// Foreign key to the post commented on.
    pub post: PostId,
}

impl Comment {
    /// Returns true if the comment was written by `user`.
    pub fn is_authored_by(&self, user: &UserId) -> bool {
        &self.author == user
    }

    /// Returns true if the comment is attached to `post`.
    pub fn is_on(&self, post: &PostId) -> bool {
        &self.post == post
    }
}

impl Record for Comment {
    type Id = CommentId;
    const KIND: EntityKind = EntityKind::Comment;

    fn id(&self) -> &CommentId {
        &self.id
    }
}
