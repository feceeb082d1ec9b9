//! Create inputs.
//!
//! Inputs carry every field of a record except its id, which is assigned by
//! the integrity engine at creation time.

use crate::{Comment, CommentId, Post, PostId, User, UserId};
use serde::{Deserialize, Serialize};

/// Data for a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<i32>,
}

impl CreateUserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: None,
        }
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    /// Build the record under the given id.
    pub fn into_record(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}

/// Data for a new post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostInput {
    pub title: String,
    pub body: String,
    pub published: bool,
    pub author: UserId,
}

impl CreatePostInput {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        published: bool,
        author: impl Into<UserId>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            published,
            author: author.into(),
        }
    }

    pub fn into_record(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            body: self.body,
            published: self.published,
            author: self.author,
        }
    }
}

/// Data for a new comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCommentInput {
    pub text: String,
    pub author: UserId,
    pub post: PostId,
}

impl CreateCommentInput {
    pub fn new(
        text: impl Into<String>,
        author: impl Into<UserId>,
        post: impl Into<PostId>,
    ) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            post: post.into(),
        }
    }

    pub fn into_record(self, id: CommentId) -> Comment {
        Comment {
            id,
            text: self.text,
            author: self.author,
            post: self.post,
        }
    }
}
