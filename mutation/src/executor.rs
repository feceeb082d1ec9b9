//! Mutation executor - coordinates mutation operations.
//!
//! The executor delegates to specialized operation modules in `ops/`:
//! - `ops/user.rs` - createUser / deleteUser (cascade)
//! - `ops/post.rs` - createPost / deletePost (cascade)
//! - `ops/comment.rs` - createComment

use scribe_core::{
    Comment, CreateCommentInput, CreatePostInput, CreateUserInput, Post, PostId, User, UserId,
};
use scribe_graph::Store;
use tracing::{info, warn};

use crate::error::MutationResult;
use crate::ids::IdGenerator;
use crate::ops;
use crate::result::Deleted;

/// Mutation executor.
pub struct MutationExecutor<'s, 'i> {
    store: &'s mut Store,
    ids: &'i mut dyn IdGenerator,
}

impl<'s, 'i> MutationExecutor<'s, 'i> {
    /// Create a new executor.
    pub fn new(store: &'s mut Store, ids: &'i mut dyn IdGenerator) -> Self {
        Self { store, ids }
    }

    /// Create a user with a unique email.
    pub fn create_user(&mut self, data: CreateUserInput) -> MutationResult<User> {
        let result = ops::execute_create_user(self.store, self.ids, data);
        if let Ok(user) = &result {
            info!(user = %user.id, "created user");
        }
        rejected("createUser", result)
    }

    /// Delete a user, its posts, the comments on those posts and its own comments.
    pub fn delete_user(&mut self, id: &UserId) -> MutationResult<Deleted<User>> {
        let result = ops::execute_delete_user(self.store, id);
        if let Ok(deleted) = &result {
            info!(user = %id, cascaded = deleted.cascade.total(), "deleted user");
        }
        rejected("deleteUser", result)
    }

    /// Create a post for an existing author.
    pub fn create_post(&mut self, data: CreatePostInput) -> MutationResult<Post> {
        let result = ops::execute_create_post(self.store, self.ids, data);
        if let Ok(post) = &result {
            info!(post = %post.id, author = %post.author, "created post");
        }
        rejected("createPost", result)
    }

    /// Delete a post and its comments.
    pub fn delete_post(&mut self, id: &PostId) -> MutationResult<Deleted<Post>> {
        let result = ops::execute_delete_post(self.store, id);
        if let Ok(deleted) = &result {
            info!(post = %id, cascaded = deleted.cascade.total(), "deleted post");
        }
        rejected("deletePost", result)
    }

    /// Create a comment on a published post.
    pub fn create_comment(&mut self, data: CreateCommentInput) -> MutationResult<Comment> {
        let result = ops::execute_create_comment(self.store, self.ids, data);
        if let Ok(comment) = &result {
            info!(comment = %comment.id, post = %comment.post, "created comment");
        }
        rejected("createComment", result)
    }
}

fn rejected<T>(operation: &'static str, result: MutationResult<T>) -> MutationResult<T> {
    if let Err(e) = &result {
        warn!(operation, kind = e.kind(), error = %e, "mutation rejected");
    }
    result
}
