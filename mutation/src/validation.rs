//! Existence and uniqueness checks shared by mutation operations.
//!
//! Every check reads the store only; operations run all of them before the
//! first write.

use scribe_core::messages::{ERR_AUTHOR_MISSING, ERR_EMAIL_TAKEN, ERR_POST_INVALID};
use scribe_core::{Post, PostId, User, UserId};
use scribe_graph::Store;

use crate::error::{MutationError, MutationResult};

/// Check that no user already holds `email`.
pub fn check_email_available(store: &Store, email: &str) -> MutationResult<()> {
    if store.list::<User>().iter().any(|user| user.email == email) {
        return Err(MutationError::conflict("email", ERR_EMAIL_TAKEN));
    }
    Ok(())
}

/// Check that `author` references an existing user.
pub fn check_author_exists(store: &Store, author: &UserId) -> MutationResult<()> {
    if !store.contains::<User>(author) {
        return Err(MutationError::validation(ERR_AUTHOR_MISSING));
    }
    Ok(())
}

/// Check that `post` exists and is published.
pub fn check_post_accepts_comments(store: &Store, post: &PostId) -> MutationResult<()> {
    match store.find::<Post>(post) {
        Some(post) if post.published => Ok(()),
        _ => Err(MutationError::validation(ERR_POST_INVALID)),
    }
}
