//! Mutation operation implementations.
//!
//! Each submodule implements one record kind's writes:
//! - `user` - create (unique email) / delete (cascade to posts and comments)
//! - `post` - create (author must exist) / delete (cascade to comments)
//! - `comment` - create (author must exist, post must be published)

mod comment;
mod post;
mod user;

pub use comment::execute_create_comment;
pub use post::{execute_create_post, execute_delete_post};
pub use user::{execute_create_user, execute_delete_user};
