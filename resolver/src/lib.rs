//! Scribe Resolver
//!
//! Compute relationship (virtual) fields by traversal over the store:
//! - User.posts, User.comments (1-N, scanned in store order)
//! - Post.author, Comment.author, Comment.post (single lookups by id)
//! - Post.comments (1-N)
//!
//! All functions are pure reads. A dangling foreign key means an invariant
//! was broken elsewhere and is reported as an integrity error, never as an
//! ordinary not-found.

mod error;
mod fields;

pub use error::{ResolveError, ResolveResult};
pub use fields::*;
