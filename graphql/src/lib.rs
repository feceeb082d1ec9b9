//! GraphQL API for Scribe
//!
//! - [`QueryRoot`]: `users`, `posts`, `comments`
//! - [`MutationRoot`]: create and delete operations
//!
//! Object types resolve their relationship fields (`User.posts`,
//! `Post.author`, ...) lazily against the shared session.

mod context;
mod mutation;
mod query;
mod types;

pub use context::{shared, SharedSession};
pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::*;

use async_graphql::{EmptySubscription, Schema};

/// The Scribe schema. Subscriptions are not supported.
pub type ScribeSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over a shared session.
pub fn build_schema(session: SharedSession) -> ScribeSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(session)
        .finish()
}
