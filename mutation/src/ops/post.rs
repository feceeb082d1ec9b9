//! Post operations - create against an existing author, delete with cascade.

use scribe_core::{Comment, CreatePostInput, EntityKind, Post, PostId};
use scribe_graph::Store;
use tracing::debug;

use crate::error::{MutationError, MutationResult};
use crate::ids::IdGenerator;
use crate::result::{CascadeReport, Deleted};
use crate::validation;

/// Create a post after checking the author reference.
pub fn execute_create_post(
    store: &mut Store,
    ids: &mut dyn IdGenerator,
    data: CreatePostInput,
) -> MutationResult<Post> {
    validation::check_author_exists(store, &data.author)?;

    let post = data.into_record(PostId::new(ids.next_id(EntityKind::Post)));
    store.insert(post.clone())?;
    Ok(post)
}

/// Delete a post and every comment attached to it.
pub fn execute_delete_post(store: &mut Store, id: &PostId) -> MutationResult<Deleted<Post>> {
    let post = store
        .remove::<Post>(id)
        .ok_or_else(|| MutationError::not_found(EntityKind::Post, id))?;

    let removed_comments = store.remove_where::<Comment, _>(|comment| comment.is_on(id));
    debug!(post = %id, comments = removed_comments.len(), "cascaded post delete");

    let cascade = CascadeReport {
        posts: Vec::new(),
        comments: removed_comments.into_iter().map(|comment| comment.id).collect(),
    };
    Ok(Deleted::new(post, cascade))
}
