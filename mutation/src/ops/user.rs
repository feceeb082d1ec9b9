//! User operations - create with unique email, delete with cascade.

use scribe_core::{Comment, CreateUserInput, EntityKind, Post, PostId, User, UserId};
use scribe_graph::Store;
use std::collections::HashSet;
use tracing::debug;

use crate::error::{MutationError, MutationResult};
use crate::ids::IdGenerator;
use crate::result::{CascadeReport, Deleted};
use crate::validation;

/// Create a user after checking email uniqueness.
pub fn execute_create_user(
    store: &mut Store,
    ids: &mut dyn IdGenerator,
    data: CreateUserInput,
) -> MutationResult<User> {
    validation::check_email_available(store, &data.email)?;

    let user = data.into_record(UserId::new(ids.next_id(EntityKind::User)));
    store.insert(user.clone())?;
    Ok(user)
}

/// Delete a user and everything that depends on it.
///
/// Posts authored by the user go first, taking their comments with them;
/// then any remaining comments the user wrote on other posts. A comment
/// reached by both rules is removed once.
pub fn execute_delete_user(store: &mut Store, id: &UserId) -> MutationResult<Deleted<User>> {
    let user = store
        .remove::<User>(id)
        .ok_or_else(|| MutationError::not_found(EntityKind::User, id))?;

    let removed_posts = store.remove_where::<Post, _>(|post| post.is_authored_by(id));
    let post_ids: HashSet<&PostId> = removed_posts.iter().map(|post| &post.id).collect();

    let mut removed_comments =
        store.remove_where::<Comment, _>(|comment| post_ids.contains(&comment.post));
    debug!(
        user = %id,
        posts = removed_posts.len(),
        comments = removed_comments.len(),
        "cascaded user delete through authored posts"
    );

    // Comments already removed above no longer match, so this is remove-if-present.
    let own_comments = store.remove_where::<Comment, _>(|comment| comment.is_authored_by(id));
    debug!(user = %id, comments = own_comments.len(), "removed remaining comments by user");
    removed_comments.extend(own_comments);

    let cascade = CascadeReport {
        posts: removed_posts.into_iter().map(|post| post.id).collect(),
        comments: removed_comments.into_iter().map(|comment| comment.id).collect(),
    };
    Ok(Deleted::new(user, cascade))
}
