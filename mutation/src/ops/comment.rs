//! Comment operations - create against an existing author and a published post.

use scribe_core::{Comment, CommentId, CreateCommentInput, EntityKind};
use scribe_graph::Store;

use crate::error::MutationResult;
use crate::ids::IdGenerator;
use crate::validation;

/// Create a comment. The author is checked before the post.
pub fn execute_create_comment(
    store: &mut Store,
    ids: &mut dyn IdGenerator,
    data: CreateCommentInput,
) -> MutationResult<Comment> {
    validation::check_author_exists(store, &data.author)?;
    validation::check_post_accepts_comments(store, &data.post)?;

    let comment = data.into_record(CommentId::new(ids.next_id(EntityKind::Comment)));
    store.insert(comment.clone())?;
    Ok(comment)
}
