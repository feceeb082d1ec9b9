//! Relationship field resolution.

use scribe_core::{Comment, EntityKind, Post, User};
use scribe_graph::Store;

use crate::error::{ResolveError, ResolveResult};

/// Posts written by `user`, in store order.
pub fn user_posts<'s>(store: &'s Store, user: &User) -> Vec<&'s Post> {
    store
        .posts()
        .iter()
        .filter(|post| post.is_authored_by(&user.id))
        .collect()
}

/// Comments written by `user`, in store order.
pub fn user_comments<'s>(store: &'s Store, user: &User) -> Vec<&'s Comment> {
    store
        .comments()
        .iter()
        .filter(|comment| comment.is_authored_by(&user.id))
        .collect()
}

/// The user who wrote `post`.
pub fn post_author<'s>(store: &'s Store, post: &Post) -> ResolveResult<&'s User> {
    store.find::<User>(&post.author).ok_or_else(|| {
        ResolveError::integrity(
            EntityKind::Post,
            &post.id,
            "author",
            EntityKind::User,
            &post.author,
        )
    })
}

/// Comments attached to `post`, in store order.
pub fn post_comments<'s>(store: &'s Store, post: &Post) -> Vec<&'s Comment> {
    store
        .comments()
        .iter()
        .filter(|comment| comment.is_on(&post.id))
        .collect()
}

/// The user who wrote `comment`.
pub fn comment_author<'s>(store: &'s Store, comment: &Comment) -> ResolveResult<&'s User> {
    store.find::<User>(&comment.author).ok_or_else(|| {
        ResolveError::integrity(
            EntityKind::Comment,
            &comment.id,
            "author",
            EntityKind::User,
            &comment.author,
        )
    })
}

/// The post `comment` is attached to.
pub fn comment_post<'s>(store: &'s Store, comment: &Comment) -> ResolveResult<&'s Post> {
    store.find::<Post>(&comment.post).ok_or_else(|| {
        ResolveError::integrity(
            EntityKind::Comment,
            &comment.id,
            "post",
            EntityKind::Post,
            &comment.post,
        )
    })
}
