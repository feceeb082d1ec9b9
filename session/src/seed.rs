//! Demo data set.
//!
//! Three users, three posts and four comments with small decimal ids. Every
//! foreign key resolves, every post is published, and user "1" owns enough
//! of the graph to exercise both cascade paths of a user delete.

use scribe_core::{Comment, CommentId, Post, PostId, StoreResult, User, UserId};
use scribe_graph::Store;

/// The seed users: `(id, name, email, age)`.
pub const USERS: [(&str, &str, &str, Option<i32>); 3] = [
    ("0", "Colby", "colby@care.com", Some(26)),
    ("1", "Rocky", "rocky@care.com", Some(2)),
    ("2", "Tootsie", "tootsie@care.com", None),
];

/// The seed posts: `(id, title, body, published, author)`.
pub const POSTS: [(&str, &str, &str, bool, &str); 3] = [
    ("0", "Hello world", "Hello all", true, "1"),
    ("1", "Nice to have you", "Wish you were here", true, "1"),
    ("2", "Goodbye", "So long farewell", true, "0"),
];

/// The seed comments: `(id, text, author, post)`.
pub const COMMENTS: [(&str, &str, &str, &str); 4] = [
    ("0", "This is good", "1", "0"),
    ("1", "This is bad", "1", "2"),
    ("2", "This is okay", "0", "0"),
    ("3", "This is not great", "2", "1"),
];

/// Build a store holding the demo data set.
pub fn demo_store() -> StoreResult<Store> {
    let mut store = Store::new();

    for (id, name, email, age) in USERS {
        store.insert(User {
            id: UserId::new(id),
            name: name.to_string(),
            email: email.to_string(),
            age,
        })?;
    }

    for (id, title, body, published, author) in POSTS {
        store.insert(Post {
            id: PostId::new(id),
            title: title.to_string(),
            body: body.to_string(),
            published,
            author: UserId::new(author),
        })?;
    }

    for (id, text, author, post) in COMMENTS {
        store.insert(Comment {
            id: CommentId::new(id),
            text: text.to_string(),
            author: UserId::new(author),
            post: PostId::new(post),
        })?;
    }

    Ok(store)
}
