//! Identity types for Scribe records.
//!
//! All identifiers are opaque strings that are:
//! - Unique within their kind
//! - Immutable once assigned
//! - Distinct types per kind, so a post id cannot stand in for a user id

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an id from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw token.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the id, returning the raw token.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Unique identifier for a user.
    UserId
}

string_id! {
    /// Unique identifier for a post.
    PostId
}

string_id! {
    /// Unique identifier for a comment.
    CommentId
}

/// The three record collections held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Post,
    Comment,
}

impl EntityKind {
    /// All kinds, in dependency order (parents first).
    pub const ALL: [EntityKind; 3] = [EntityKind::User, EntityKind::Post, EntityKind::Comment];

    /// Collection name as exposed by the query surface.
    pub fn collection_name(&self) -> &'static str {
        match self {
            EntityKind::User => "users",
            EntityKind::Post => "posts",
            EntityKind::Comment => "comments",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => write!(f, "User"),
            EntityKind::Post => write!(f, "Post"),
            EntityKind::Comment => write!(f, "Comment"),
        }
    }
}
