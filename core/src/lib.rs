//! Scribe Core Types
//!
//! This crate provides the foundational types used throughout Scribe:
//! - Identity types (UserId, PostId, CommentId) and the EntityKind tag
//! - Record structures (User, Post, Comment) and the Record trait
//! - Create inputs for each record kind
//! - Store error types and shared error messages

mod entity;
mod error;
mod id;
mod input;
pub mod messages;

pub use entity::*;
pub use error::*;
pub use id::*;
pub use input::*;
