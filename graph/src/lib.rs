//! Scribe Graph Storage
//!
//! This crate provides the in-memory record store with indexed access:
//! - One ordered collection per record kind (users, posts, comments)
//! - Insertion order is preserved and is the order results are returned in
//! - Id index: find a record by id without scanning
//!
//! The store is a dumb container. Referential integrity is enforced one
//! layer up, by `scribe-mutation`.

mod collection;
mod index;
mod store;

pub use collection::Collection;
pub use store::*;
