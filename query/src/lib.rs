//! Scribe Query
//!
//! Execute read operations over the store (`users`, `posts`, `comments`).
//!
//! Responsibilities:
//! - Apply case-insensitive substring search filters
//! - Preserve store insertion order in every result
//!
//! Queries never fail: an empty or absent search term returns the whole
//! collection.

mod executor;
mod filter;

pub use executor::QueryExecutor;
pub use filter::{SearchFilter, TextMatch};
