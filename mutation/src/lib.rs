//! Scribe Mutation
//!
//! Execute write operations (create/delete for users, posts, comments).
//!
//! Responsibilities:
//! - Validate foreign keys and unique fields before any write
//! - Apply cascade deletions (user → posts → comments, post → comments)
//! - Assign ids to created records
//! - Leave the store untouched when a mutation is rejected
//!
//! # Module Structure
//!
//! - `executor` - Main MutationExecutor that coordinates operations
//! - `ops/` - Individual operation implementations (user, post, comment)
//! - `validation` - Shared existence and uniqueness checks
//! - `ids` - Id generation strategies
//! - `error` - Error types for mutation failures
//! - `result` - Result types for deletes and their cascades

mod error;
mod executor;
mod ids;
mod ops;
mod result;
mod validation;

pub use error::{MutationError, MutationResult};
pub use executor::MutationExecutor;
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use result::{CascadeReport, Deleted};
