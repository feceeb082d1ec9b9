//! Common error types for Scribe.

use crate::EntityKind;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record with this id is already stored.
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: EntityKind, id: String },
}

impl StoreError {
    pub fn duplicate_id(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            kind,
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
