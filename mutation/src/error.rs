//! Mutation error types.

use scribe_core::{EntityKind, StoreError};
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur during mutation execution.
///
/// Every variant is raised before the store is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    /// A unique field already holds this value.
    #[error("{message}")]
    Conflict { field: String, message: String },

    /// The operation target does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// A referenced record is missing or in the wrong state.
    #[error("{message}")]
    Validation { message: String },

    /// The store rejected the write.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl MutationError {
    pub fn conflict(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conflict {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(kind: EntityKind, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Stable label for the error kind, used by outer layers as an error code.
    pub fn kind(&self) -> &'static str {
        match self {
            MutationError::Conflict { .. } => "CONFLICT",
            MutationError::NotFound { .. } => "NOT_FOUND",
            MutationError::Validation { .. } => "VALIDATION",
            MutationError::Store(_) => "STORE",
        }
    }
}
