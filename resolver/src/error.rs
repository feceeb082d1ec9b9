//! Resolver error types.

use scribe_core::EntityKind;
use thiserror::Error;

/// Result type for relationship resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur while resolving a relationship field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A foreign key points at a record that is not stored.
    #[error("Broken reference: {from} {from_id}.{field} -> missing {to} {to_id}")]
    Integrity {
        from: EntityKind,
        from_id: String,
        field: &'static str,
        to: EntityKind,
        to_id: String,
    },
}

impl ResolveError {
    pub fn integrity(
        from: EntityKind,
        from_id: impl ToString,
        field: &'static str,
        to: EntityKind,
        to_id: impl ToString,
    ) -> Self {
        Self::Integrity {
            from,
            from_id: from_id.to_string(),
            field,
            to,
            to_id: to_id.to_string(),
        }
    }

    /// Stable label for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::Integrity { .. } => "INTEGRITY",
        }
    }
}
