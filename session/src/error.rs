//! Session error types.

use scribe_core::StoreError;
use scribe_mutation::MutationError;
use scribe_resolver::ResolveError;
use thiserror::Error;

/// Session errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A mutation was rejected by the integrity engine.
    #[error(transparent)]
    Mutation(#[from] MutationError),

    /// A relationship field could not be resolved.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The store refused a record while loading data.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SessionError {
    /// Stable label for the error kind, shared with the wrapped error.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionError::Mutation(e) => e.kind(),
            SessionError::Resolve(e) => e.kind(),
            SessionError::Store(_) => "STORE",
        }
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
