//! Session access and error mapping for resolvers.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_graphql::{Context, Error, ErrorExtensions, Result};
use scribe_session::{Session, SessionError};
use tracing::error;

/// Session shared between requests. Queries take the read lock, mutations
/// the write lock. Neither is held across an await point.
pub type SharedSession = Arc<RwLock<Session>>;

/// Wrap a session for use as schema data.
pub fn shared(session: Session) -> SharedSession {
    Arc::new(RwLock::new(session))
}

pub(crate) fn read<'c>(ctx: &Context<'c>) -> Result<RwLockReadGuard<'c, Session>> {
    let session = ctx.data::<SharedSession>()?;
    session.read().map_err(|_| poisoned())
}

pub(crate) fn write<'c>(ctx: &Context<'c>) -> Result<RwLockWriteGuard<'c, Session>> {
    let session = ctx.data::<SharedSession>()?;
    session.write().map_err(|_| poisoned())
}

/// Map a session error to a GraphQL error carrying a `code` extension.
pub(crate) fn to_error(err: impl Into<SessionError>) -> Error {
    let err = err.into();
    let code = err.kind();
    Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}

fn poisoned() -> Error {
    error!("session lock poisoned");
    Error::new("Session unavailable").extend_with(|_, e| e.set("code", "INTERNAL"))
}
