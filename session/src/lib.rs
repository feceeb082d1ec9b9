//! Scribe Session
//!
//! A session owns one [`Store`](scribe_graph::Store) and the id generator
//! used for created records, and exposes the full operation surface:
//! searchable collection queries and integrity-checked mutations.
//!
//! Operations can be called through the typed methods on [`Session`] or
//! routed by value through [`Operation`] and [`Session::execute`].

mod error;
mod operation;
pub mod seed;
mod session;

pub use error::{SessionError, SessionResult};
pub use operation::{Operation, OperationOutput};
pub use session::Session;
