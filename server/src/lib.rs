//! Scribe server library.
//!
//! - `cli`: command-line arguments (`serve`, `query`, `schema`)
//! - `http`: the axum router serving GraphQL, GraphiQL and a health check
//! - `request`: building GraphQL requests from command-line input

pub mod cli;
mod http;
mod request;

pub use http::build_router;
pub use request::{build_request, load_query, open_session};
