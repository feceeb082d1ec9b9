//! Request building for the `query` command.

use anyhow::{Context, Result};
use async_graphql::{Request, Variables};
use scribe_session::Session;

/// Resolve a query argument: `@path` reads the query from a file.
pub fn load_query(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read query file {}", path)),
        None => Ok(arg.to_string()),
    }
}

/// Build a request, attaching variables given as a JSON object.
pub fn build_request(query: String, variables: Option<&str>) -> Result<Request> {
    let mut request = Request::new(query);
    if let Some(vars) = variables {
        let vars: serde_json::Value =
            serde_json::from_str(vars).context("variables must be valid JSON")?;
        request = request.variables(Variables::from_json(vars));
    }
    Ok(request)
}

/// A fresh session, seeded with the demo data unless `empty` is set.
pub fn open_session(empty: bool) -> Result<Session> {
    if empty {
        return Ok(Session::new());
    }
    Session::seeded().context("failed to load demo data")
}
