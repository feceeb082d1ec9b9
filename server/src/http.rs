//! HTTP routes.

use async_graphql::http::GraphiQLSource;
use axum::{
    extract::State,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use scribe_graphql::ScribeSchema;
use tracing::debug;

async fn graphql_handler(
    State(schema): State<ScribeSchema>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    debug!(operation = ?request.operation_name, "graphql request");
    Json(schema.execute(request).await)
}

async fn graphiql_handler() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health_handler() -> &'static str {
    "OK"
}

/// Build the HTTP router over a schema.
pub fn build_router(schema: ScribeSchema) -> Router {
    Router::new()
        .route("/graphql", post(graphql_handler).get(graphiql_handler))
        .route("/health", get(health_handler))
        .with_state(schema)
}
