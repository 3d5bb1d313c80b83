//! HTTP routing for the GraphQL endpoint.

use super::WorkboardSchema;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{Router, response::Html, routing::get};
use tower_http::trace::TraceLayer;

/// Path serving both GraphiQL (`GET`) and query execution (`POST`).
pub const GRAPHQL_PATH: &str = "/graphql";

/// Builds the application router.
///
/// Routes:
///
/// - `GET /graphql`: GraphiQL explorer
/// - `POST /graphql`: query and mutation execution
/// - `GET /health`: liveness check answering `ok`
#[must_use]
pub fn router(schema: WorkboardSchema) -> Router {
    Router::new()
        .route(
            GRAPHQL_PATH,
            get(graphiql).post_service(GraphQL::new(schema)),
        )
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> &'static str {
    "ok"
}
