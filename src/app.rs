//! HTTP application assembly: REST routes, the GraphQL endpoint, and the
//! cross-cutting tower layers.

use std::sync::Arc;

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::graph::{self, AppSchema, StarLoaders};
use crate::store::{AssetStore, StarReader};

#[derive(Clone)]
struct GraphQlState {
    schema: AppSchema,
    reader: Arc<dyn StarReader>,
}

async fn graphql_handler(
    State(state): State<GraphQlState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    // Fresh loaders per request; batching and result maps must never outlive
    // the operation they were created for.
    let request = req.into_inner().data(StarLoaders::new(state.reader.clone()));
    state.schema.execute(request).await.into()
}

async fn sandbox() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>starboard - Apollo Sandbox</title>
    <style>body { margin: 0; overflow: hidden; }</style>
</head>
<body>
    <div id="sandbox" style="width: 100vw; height: 100vh;"></div>
    <script src="https://embeddable-sandbox.cdn.apollographql.com/_latest/embeddable-sandbox.umd.production.min.js"></script>
    <script>
        new window.EmbeddedSandbox({
            target: '#sandbox',
            initialEndpoint: window.location.origin + '/graphql',
        });
    </script>
</body>
</html>"#,
    )
}

/// Build the full router over one store.
///
/// `store` and `reader` are usually two handles to the same value; they are
/// separate parameters so the GraphQL side only sees the read seam.
pub fn build(store: Arc<dyn AssetStore>, reader: Arc<dyn StarReader>) -> Router {
    let schema = graph::build_schema(reader.clone());
    let gql = Router::new()
        .route("/graphql", get(sandbox).post(graphql_handler))
        .with_state(GraphQlState { schema, reader });

    Router::new()
        .merge(crate::rest::router(store))
        .merge(gql)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
