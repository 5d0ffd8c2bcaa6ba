use axum::{Router, middleware, routing::post, routing::put};
use storage::Database;

use super::handlers::{record_result, score_events};
use crate::middleware::auth::{ApiKeys, require_auth};

/// Result entry, nested under `/api/events`. Admin only.
pub fn event_routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/:slug/result", put(record_result))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}

/// Batch scoring, nested under `/api/results`. Admin only.
pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/score", post(score_events))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
