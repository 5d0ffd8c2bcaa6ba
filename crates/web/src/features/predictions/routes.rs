use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{event_board, my_prediction, submit_prediction, user_predictions};

/// Prediction routes nested under `/api/events`.
pub fn event_routes() -> Router<Database> {
    Router::new()
        .route("/:slug/predictions", post(submit_prediction))
        .route("/:slug/predictions", get(event_board))
        .route("/:slug/predictions/me", get(my_prediction))
}

/// Prediction routes nested under `/api/users`.
pub fn user_routes() -> Router<Database> {
    Router::new().route("/:user_id/predictions", get(user_predictions))
}
