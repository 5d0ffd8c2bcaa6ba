use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{Database, dto::common::PaginationParams};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    params(PaginationParams),
    responses(
        (status = 200, description = "Per-user season totals, highest score first"),
        (status = 400, description = "Invalid pagination")
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(db): State<Database>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, WebError> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let leaderboard = services::get_leaderboard(db.pool(), &pagination).await?;

    Ok(Json(leaderboard).into_response())
}
