use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{
    Database,
    dto::prediction::{PredictionResponse, SubmitPredictionRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::identity::UserId;

use super::services;

#[utoipa::path(
    post,
    path = "/api/events/{slug}/predictions",
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    request_body = SubmitPredictionRequest,
    responses(
        (status = 200, description = "Prediction stored", body = PredictionResponse),
        (status = 400, description = "Duplicate pick or position out of range"),
        (status = 401, description = "Missing user identity"),
        (status = 403, description = "Submissions are closed for this event"),
        (status = 404, description = "Event not found")
    ),
    tag = "predictions"
)]
pub async fn submit_prediction(
    State(db): State<Database>,
    UserId(user_id): UserId,
    Path(slug): Path<String>,
    Json(req): Json<SubmitPredictionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let prediction =
        services::submit_prediction(db.pool(), user_id, &slug, &req, Utc::now()).await?;

    tracing::info!(user = %user_id, event = %slug, "prediction stored");

    Ok(Json(prediction).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{slug}/predictions/me",
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    responses(
        (status = 200, description = "The caller's prediction", body = PredictionResponse),
        (status = 401, description = "Missing user identity"),
        (status = 404, description = "No prediction for this event")
    ),
    tag = "predictions"
)]
pub async fn my_prediction(
    State(db): State<Database>,
    UserId(user_id): UserId,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let prediction = services::my_prediction(db.pool(), user_id, &slug).await?;

    Ok(Json(prediction).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{slug}/predictions",
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    responses(
        (status = 200, description = "Every submitted prediction for the event", body = Vec<PredictionResponse>),
        (status = 404, description = "Event not found")
    ),
    tag = "predictions"
)]
pub async fn event_board(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let board = services::event_board(db.pool(), &slug).await?;

    Ok(Json(board).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/predictions",
    params(
        ("user_id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "The user's predictions, most recent round first", body = Vec<PredictionResponse>)
    ),
    tag = "predictions"
)]
pub async fn user_predictions(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let predictions = services::user_predictions(db.pool(), user_id).await?;

    Ok(Json(predictions).into_response())
}
