use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::event::EventSummaryResponse,
    dto::result::{RecordResultRequest, ScoreEventsRequest},
    services::scoring::ScoringReport,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    put,
    path = "/api/events/{slug}/result",
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    request_body = RecordResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Result recorded", body = EventSummaryResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "results"
)]
pub async fn record_result(
    State(db): State<Database>,
    Path(slug): Path<String>,
    Json(req): Json<RecordResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_distinct_drivers()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let event = services::record_result(db.pool(), &slug, &req).await?;

    tracing::info!(event = %slug, "result recorded");

    Ok(Json(event).into_response())
}

#[utoipa::path(
    post,
    path = "/api/results/score",
    request_body = ScoreEventsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Scoring run report; events without results are skipped, not failed", body = ScoringReport),
        (status = 400, description = "Empty event selection"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "results"
)]
pub async fn score_events(
    State(db): State<Database>,
    Json(req): Json<ScoreEventsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let report = services::score_events(db.pool(), &req).await?;

    tracing::info!(
        events_scored = report.events_scored,
        events_skipped = report.events_skipped,
        events_unknown = report.events_unknown,
        predictions_scored = report.predictions_scored,
        "batch scoring finished"
    );

    Ok(Json(report).into_response())
}
