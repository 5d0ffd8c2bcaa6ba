use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use storage::{
    Database,
    dto::event::{
        CreateEventRequest, EventDetailResponse, EventSummaryResponse, ReplaceSessionsRequest,
        SessionResponse,
    },
};
use utoipa::IntoParams;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[derive(Debug, Deserialize, IntoParams)]
pub struct EventListFilter {
    pub season_year: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/events",
    params(EventListFilter),
    responses(
        (status = 200, description = "List events with lock status and deadlines", body = Vec<EventSummaryResponse>)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(db): State<Database>,
    Query(filter): Query<EventListFilter>,
) -> Result<Json<Vec<EventSummaryResponse>>, WebError> {
    let events = services::list_events(db.pool(), filter.season_year, Utc::now()).await?;

    Ok(Json(events))
}

#[utoipa::path(
    get,
    path = "/api/events/next",
    responses(
        (status = 200, description = "The next event whose race has not started", body = EventDetailResponse),
        (status = 404, description = "Season is over")
    ),
    tag = "events"
)]
pub async fn next_event(State(db): State<Database>) -> Result<Response, WebError> {
    let event = services::next_event(db.pool(), Utc::now()).await?;

    Ok(Json(event).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{slug}",
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    responses(
        (status = 200, description = "Event with schedule and lock status", body = EventDetailResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let event = services::get_event(db.pool(), &slug, Utc::now()).await?;

    Ok(Json(event).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event created", body = EventSummaryResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Slug or round already exists")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(db.pool(), &req, Utc::now()).await?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/events/{slug}/sessions",
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    request_body = ReplaceSessionsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Schedule replaced", body = Vec<SessionResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn replace_sessions(
    State(db): State<Database>,
    Path(slug): Path<String>,
    Json(req): Json<ReplaceSessionsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_unique_types()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let sessions = services::replace_sessions(db.pool(), &slug, &req).await?;

    Ok(Json(sessions).into_response())
}
