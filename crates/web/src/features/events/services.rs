use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use storage::{
    dto::event::{
        CreateEventRequest, EventDetailResponse, EventSummaryResponse, ReplaceSessionsRequest,
        SessionResponse,
    },
    error::Result,
    models::Session,
    repository::event::EventRepository,
    services::lock,
};
use uuid::Uuid;

/// List events with submission-window status, optionally one season only.
pub async fn list_events(
    pool: &PgPool,
    season_year: Option<i32>,
    now: DateTime<Utc>,
) -> Result<Vec<EventSummaryResponse>> {
    let repo = EventRepository::new(pool);
    let events = repo.list(season_year).await?;

    let event_ids: Vec<Uuid> = events.iter().map(|e| e.event_id).collect();
    let mut by_event: HashMap<Uuid, Vec<Session>> = HashMap::new();
    for session in repo.sessions_for_events(&event_ids).await? {
        by_event.entry(session.event_id).or_default().push(session);
    }

    let empty = Vec::new();
    Ok(events
        .iter()
        .map(|event| {
            let sessions = by_event.get(&event.event_id).unwrap_or(&empty);
            EventSummaryResponse::build(event, sessions, now)
        })
        .collect())
}

/// Event detail with full schedule, by slug.
pub async fn get_event(pool: &PgPool, slug: &str, now: DateTime<Utc>) -> Result<EventDetailResponse> {
    let repo = EventRepository::new(pool);
    let event = repo.find_by_slug(slug).await?;
    let sessions = repo.sessions(event.event_id).await?;

    Ok(EventDetailResponse::build(&event, sessions, now))
}

/// First event whose race has not started yet, in calendar order.
pub async fn next_event(pool: &PgPool, now: DateTime<Utc>) -> Result<EventDetailResponse> {
    let repo = EventRepository::new(pool);

    for event in repo.list(None).await? {
        let sessions = repo.sessions(event.event_id).await?;
        if lock::race_start(&sessions).is_some_and(|start| start > now) {
            return Ok(EventDetailResponse::build(&event, sessions, now));
        }
    }

    Err(storage::error::StorageError::NotFound)
}

pub async fn create_event(
    pool: &PgPool,
    req: &CreateEventRequest,
    now: DateTime<Utc>,
) -> Result<EventSummaryResponse> {
    let repo = EventRepository::new(pool);
    let event = repo.create(req).await?;

    Ok(EventSummaryResponse::build(&event, &[], now))
}

/// Replace an event's schedule wholesale.
pub async fn replace_sessions(
    pool: &PgPool,
    slug: &str,
    req: &ReplaceSessionsRequest,
) -> Result<Vec<SessionResponse>> {
    let repo = EventRepository::new(pool);
    let event = repo.find_by_slug(slug).await?;
    let sessions = repo.replace_sessions(event.event_id, &req.sessions).await?;

    Ok(sessions.into_iter().map(SessionResponse::from).collect())
}
