use sqlx::PgPool;
use storage::{
    dto::event::EventSummaryResponse,
    dto::result::{RecordResultRequest, ScoreEventsRequest},
    error::Result,
    repository::event::EventRepository,
    services::scoring::{self, ScoringReport},
};

/// Record the complete result for an event.
pub async fn record_result(
    pool: &PgPool,
    slug: &str,
    req: &RecordResultRequest,
) -> Result<EventSummaryResponse> {
    let repo = EventRepository::new(pool);
    let event = repo.find_by_slug(slug).await?;
    let event = repo.set_result(event.event_id, req).await?;

    let sessions = repo.sessions(event.event_id).await?;
    Ok(EventSummaryResponse::build(&event, &sessions, chrono::Utc::now()))
}

/// Rescore predictions for the selected events.
pub async fn score_events(pool: &PgPool, req: &ScoreEventsRequest) -> Result<ScoringReport> {
    scoring::score_events(pool, &req.event_ids).await
}
