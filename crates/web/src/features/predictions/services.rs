use chrono::{DateTime, Utc};
use sqlx::PgPool;
use storage::{
    dto::prediction::{PredictionResponse, SubmitPredictionRequest},
    error::Result,
    repository::{event::EventRepository, prediction::PredictionRepository},
    services::submission,
};
use uuid::Uuid;

/// Create or update the caller's prediction for an event.
///
/// The submission service enforces the field invariants and the lock; this
/// layer only resolves the slug.
pub async fn submit_prediction(
    pool: &PgPool,
    user_id: Uuid,
    slug: &str,
    req: &SubmitPredictionRequest,
    now: DateTime<Utc>,
) -> Result<PredictionResponse> {
    let event = EventRepository::new(pool).find_by_slug(slug).await?;

    let prediction =
        submission::submit_prediction(pool, user_id, event.event_id, &req.to_draft(), now).await?;

    Ok(PredictionResponse::from(prediction))
}

/// The caller's own prediction for an event.
pub async fn my_prediction(pool: &PgPool, user_id: Uuid, slug: &str) -> Result<PredictionResponse> {
    let event = EventRepository::new(pool).find_by_slug(slug).await?;

    let prediction = PredictionRepository::new(pool)
        .find_by_user_and_event(user_id, event.event_id)
        .await?;

    Ok(PredictionResponse::from(prediction))
}

/// The public board: every submitted prediction for an event.
pub async fn event_board(pool: &PgPool, slug: &str) -> Result<Vec<PredictionResponse>> {
    let event = EventRepository::new(pool).find_by_slug(slug).await?;

    let predictions = PredictionRepository::new(pool)
        .list_for_event(event.event_id)
        .await?;

    Ok(predictions
        .into_iter()
        .map(PredictionResponse::from)
        .collect())
}

/// One user's predictions across events, most recent round first.
pub async fn user_predictions(pool: &PgPool, user_id: Uuid) -> Result<Vec<PredictionResponse>> {
    let predictions = PredictionRepository::new(pool).list_for_user(user_id).await?;

    Ok(predictions
        .into_iter()
        .map(PredictionResponse::from)
        .collect())
}
