use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::{CreateEventRequest, SessionItem};
use crate::dto::result::RecordResultRequest;
use crate::error::{Result, StorageError};
use crate::models::{Event, Session};

const EVENT_COLUMNS: &str = "event_id, season_year, round, name, slug, country, circuit, \
     created_at, result_p1, result_p2, result_p3, result_p4, result_p5, \
     result_alonso_pos, result_sainz_pos";

/// Repository for event and session database operations
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List events ordered by calendar position, optionally within a season.
    pub async fn list(&self, season_year: Option<i32>) -> Result<Vec<Event>> {
        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM events \
             WHERE ($1::INTEGER IS NULL OR season_year = $1) \
             ORDER BY season_year, round"
        );

        let events = sqlx::query_as::<_, Event>(&sql)
            .bind(season_year)
            .fetch_all(self.pool)
            .await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, event_id: Uuid) -> Result<Event> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE event_id = $1");

        sqlx::query_as::<_, Event>(&sql)
            .bind(event_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Event> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE slug = $1");

        sqlx::query_as::<_, Event>(&sql)
            .bind(slug)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    /// Sessions for one event, in schedule order.
    pub async fn sessions(&self, event_id: Uuid) -> Result<Vec<Session>> {
        let sessions = sqlx::query_as::<_, Session>(
            "SELECT session_id, event_id, session_type, start_utc, end_utc, sort_order \
             FROM sessions WHERE event_id = $1 \
             ORDER BY sort_order, start_utc",
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(sessions)
    }

    /// Sessions for a set of events in one round trip, for list views that
    /// need per-event lock status.
    pub async fn sessions_for_events(&self, event_ids: &[Uuid]) -> Result<Vec<Session>> {
        let sessions = sqlx::query_as::<_, Session>(
            "SELECT session_id, event_id, session_type, start_utc, end_utc, sort_order \
             FROM sessions WHERE event_id = ANY($1) \
             ORDER BY event_id, sort_order, start_utc",
        )
        .bind(event_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(sessions)
    }

    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let sql = format!(
            "INSERT INTO events (season_year, round, name, slug, country, circuit) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {EVENT_COLUMNS}"
        );

        let event = sqlx::query_as::<_, Event>(&sql)
            .bind(req.season_year)
            .bind(req.round)
            .bind(&req.name)
            .bind(&req.slug)
            .bind(&req.country)
            .bind(&req.circuit)
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e {
                    if db_err.code().as_deref() == Some("23505") {
                        return StorageError::ConstraintViolation(
                            "Event slug or round already exists".to_string(),
                        );
                    }
                }
                StorageError::from(e)
            })?;

        Ok(event)
    }

    /// Replace the full session schedule of an event.
    ///
    /// Delete-and-insert inside one transaction keeps the
    /// (event, session_type) uniqueness intact at every observable point.
    pub async fn replace_sessions(
        &self,
        event_id: Uuid,
        sessions: &[SessionItem],
    ) -> Result<Vec<Session>> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM sessions WHERE event_id = $1")
            .bind(event_id)
            .execute(&mut *tx)
            .await?;

        let mut inserted = Vec::with_capacity(sessions.len());
        for item in sessions {
            let session = sqlx::query_as::<_, Session>(
                "INSERT INTO sessions (event_id, session_type, start_utc, end_utc, sort_order) \
                 VALUES ($1, $2, $3, $4, $5) \
                 RETURNING session_id, event_id, session_type, start_utc, end_utc, sort_order",
            )
            .bind(event_id)
            .bind(&item.session_type)
            .bind(item.start_utc)
            .bind(item.end_utc)
            .bind(item.sort_order)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e {
                    if db_err.code().as_deref() == Some("23505") {
                        return StorageError::ConstraintViolation(
                            "Duplicate session type for event".to_string(),
                        );
                    }
                }
                StorageError::from(e)
            })?;
            inserted.push(session);
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// Record the complete seven-field result for an event.
    pub async fn set_result(&self, event_id: Uuid, req: &RecordResultRequest) -> Result<Event> {
        let sql = format!(
            "UPDATE events SET \
                result_p1 = $2, result_p2 = $3, result_p3 = $4, \
                result_p4 = $5, result_p5 = $6, \
                result_alonso_pos = $7, result_sainz_pos = $8 \
             WHERE event_id = $1 \
             RETURNING {EVENT_COLUMNS}"
        );

        sqlx::query_as::<_, Event>(&sql)
            .bind(event_id)
            .bind(req.p1)
            .bind(req.p2)
            .bind(req.p3)
            .bind(req.p4)
            .bind(req.p5)
            .bind(req.alonso_pos)
            .bind(req.sainz_pos)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }
}
