use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::leaderboard::LeaderboardEntry;
use crate::error::{Result, StorageError};
use crate::models::Prediction;
use crate::services::submission::PredictionDraft;

const PREDICTION_COLUMNS: &str = "prediction_id, user_id, event_id, p1, p2, p3, p4, p5, \
     alonso_pos_guess, sainz_pos_guess, submitted_at, updated_at, score";

#[derive(FromRow)]
struct LeaderboardRow {
    user_id: Uuid,
    total_score: i64,
    picks_count: i64,
    scored_count: i64,
}

/// Repository for prediction database operations
pub struct PredictionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PredictionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user_and_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Prediction> {
        let sql = format!(
            "SELECT {PREDICTION_COLUMNS} FROM predictions \
             WHERE user_id = $1 AND event_id = $2"
        );

        sqlx::query_as::<_, Prediction>(&sql)
            .bind(user_id)
            .bind(event_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    /// All predictions for one event, oldest submission first.
    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<Prediction>> {
        let sql = format!(
            "SELECT {PREDICTION_COLUMNS} FROM predictions \
             WHERE event_id = $1 \
             ORDER BY submitted_at"
        );

        let predictions = sqlx::query_as::<_, Prediction>(&sql)
            .bind(event_id)
            .fetch_all(self.pool)
            .await?;

        Ok(predictions)
    }

    /// One user's predictions, most recent round first.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Prediction>> {
        let predictions = sqlx::query_as::<_, Prediction>(
            "SELECT p.prediction_id, p.user_id, p.event_id, p.p1, p.p2, p.p3, p.p4, p.p5, \
                    p.alonso_pos_guess, p.sainz_pos_guess, p.submitted_at, p.updated_at, p.score \
             FROM predictions p \
             INNER JOIN events e ON p.event_id = e.event_id \
             WHERE p.user_id = $1 \
             ORDER BY e.season_year DESC, e.round DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(predictions)
    }

    /// Atomic upsert keyed by (user, event): `submitted_at` is preserved on
    /// update, `updated_at` and the guessed fields are replaced.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        draft: &PredictionDraft,
    ) -> Result<Prediction> {
        let sql = format!(
            "INSERT INTO predictions \
                (user_id, event_id, p1, p2, p3, p4, p5, alonso_pos_guess, sainz_pos_guess) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (user_id, event_id) DO UPDATE SET \
                p1 = EXCLUDED.p1, p2 = EXCLUDED.p2, p3 = EXCLUDED.p3, \
                p4 = EXCLUDED.p4, p5 = EXCLUDED.p5, \
                alonso_pos_guess = EXCLUDED.alonso_pos_guess, \
                sainz_pos_guess = EXCLUDED.sainz_pos_guess, \
                updated_at = now() \
             RETURNING {PREDICTION_COLUMNS}"
        );

        let prediction = sqlx::query_as::<_, Prediction>(&sql)
            .bind(user_id)
            .bind(event_id)
            .bind(draft.picks[0])
            .bind(draft.picks[1])
            .bind(draft.picks[2])
            .bind(draft.picks[3])
            .bind(draft.picks[4])
            .bind(draft.alonso_pos_guess)
            .bind(draft.sainz_pos_guess)
            .fetch_one(self.pool)
            .await?;

        Ok(prediction)
    }

    /// Single-row score write. Crate-private: external callers go through
    /// `services::submission::record_score`, the one trusted write path.
    pub(crate) async fn update_score(&self, prediction_id: Uuid, score: i32) -> Result<()> {
        let result = sqlx::query("UPDATE predictions SET score = $2 WHERE prediction_id = $1")
            .bind(prediction_id)
            .bind(score)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Per-user totals ordered by score, with the overall user count for
    /// pagination.
    pub async fn leaderboard(&self, offset: i64, limit: i64) -> Result<(Vec<LeaderboardEntry>, i64)> {
        let total_users =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(DISTINCT user_id) FROM predictions")
                .fetch_one(self.pool)
                .await?;

        let rows = sqlx::query_as::<_, LeaderboardRow>(
            "SELECT user_id, \
                    COALESCE(SUM(score), 0)::BIGINT AS total_score, \
                    COUNT(*) AS picks_count, \
                    COUNT(score) AS scored_count \
             FROM predictions \
             GROUP BY user_id \
             ORDER BY total_score DESC, user_id \
             OFFSET $1 LIMIT $2",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        let entries = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| LeaderboardEntry {
                rank: offset + i as i64 + 1,
                user_id: row.user_id,
                total_score: row.total_score,
                picks_count: row.picks_count,
                scored_count: row.scored_count,
            })
            .collect();

        Ok((entries, total_users))
    }
}
