use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One user's forecast for one event.
///
/// Unique per (user, event); the five picks must be distinct drivers and
/// each position guess lies in [0, 20] with 0 meaning DNF. `score` is set
/// only by the trusted result-finalization path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Prediction {
    pub prediction_id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,

    pub p1: Uuid,
    pub p2: Uuid,
    pub p3: Uuid,
    pub p4: Uuid,
    pub p5: Uuid,

    pub alonso_pos_guess: i16,
    pub sainz_pos_guess: i16,

    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub score: Option<i32>,
}

impl Prediction {
    /// The five ordered picks, P1 slot first.
    pub fn picks(&self) -> [Uuid; 5] {
        [self.p1, self.p2, self.p3, self.p4, self.p5]
    }
}
