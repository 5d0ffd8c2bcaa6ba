use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Prediction;
use crate::services::submission::PredictionDraft;

/// Request payload for submitting or updating a prediction.
///
/// The range checks mirror the core validation; pick distinctness and the
/// submission lock are enforced by the submission service, which is the
/// single gate for every caller.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitPredictionRequest {
    pub p1: Uuid,
    pub p2: Uuid,
    pub p3: Uuid,
    pub p4: Uuid,
    pub p5: Uuid,

    #[validate(range(min = 0, max = 20, message = "Position must be 0 (DNF) to 20"))]
    pub alonso_pos_guess: i16,

    #[validate(range(min = 0, max = 20, message = "Position must be 0 (DNF) to 20"))]
    pub sainz_pos_guess: i16,
}

impl SubmitPredictionRequest {
    pub fn to_draft(&self) -> PredictionDraft {
        PredictionDraft {
            picks: [self.p1, self.p2, self.p3, self.p4, self.p5],
            alonso_pos_guess: self.alonso_pos_guess,
            sainz_pos_guess: self.sainz_pos_guess,
        }
    }
}

/// Response containing a stored prediction
#[derive(Debug, Serialize, ToSchema)]
pub struct PredictionResponse {
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

impl From<Prediction> for PredictionResponse {
    fn from(p: Prediction) -> Self {
        Self {
            prediction_id: p.prediction_id,
            user_id: p.user_id,
            event_id: p.event_id,
            p1: p.p1,
            p2: p.p2,
            p3: p.p3,
            p4: p.p4,
            p5: p.p5,
            alonso_pos_guess: p.alonso_pos_guess,
            sainz_pos_guess: p.sainz_pos_guess,
            submitted_at: p.submitted_at,
            updated_at: p.updated_at,
            score: p.score,
        }
    }
}
