//! Prediction submission and its validation gate.
//!
//! [`submit_prediction`] is the untrusted path: it enforces the field
//! invariants and the submission lock before upserting. [`record_score`]
//! is the trusted path used by result finalization: it touches only the
//! score column and performs no validation at all, because scoring happens
//! after the event is locked. The two are separate operations on purpose;
//! there is no bypass flag.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Prediction, Session};
use crate::repository::event::EventRepository;
use crate::repository::prediction::PredictionRepository;
use crate::services::lock;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("top five picks must be five different drivers")]
    DuplicatePick,

    #[error("position guess must be between 0 (DNF) and 20")]
    InvalidPosition,

    #[error("predictions are closed for this event")]
    SubmissionsClosed,
}

/// The user-controlled fields of a prediction, before they are accepted.
#[derive(Debug, Clone, Copy)]
pub struct PredictionDraft {
    pub picks: [Uuid; 5],
    pub alonso_pos_guess: i16,
    pub sainz_pos_guess: i16,
}

/// Check a draft against an event schedule at a given instant.
///
/// Checks run in a fixed order and the first failure wins: distinct picks,
/// position guesses in range, event still open.
pub fn validate_submission(
    draft: &PredictionDraft,
    sessions: &[Session],
    now: DateTime<Utc>,
) -> std::result::Result<(), SubmissionError> {
    for i in 0..draft.picks.len() {
        for j in (i + 1)..draft.picks.len() {
            if draft.picks[i] == draft.picks[j] {
                return Err(SubmissionError::DuplicatePick);
            }
        }
    }

    for guess in [draft.alonso_pos_guess, draft.sainz_pos_guess] {
        if !(0..=20).contains(&guess) {
            return Err(SubmissionError::InvalidPosition);
        }
    }

    if lock::is_locked(sessions, now) {
        return Err(SubmissionError::SubmissionsClosed);
    }

    Ok(())
}

/// Create or update the caller's prediction for an event.
///
/// The upsert is keyed by (user, event), so two concurrent submissions
/// from the same user can never produce duplicate rows.
pub async fn submit_prediction(
    pool: &PgPool,
    user_id: Uuid,
    event_id: Uuid,
    draft: &PredictionDraft,
    now: DateTime<Utc>,
) -> Result<Prediction> {
    let sessions = EventRepository::new(pool).sessions(event_id).await?;
    validate_submission(draft, &sessions, now)?;

    PredictionRepository::new(pool)
        .upsert(user_id, event_id, draft)
        .await
}

/// Write a computed score onto a prediction. Trusted path only.
pub async fn record_score(pool: &PgPool, prediction_id: Uuid, score: i32) -> Result<()> {
    PredictionRepository::new(pool)
        .update_score(prediction_id, score)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionType;
    use chrono::{Duration, TimeZone};

    fn draft(picks: [Uuid; 5]) -> PredictionDraft {
        PredictionDraft {
            picks,
            alonso_pos_guess: 5,
            sainz_pos_guess: 0,
        }
    }

    fn open_schedule(now: DateTime<Utc>) -> Vec<Session> {
        vec![Session {
            session_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            session_type: SessionType::Fp1.as_str().to_string(),
            start_utc: now + Duration::hours(lock::SUBMISSION_LEAD_HOURS + 1),
            end_utc: None,
            sort_order: 0,
        }]
    }

    fn five_drivers() -> [Uuid; 5] {
        std::array::from_fn(|_| Uuid::new_v4())
    }

    #[test]
    fn valid_draft_passes() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(
            validate_submission(&draft(five_drivers()), &open_schedule(now), now),
            Ok(())
        );
    }

    #[test]
    fn duplicate_pick_rejected_even_when_everything_else_is_wrong_too() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let repeated = Uuid::new_v4();
        let mut picks = five_drivers();
        picks[4] = repeated;
        picks[0] = repeated;

        // Out-of-range guess and locked event as well: the duplicate check
        // still reports first.
        let bad = PredictionDraft {
            picks,
            alonso_pos_guess: 21,
            sainz_pos_guess: -1,
        };
        assert_eq!(
            validate_submission(&bad, &[], now),
            Err(SubmissionError::DuplicatePick)
        );
    }

    #[test]
    fn out_of_range_guess_rejected() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let schedule = open_schedule(now);

        let mut too_high = draft(five_drivers());
        too_high.sainz_pos_guess = 21;
        assert_eq!(
            validate_submission(&too_high, &schedule, now),
            Err(SubmissionError::InvalidPosition)
        );

        let mut negative = draft(five_drivers());
        negative.alonso_pos_guess = -1;
        assert_eq!(
            validate_submission(&negative, &schedule, now),
            Err(SubmissionError::InvalidPosition)
        );

        let mut dnf = draft(five_drivers());
        dnf.alonso_pos_guess = 0;
        dnf.sainz_pos_guess = 20;
        assert_eq!(validate_submission(&dnf, &schedule, now), Ok(()));
    }

    #[test]
    fn locked_event_rejects_submission() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let mut schedule = open_schedule(now);
        schedule[0].start_utc = now + Duration::hours(1);

        assert_eq!(
            validate_submission(&draft(five_drivers()), &schedule, now),
            Err(SubmissionError::SubmissionsClosed)
        );
    }

    #[test]
    fn event_without_schedule_rejects_submission() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(
            validate_submission(&draft(five_drivers()), &[], now),
            Err(SubmissionError::SubmissionsClosed)
        );
    }
}
