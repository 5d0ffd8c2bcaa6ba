//! Point computation for finalized events.
//!
//! Scoring is a pure function of (result, prediction): no side effects and
//! no ordering dependency across predictions, so batch rescoring can visit
//! predictions in any order and is safe to repeat.

use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{DNF, Event, EventResult, Prediction};
use crate::repository::event::EventRepository;
use crate::repository::prediction::PredictionRepository;
use crate::services::submission;

/// Championship-style points for finishing positions P1 through P10.
/// Domain policy, not derived from a formula; positions beyond P10 score 0.
const POSITION_POINTS: [i32; 10] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];

/// Points awarded for finishing at `pos` (1-based), 0 outside P1..P10.
pub fn position_points(pos: i16) -> i32 {
    match pos {
        1..=10 => POSITION_POINTS[(pos - 1) as usize],
        _ => 0,
    }
}

/// Score one prediction against a finalized result.
///
/// Top-5 slots: a pick absent from the actual top five scores 0; an exact
/// slot match earns the full points of that position; a correct driver in
/// the wrong slot earns half, rounded down. Each special position guess is
/// scored by [`special_points`]. Always non-negative.
pub fn score(result: &EventResult, prediction: &Prediction) -> i32 {
    let mut total = 0;

    for (index, pick) in prediction.picks().iter().enumerate() {
        let slot = index as i16 + 1;
        let actual = result
            .top_five
            .iter()
            .position(|driver| driver == pick)
            .map(|i| i as i16 + 1);

        if let Some(actual) = actual {
            let points = position_points(actual);
            total += if actual == slot { points } else { points / 2 };
        }
    }

    total += special_points(result.alonso_pos, prediction.alonso_pos_guess);
    total += special_points(result.sainz_pos, prediction.sainz_pos_guess);

    total
}

/// Points for a single special position guess.
///
/// A DNF result scores 0 regardless of the guess. An exact guess doubles
/// the position's points. A wrong guess still earns the position's points
/// when the driver finished in the top ten, and 0 otherwise.
fn special_points(actual: i16, guess: i16) -> i32 {
    if actual == DNF {
        return 0;
    }

    let points = position_points(actual);
    if guess == actual {
        2 * points
    } else if actual <= 10 {
        points
    } else {
        0
    }
}

/// Score a prediction for an event, 0 when the event has no finalized
/// result yet. Total over all predictions: a premature scoring run is a
/// no-op, never an error.
pub fn score_for_event(event: &Event, prediction: &Prediction) -> i32 {
    match event.result() {
        Some(result) => score(&result, prediction),
        None => 0,
    }
}

/// Outcome of a batch scoring run.
#[derive(Debug, Default, Clone, Copy, Serialize, ToSchema)]
pub struct ScoringReport {
    pub events_scored: u64,
    pub events_skipped: u64,
    pub events_unknown: u64,
    pub predictions_scored: u64,
}

/// Rescore every prediction for each selected event.
///
/// Events without a finalized result are skipped and counted, and ids
/// that match no event are counted separately; neither fails the batch.
/// Scores are written through [`submission::record_score`], the trusted
/// path that deliberately ignores the submission lock.
pub async fn score_events(pool: &PgPool, event_ids: &[Uuid]) -> Result<ScoringReport> {
    let events = EventRepository::new(pool);
    let predictions = PredictionRepository::new(pool);

    let mut report = ScoringReport::default();

    for &event_id in event_ids {
        let event = match events.find_by_id(event_id).await {
            Ok(event) => event,
            Err(StorageError::NotFound) => {
                report.events_unknown += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let Some(result) = event.result() else {
            report.events_skipped += 1;
            continue;
        };

        for prediction in predictions.list_for_event(event_id).await? {
            let value = score(&result, &prediction);
            submission::record_score(pool, prediction.prediction_id, value).await?;
            report.predictions_scored += 1;
        }

        report.events_scored += 1;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn drivers(n: usize) -> Vec<Uuid> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    fn result(top_five: [Uuid; 5], alonso_pos: i16, sainz_pos: i16) -> EventResult {
        EventResult {
            top_five,
            alonso_pos,
            sainz_pos,
        }
    }

    fn prediction(picks: [Uuid; 5], alonso_guess: i16, sainz_guess: i16) -> Prediction {
        Prediction {
            prediction_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            p1: picks[0],
            p2: picks[1],
            p3: picks[2],
            p4: picks[3],
            p5: picks[4],
            alonso_pos_guess: alonso_guess,
            sainz_pos_guess: sainz_guess,
            submitted_at: Utc::now(),
            updated_at: Utc::now(),
            score: None,
        }
    }

    #[test]
    fn points_table() {
        let expected = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];
        for (pos, points) in expected.iter().enumerate() {
            assert_eq!(position_points(pos as i16 + 1), *points);
        }
        assert_eq!(position_points(11), 0);
        assert_eq!(position_points(20), 0);
        assert_eq!(position_points(0), 0);
    }

    #[test]
    fn perfect_prediction_scores_110() {
        let d: [Uuid; 5] = drivers(5).try_into().unwrap();
        // Top five all exact (25+18+15+12+10 = 80), Alonso P3 exact
        // (2 * 15 = 30), Sainz DNF contributes nothing.
        let result = result(d, 3, DNF);
        let prediction = prediction(d, 3, 7);

        assert_eq!(score(&result, &prediction), 110);
    }

    #[test]
    fn swapped_front_row_halves_both() {
        let d: [Uuid; 5] = drivers(5).try_into().unwrap();
        let result = result(d, DNF, DNF);
        // A and B swapped: slot 1 holds the P2 driver (18 / 2 = 9), slot 2
        // holds the P1 driver (25 / 2 = 12), slots 3-5 exact (15+12+10).
        let prediction = prediction([d[1], d[0], d[2], d[3], d[4]], 0, 0);

        assert_eq!(score(&result, &prediction), 9 + 12 + 15 + 12 + 10);
    }

    #[test]
    fn pick_outside_top_five_scores_nothing() {
        let d = drivers(10);
        let result = result([d[0], d[1], d[2], d[3], d[4]], DNF, DNF);
        let prediction = prediction([d[5], d[6], d[7], d[8], d[9]], 0, 0);

        assert_eq!(score(&result, &prediction), 0);
    }

    #[test]
    fn special_exact_outside_top_ten_scores_zero() {
        let d: [Uuid; 5] = drivers(5).try_into().unwrap();
        let result = result(d, 12, DNF);
        let prediction = prediction(drivers(5).try_into().unwrap(), 12, 0);

        assert_eq!(score(&result, &prediction), 2 * position_points(12));
        assert_eq!(score(&result, &prediction), 0);
    }

    #[test]
    fn special_wrong_guess_keeps_consolation_points() {
        let d: [Uuid; 5] = drivers(5).try_into().unwrap();
        // Alonso finished P8; the guess was wrong but P8 is still worth
        // its 4 table points.
        let result = result(d, 8, DNF);
        let prediction = prediction(drivers(5).try_into().unwrap(), 5, 0);

        assert_eq!(score(&result, &prediction), 4);
    }

    #[test]
    fn special_wrong_guess_outside_top_ten_scores_zero() {
        let d: [Uuid; 5] = drivers(5).try_into().unwrap();
        let result = result(d, 15, DNF);
        let prediction = prediction(drivers(5).try_into().unwrap(), 3, 0);

        assert_eq!(score(&result, &prediction), 0);
    }

    #[test]
    fn dnf_special_scores_zero_even_on_exact_guess() {
        let d: [Uuid; 5] = drivers(5).try_into().unwrap();
        let result = result(d, DNF, DNF);
        let prediction = prediction(drivers(5).try_into().unwrap(), 0, 0);

        assert_eq!(score(&result, &prediction), 0);
    }

    #[test]
    fn scoring_is_idempotent() {
        let d: [Uuid; 5] = drivers(5).try_into().unwrap();
        let result = result(d, 5, 9);
        let prediction = prediction([d[4], d[3], d[2], d[1], d[0]], 5, 2);

        let first = score(&result, &prediction);
        assert_eq!(score(&result, &prediction), first);
        assert!(first >= 0);
    }

    #[test]
    fn event_without_result_scores_zero() {
        let d: [Uuid; 5] = drivers(5).try_into().unwrap();
        let event = Event {
            event_id: Uuid::new_v4(),
            season_year: 2026,
            round: 4,
            name: "Miami Grand Prix".into(),
            slug: "miami-2026".into(),
            country: None,
            circuit: None,
            created_at: Utc::now(),
            result_p1: Some(d[0]),
            result_p2: Some(d[1]),
            result_p3: Some(d[2]),
            result_p4: Some(d[3]),
            result_p5: Some(d[4]),
            result_alonso_pos: Some(1),
            result_sainz_pos: None,
        };
        let prediction = prediction(d, 1, 1);

        // One missing field makes the whole result unusable.
        assert_eq!(score_for_event(&event, &prediction), 0);

        let mut finalized = event;
        finalized.result_sainz_pos = Some(2);
        assert!(score_for_event(&finalized, &prediction) > 0);
    }
}
