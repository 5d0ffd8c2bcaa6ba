use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Finishing position recorded as "did not finish".
pub const DNF: i16 = 0;

/// A Grand Prix weekend (one round of a season).
///
/// The finalized result lives in the nullable `result_*` columns; it is
/// observable only through [`Event::result`], which yields a value when
/// every field is present.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub season_year: i32,
    pub round: i32,
    pub name: String,
    pub slug: String,
    pub country: Option<String>,
    pub circuit: Option<String>,
    pub created_at: DateTime<Utc>,

    pub result_p1: Option<Uuid>,
    pub result_p2: Option<Uuid>,
    pub result_p3: Option<Uuid>,
    pub result_p4: Option<Uuid>,
    pub result_p5: Option<Uuid>,
    pub result_alonso_pos: Option<i16>,
    pub result_sainz_pos: Option<i16>,
}

impl Event {
    /// The finalized result, if all seven fields have been recorded.
    ///
    /// Computed on every call rather than cached; a partially entered
    /// result is indistinguishable from no result.
    pub fn result(&self) -> Option<EventResult> {
        Some(EventResult {
            top_five: [
                self.result_p1?,
                self.result_p2?,
                self.result_p3?,
                self.result_p4?,
                self.result_p5?,
            ],
            alonso_pos: self.result_alonso_pos?,
            sainz_pos: self.result_sainz_pos?,
        })
    }

    pub fn has_results(&self) -> bool {
        self.result().is_some()
    }
}

/// A fully populated event result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventResult {
    /// Drivers placed P1 through P5, in finishing order.
    pub top_five: [Uuid; 5],
    /// Alonso's finishing position, [`DNF`] if he did not finish.
    pub alonso_pos: i16,
    /// Sainz's finishing position, [`DNF`] if he did not finish.
    pub sainz_pos: i16,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_with_result() -> Event {
        Event {
            event_id: Uuid::new_v4(),
            season_year: 2026,
            round: 1,
            name: "Australian Grand Prix".into(),
            slug: "australia-2026".into(),
            country: Some("Australia".into()),
            circuit: Some("Albert Park".into()),
            created_at: Utc::now(),
            result_p1: Some(Uuid::new_v4()),
            result_p2: Some(Uuid::new_v4()),
            result_p3: Some(Uuid::new_v4()),
            result_p4: Some(Uuid::new_v4()),
            result_p5: Some(Uuid::new_v4()),
            result_alonso_pos: Some(7),
            result_sainz_pos: Some(DNF),
        }
    }

    #[test]
    fn full_result_is_observable() {
        let event = event_with_result();
        assert!(event.has_results());
        let result = event.result().unwrap();
        assert_eq!(result.alonso_pos, 7);
        assert_eq!(result.sainz_pos, DNF);
    }

    #[test]
    fn partial_result_counts_as_no_result() {
        let mut event = event_with_result();
        event.result_p3 = None;
        assert!(!event.has_results());
        assert!(event.result().is_none());

        let mut event = event_with_result();
        event.result_sainz_pos = None;
        assert!(!event.has_results());
    }
}
