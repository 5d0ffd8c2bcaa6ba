use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Event, Session, SessionType};
use crate::services::lock;

/// Request payload for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(range(min = 1950, max = 2100, message = "Season year out of range"))]
    pub season_year: i32,

    #[validate(range(min = 1, message = "Round must be >= 1"))]
    pub round: i32,

    #[validate(length(
        min = 1,
        max = 120,
        message = "Name must be between 1 and 120 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 140,
        message = "Slug must be between 1 and 140 characters"
    ))]
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    #[validate(length(max = 80))]
    pub country: Option<String>,

    #[validate(length(max = 120))]
    pub circuit: Option<String>,
}

/// One session in a schedule-replacement request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SessionItem {
    #[validate(custom(function = "validate_session_type"))]
    pub session_type: String,

    pub start_utc: DateTime<Utc>,

    pub end_utc: Option<DateTime<Utc>>,

    #[serde(default)]
    pub sort_order: i32,
}

/// Request payload replacing the full session schedule of an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReplaceSessionsRequest {
    #[validate(nested)]
    pub sessions: Vec<SessionItem>,
}

impl ReplaceSessionsRequest {
    /// Cross-item validation: one session per type.
    pub fn validate_unique_types(&self) -> Result<(), &'static str> {
        for (i, a) in self.sessions.iter().enumerate() {
            if self.sessions[i + 1..]
                .iter()
                .any(|b| b.session_type == a.session_type)
            {
                return Err("Duplicate session type in schedule");
            }
        }
        Ok(())
    }
}

/// Event with its derived submission-window state
#[derive(Debug, Serialize, ToSchema)]
pub struct EventSummaryResponse {
    pub event_id: Uuid,
    pub season_year: i32,
    pub round: i32,
    pub name: String,
    pub slug: String,
    pub country: Option<String>,
    pub circuit: Option<String>,
    /// "OPEN" or "CLOSED"
    pub status: String,
    pub deadline_utc: Option<DateTime<Utc>>,
    pub race_start_utc: Option<DateTime<Utc>>,
    pub has_results: bool,
}

impl EventSummaryResponse {
    pub fn build(event: &Event, sessions: &[Session], now: DateTime<Utc>) -> Self {
        let status = if lock::is_locked(sessions, now) {
            "CLOSED"
        } else {
            "OPEN"
        };

        Self {
            event_id: event.event_id,
            season_year: event.season_year,
            round: event.round,
            name: event.name.clone(),
            slug: event.slug.clone(),
            country: event.country.clone(),
            circuit: event.circuit.clone(),
            status: status.to_string(),
            deadline_utc: lock::deadline(sessions),
            race_start_utc: lock::race_start(sessions),
            has_results: event.has_results(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub session_type: String,
    pub start_utc: DateTime<Utc>,
    pub end_utc: Option<DateTime<Utc>>,
    pub sort_order: i32,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            session_id: session.session_id,
            session_type: session.session_type,
            start_utc: session.start_utc,
            end_utc: session.end_utc,
            sort_order: session.sort_order,
        }
    }
}

/// Event detail with the full schedule
#[derive(Debug, Serialize, ToSchema)]
pub struct EventDetailResponse {
    #[serde(flatten)]
    pub summary: EventSummaryResponse,
    pub first_practice_start_utc: Option<DateTime<Utc>>,
    pub sessions: Vec<SessionResponse>,
}

impl EventDetailResponse {
    pub fn build(event: &Event, sessions: Vec<Session>, now: DateTime<Utc>) -> Self {
        Self {
            summary: EventSummaryResponse::build(event, &sessions, now),
            first_practice_start_utc: lock::first_practice_start(&sessions),
            sessions: sessions.into_iter().map(SessionResponse::from).collect(),
        }
    }
}

// Validation helpers

fn validate_slug(slug: &str) -> Result<(), validator::ValidationError> {
    let is_valid = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--");

    if is_valid {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_slug"))
    }
}

fn validate_session_type(session_type: &str) -> Result<(), validator::ValidationError> {
    if SessionType::parse(session_type).is_some() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_session_type"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(session_type: &str) -> SessionItem {
        SessionItem {
            session_type: session_type.to_string(),
            start_utc: Utc::now(),
            end_utc: None,
            sort_order: 0,
        }
    }

    #[test]
    fn schedule_rejects_repeated_session_type() {
        let req = ReplaceSessionsRequest {
            sessions: vec![item("FP1"), item("RACE"), item("FP1")],
        };
        assert!(req.validate_unique_types().is_err());
    }

    #[test]
    fn schedule_accepts_distinct_session_types() {
        let req = ReplaceSessionsRequest {
            sessions: vec![item("FP1"), item("QUALI"), item("RACE")],
        };
        assert!(req.validate_unique_types().is_ok());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn unknown_session_type_fails_validation() {
        let req = ReplaceSessionsRequest {
            sessions: vec![item("WARMUP")],
        };
        assert!(req.validate().is_err());
    }
}
