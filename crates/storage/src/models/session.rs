use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One scheduled activity within an event weekend.
///
/// At most one session per (event, session_type); FP1 anchors the
/// prediction deadline, RACE anchors when the event happens.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Session {
    pub session_id: Uuid,
    pub event_id: Uuid,
    pub session_type: String,
    pub start_utc: DateTime<Utc>,
    pub end_utc: Option<DateTime<Utc>>,
    pub sort_order: i32,
}

impl Session {
    /// The typed session kind, or `None` for an unrecognized tag.
    pub fn kind(&self) -> Option<SessionType> {
        SessionType::parse(&self.session_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionType {
    Fp1,
    Fp2,
    Fp3,
    Quali,
    SprintQuali,
    Sprint,
    Race,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fp1 => "FP1",
            Self::Fp2 => "FP2",
            Self::Fp3 => "FP3",
            Self::Quali => "QUALI",
            Self::SprintQuali => "SPRINT_QUALI",
            Self::Sprint => "SPRINT",
            Self::Race => "RACE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "FP1" => Some(Self::Fp1),
            "FP2" => Some(Self::Fp2),
            "FP3" => Some(Self::Fp3),
            "QUALI" => Some(Self::Quali),
            "SPRINT_QUALI" => Some(Self::SprintQuali),
            "SPRINT" => Some(Self::Sprint),
            "RACE" => Some(Self::Race),
            _ => None,
        }
    }
}
