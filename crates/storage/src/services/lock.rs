//! Submission deadline derivation for an event.
//!
//! Predictions close a fixed lead time before FP1. An event whose schedule
//! has no FP1 session is locked unconditionally: missing schedule data must
//! never silently accept predictions.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Session, SessionType};

/// Predictions close this many hours before FP1.
pub const SUBMISSION_LEAD_HOURS: i64 = 48;

fn session_start(sessions: &[Session], kind: SessionType) -> Option<DateTime<Utc>> {
    sessions
        .iter()
        .find(|s| s.kind() == Some(kind))
        .map(|s| s.start_utc)
}

/// Start of the FP1 session, the anchor for the submission deadline.
pub fn first_practice_start(sessions: &[Session]) -> Option<DateTime<Utc>> {
    session_start(sessions, SessionType::Fp1)
}

/// Start of the race session, used for next-race/rollover display.
pub fn race_start(sessions: &[Session]) -> Option<DateTime<Utc>> {
    session_start(sessions, SessionType::Race)
}

/// The exact submission cutoff, absent when the schedule has no FP1.
pub fn deadline(sessions: &[Session]) -> Option<DateTime<Utc>> {
    first_practice_start(sessions).map(|fp1| fp1 - Duration::hours(SUBMISSION_LEAD_HOURS))
}

/// Whether the event has stopped accepting predictions at `now`.
pub fn is_locked(sessions: &[Session], now: DateTime<Utc>) -> bool {
    match deadline(sessions) {
        Some(deadline) => now >= deadline,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn session(kind: SessionType, start: DateTime<Utc>) -> Session {
        Session {
            session_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            session_type: kind.as_str().to_string(),
            start_utc: start,
            end_utc: None,
            sort_order: 0,
        }
    }

    fn fp1_at(start: DateTime<Utc>) -> Vec<Session> {
        vec![
            session(SessionType::Fp1, start),
            session(SessionType::Race, start + Duration::days(2)),
        ]
    }

    #[test]
    fn deadline_is_lead_time_before_fp1() {
        let fp1 = Utc.with_ymd_and_hms(2026, 3, 6, 11, 30, 0).unwrap();
        let sessions = fp1_at(fp1);

        assert_eq!(first_practice_start(&sessions), Some(fp1));
        assert_eq!(
            deadline(&sessions),
            Some(fp1 - Duration::hours(SUBMISSION_LEAD_HOURS))
        );
    }

    #[test]
    fn unlocked_before_deadline_locked_from_deadline_on() {
        let fp1 = Utc.with_ymd_and_hms(2026, 3, 6, 11, 30, 0).unwrap();
        let sessions = fp1_at(fp1);
        let deadline = deadline(&sessions).unwrap();

        assert!(!is_locked(&sessions, deadline - Duration::seconds(1)));
        assert!(is_locked(&sessions, deadline));
        assert!(is_locked(&sessions, deadline + Duration::seconds(1)));
    }

    #[test]
    fn lock_is_monotonic_in_now() {
        let fp1 = Utc.with_ymd_and_hms(2026, 3, 6, 11, 30, 0).unwrap();
        let sessions = fp1_at(fp1);

        let mut seen_locked = false;
        for hours_before in (0..=72).rev() {
            let now = fp1 - Duration::hours(hours_before);
            let locked = is_locked(&sessions, now);
            if seen_locked {
                assert!(locked, "event unlocked again {hours_before}h before FP1");
            }
            seen_locked |= locked;
        }
        assert!(seen_locked);
    }

    #[test]
    fn missing_fp1_means_always_locked() {
        let race = Utc.with_ymd_and_hms(2026, 3, 8, 14, 0, 0).unwrap();
        let sessions = vec![session(SessionType::Race, race)];

        assert_eq!(first_practice_start(&sessions), None);
        assert_eq!(deadline(&sessions), None);
        assert!(is_locked(&sessions, race - Duration::days(30)));
    }

    #[test]
    fn empty_schedule_is_locked() {
        assert!(is_locked(&[], Utc::now()));
    }

    #[test]
    fn race_start_reads_the_race_session() {
        let fp1 = Utc.with_ymd_and_hms(2026, 3, 6, 11, 30, 0).unwrap();
        let sessions = fp1_at(fp1);
        assert_eq!(race_start(&sessions), Some(fp1 + Duration::days(2)));
    }
}
