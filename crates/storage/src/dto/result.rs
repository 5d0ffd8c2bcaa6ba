use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload recording the complete result of an event.
///
/// All seven fields are mandatory by shape: a partial result cannot be
/// expressed on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordResultRequest {
    pub p1: Uuid,
    pub p2: Uuid,
    pub p3: Uuid,
    pub p4: Uuid,
    pub p5: Uuid,

    #[validate(range(min = 0, max = 20, message = "Position must be 0 (DNF) to 20"))]
    pub alonso_pos: i16,

    #[validate(range(min = 0, max = 20, message = "Position must be 0 (DNF) to 20"))]
    pub sainz_pos: i16,
}

impl RecordResultRequest {
    /// The five placed drivers must be distinct.
    pub fn validate_distinct_drivers(&self) -> Result<(), &'static str> {
        let placed = [self.p1, self.p2, self.p3, self.p4, self.p5];
        for (i, driver) in placed.iter().enumerate() {
            if placed[i + 1..].contains(driver) {
                return Err("A driver cannot hold two finishing positions");
            }
        }
        Ok(())
    }
}

/// Request payload selecting events for a batch scoring run
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScoreEventsRequest {
    #[validate(length(min = 1, message = "Select at least one event"))]
    pub event_ids: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_driver_in_result_is_rejected() {
        let winner = Uuid::new_v4();
        let req = RecordResultRequest {
            p1: winner,
            p2: Uuid::new_v4(),
            p3: Uuid::new_v4(),
            p4: winner,
            p5: Uuid::new_v4(),
            alonso_pos: 7,
            sainz_pos: 0,
        };
        assert!(req.validate_distinct_drivers().is_err());
    }

    #[test]
    fn distinct_result_passes() {
        let req = RecordResultRequest {
            p1: Uuid::new_v4(),
            p2: Uuid::new_v4(),
            p3: Uuid::new_v4(),
            p4: Uuid::new_v4(),
            p5: Uuid::new_v4(),
            alonso_pos: 0,
            sainz_pos: 20,
        };
        assert!(req.validate_distinct_drivers().is_ok());
        assert!(req.validate().is_ok());
    }
}
