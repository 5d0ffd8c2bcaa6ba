use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// One row of the season leaderboard.
///
/// Users are opaque ids here; display names belong to the identity layer.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub user_id: Uuid,
    pub total_score: i64,
    pub picks_count: i64,
    pub scored_count: i64,
}
