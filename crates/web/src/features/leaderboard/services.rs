use sqlx::PgPool;
use storage::{
    dto::common::{PaginatedResponse, PaginationParams},
    dto::leaderboard::LeaderboardEntry,
    error::Result,
    repository::prediction::PredictionRepository,
};

/// Season standings: per-user totals over scored predictions.
pub async fn get_leaderboard(
    pool: &PgPool,
    pagination: &PaginationParams,
) -> Result<PaginatedResponse<LeaderboardEntry>> {
    let repo = PredictionRepository::new(pool);

    let (entries, total_users) = repo
        .leaderboard(pagination.offset(), pagination.limit())
        .await?;

    Ok(PaginatedResponse::new(entries, pagination, total_users))
}
