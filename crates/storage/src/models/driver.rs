use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Driver {
    pub driver_id: Uuid,
    pub code: String,
    pub name: String,
    pub team_id: Option<Uuid>,
    pub active: bool,
}
