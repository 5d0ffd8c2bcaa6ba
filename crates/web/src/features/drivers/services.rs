use sqlx::PgPool;
use storage::{
    dto::driver::{CreateDriverRequest, CreateTeamRequest, DriverResponse},
    error::Result,
    models::{Driver, Team},
    repository::driver::DriverRepository,
};

/// Active drivers with team info, for pick forms.
pub async fn list_drivers(pool: &PgPool) -> Result<Vec<DriverResponse>> {
    DriverRepository::new(pool).list_active().await
}

pub async fn list_teams(pool: &PgPool) -> Result<Vec<Team>> {
    DriverRepository::new(pool).list_teams().await
}

pub async fn create_driver(pool: &PgPool, req: &CreateDriverRequest) -> Result<Driver> {
    DriverRepository::new(pool).create_driver(req).await
}

pub async fn create_team(pool: &PgPool, req: &CreateTeamRequest) -> Result<Team> {
    DriverRepository::new(pool).create_team(req).await
}
