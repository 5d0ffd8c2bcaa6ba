use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::driver::{CreateDriverRequest, CreateTeamRequest, DriverResponse, TeamInfo};
use crate::error::{Result, StorageError};
use crate::models::{Driver, Team};

#[derive(FromRow)]
struct DriverRow {
    driver_id: Uuid,
    code: String,
    name: String,
    active: bool,
    team_id: Option<Uuid>,
    team_name: Option<String>,
    team_slug: Option<String>,
    team_color: Option<String>,
}

impl From<DriverRow> for DriverResponse {
    fn from(row: DriverRow) -> Self {
        let team = match (row.team_id, row.team_name, row.team_slug) {
            (Some(team_id), Some(name), Some(slug)) => Some(TeamInfo {
                team_id,
                name,
                slug,
                color: row.team_color,
            }),
            _ => None,
        };

        Self {
            driver_id: row.driver_id,
            code: row.code,
            name: row.name,
            active: row.active,
            team,
        }
    }
}

/// Repository for driver and team lookup data
pub struct DriverRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DriverRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Active drivers with their team, for pick forms.
    pub async fn list_active(&self) -> Result<Vec<DriverResponse>> {
        let rows = sqlx::query_as::<_, DriverRow>(
            "SELECT d.driver_id, d.code, d.name, d.active, d.team_id, \
                    t.name AS team_name, t.slug AS team_slug, t.color AS team_color \
             FROM drivers d \
             LEFT JOIN teams t ON d.team_id = t.team_id \
             WHERE d.active \
             ORDER BY d.name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(DriverResponse::from).collect())
    }

    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            "SELECT team_id, name, slug, color, active FROM teams ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn create_driver(&self, req: &CreateDriverRequest) -> Result<Driver> {
        sqlx::query_as::<_, Driver>(
            "INSERT INTO drivers (code, name, team_id, active) \
             VALUES ($1, $2, $3, $4) \
             RETURNING driver_id, code, name, team_id, active",
        )
        .bind(&req.code)
        .bind(&req.name)
        .bind(req.team_id)
        .bind(req.active)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique(e, "Driver code already exists"))
    }

    pub async fn create_team(&self, req: &CreateTeamRequest) -> Result<Team> {
        sqlx::query_as::<_, Team>(
            "INSERT INTO teams (name, slug, color, active) \
             VALUES ($1, $2, $3, $4) \
             RETURNING team_id, name, slug, color, active",
        )
        .bind(&req.name)
        .bind(&req.slug)
        .bind(&req.color)
        .bind(req.active)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique(e, "Team slug already exists"))
    }
}

fn map_unique(e: sqlx::Error, message: &str) -> StorageError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.code().as_deref() == Some("23505") {
            return StorageError::ConstraintViolation(message.to_string());
        }
    }
    StorageError::from(e)
}
