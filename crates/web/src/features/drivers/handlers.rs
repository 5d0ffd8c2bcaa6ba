use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::driver::{CreateDriverRequest, CreateTeamRequest, DriverResponse},
    models::Team,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/drivers",
    responses(
        (status = 200, description = "Active drivers with their team", body = Vec<DriverResponse>)
    ),
    tag = "drivers"
)]
pub async fn list_drivers(State(db): State<Database>) -> Result<Response, WebError> {
    let drivers = services::list_drivers(db.pool()).await?;

    Ok(Json(drivers).into_response())
}

#[utoipa::path(
    get,
    path = "/api/teams",
    responses(
        (status = 200, description = "All teams", body = Vec<Team>)
    ),
    tag = "drivers"
)]
pub async fn list_teams(State(db): State<Database>) -> Result<Response, WebError> {
    let teams = services::list_teams(db.pool()).await?;

    Ok(Json(teams).into_response())
}

#[utoipa::path(
    post,
    path = "/api/drivers",
    request_body = CreateDriverRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Driver created"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Driver code already exists")
    ),
    tag = "drivers"
)]
pub async fn create_driver(
    State(db): State<Database>,
    Json(req): Json<CreateDriverRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let driver = services::create_driver(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(driver)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/teams",
    request_body = CreateTeamRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Team created", body = Team),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Team slug already exists")
    ),
    tag = "drivers"
)]
pub async fn create_team(
    State(db): State<Database>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let team = services::create_team(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(team)).into_response())
}
