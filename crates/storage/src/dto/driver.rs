use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a driver
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, max = 10, message = "Code must be 1 to 10 characters"))]
    pub code: String,

    #[validate(length(min = 1, max = 80, message = "Name must be 1 to 80 characters"))]
    pub name: String,

    pub team_id: Option<Uuid>,

    #[serde(default = "default_active")]
    pub active: bool,
}

/// Request payload for creating a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 80, message = "Name must be 1 to 80 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 80))]
    pub slug: String,

    #[validate(custom(function = "validate_color"))]
    pub color: Option<String>,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

fn validate_color(color: &str) -> Result<(), validator::ValidationError> {
    let mut chars = color.chars();
    let is_valid = chars.next() == Some('#')
        && color.len() == 7
        && chars.all(|c| c.is_ascii_hexdigit());

    if is_valid {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_hex_color"))
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeamInfo {
    pub team_id: Uuid,
    pub name: String,
    pub slug: String,
    pub color: Option<String>,
}

/// Driver with its team, for pick forms
#[derive(Debug, Serialize, ToSchema)]
pub struct DriverResponse {
    pub driver_id: Uuid,
    pub code: String,
    pub name: String,
    pub active: bool,
    pub team: Option<TeamInfo>,
}
