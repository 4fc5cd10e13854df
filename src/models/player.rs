use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Player {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub jersey_number: i32,
    /// Free text, end-user editable. Identity (id/team) is not.
    pub position: String,
    pub is_goalkeeper: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePlayerRequest {
    #[validate(length(min = 2, max = 255))]
    pub name: String,
    #[validate(range(min = 1, max = 99))]
    pub jersey_number: i32,
    #[validate(length(max = 50))]
    pub position: String,
    #[serde(default)]
    pub is_goalkeeper: bool,
}

impl Player {
    pub fn from_request(team_id: Uuid, req: CreatePlayerRequest) -> Self {
        Player {
            id: Uuid::new_v4(),
            team_id,
            name: req.name,
            jersey_number: req.jersey_number,
            position: req.position,
            is_goalkeeper: req.is_goalkeeper,
            created_at: Utc::now(),
        }
    }
}
