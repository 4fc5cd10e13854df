use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub name: String,
    pub logo: Option<String>,
    pub group_no: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 2, max = 255))]
    pub name: String,
    pub logo: Option<String>,
    #[validate(range(min = 1, max = 16))]
    pub group_no: i32,
}

impl Team {
    pub fn from_request(tournament_id: Uuid, req: CreateTeamRequest) -> Self {
        Team {
            id: Uuid::new_v4(),
            tournament_id,
            name: req.name,
            logo: req.logo,
            group_no: req.group_no,
            created_at: Utc::now(),
        }
    }
}
