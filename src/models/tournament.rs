use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Competition format: a plain league plays only the round-robin table,
/// a championship follows the group stage with a knockout bracket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "tournament_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TournamentKind {
    League,
    Championship,
}

impl std::fmt::Display for TournamentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentKind::League => write!(f, "league"),
            TournamentKind::Championship => write!(f, "championship"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tournament {
    pub id: Uuid,
    pub name: String,
    pub kind: TournamentKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTournamentRequest {
    #[validate(length(min = 3, max = 255))]
    pub name: String,
    pub kind: TournamentKind,
}

impl Tournament {
    pub fn from_request(req: CreateTournamentRequest) -> Self {
        Tournament {
            id: Uuid::new_v4(),
            name: req.name,
            kind: req.kind,
            created_at: Utc::now(),
        }
    }
}
