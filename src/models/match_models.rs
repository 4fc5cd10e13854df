use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Competition phase - a closed enumeration, never matched by substring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "match_phase", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Group,
    Quarterfinal,
    Semifinal,
    Final,
}

impl Phase {
    pub fn is_knockout(&self) -> bool {
        !matches!(self, Phase::Group)
    }

    /// The phase whose matches must all be played before this one may be
    /// generated. For the first knockout round that is the group stage.
    pub fn preceding(&self) -> Option<Phase> {
        match self {
            Phase::Group => None,
            Phase::Quarterfinal => Some(Phase::Group),
            Phase::Semifinal => Some(Phase::Quarterfinal),
            Phase::Final => Some(Phase::Semifinal),
        }
    }

    pub fn next(&self) -> Option<Phase> {
        match self {
            Phase::Group => Some(Phase::Quarterfinal),
            Phase::Quarterfinal => Some(Phase::Semifinal),
            Phase::Semifinal => Some(Phase::Final),
            Phase::Final => None,
        }
    }

    /// Entry round of a single-elimination bracket over `team_count` seeds.
    /// Only powers of two between 2 and 8 fit the supported bracket depth.
    pub fn first_knockout_for(team_count: usize) -> Option<Phase> {
        match team_count {
            2 => Some(Phase::Final),
            4 => Some(Phase::Semifinal),
            8 => Some(Phase::Quarterfinal),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Group => write!(f, "group"),
            Phase::Quarterfinal => write!(f, "quarterfinal"),
            Phase::Semifinal => write!(f, "semifinal"),
            Phase::Final => write!(f, "final"),
        }
    }
}

/// Which of the two match slots a goal is credited to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    TeamA,
    TeamB,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::TeamA => Side::TeamB,
            Side::TeamB => Side::TeamA,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::TeamA => write!(f, "team_a"),
            Side::TeamB => write!(f, "team_b"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Match {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub team_a_id: Uuid,
    pub team_b_id: Uuid,
    pub kickoff: DateTime<Utc>,
    pub field: i32,
    pub referee: Option<String>,
    pub phase: Phase,
    pub team_a_goals: i32,
    pub team_b_goals: i32,
    pub played: bool,
    pub created_at: DateTime<Utc>,
}

impl Match {
    pub fn team_on(&self, side: Side) -> Uuid {
        match side {
            Side::TeamA => self.team_a_id,
            Side::TeamB => self.team_b_id,
        }
    }

    pub fn goals_on(&self, side: Side) -> i32 {
        match side {
            Side::TeamA => self.team_a_goals,
            Side::TeamB => self.team_b_goals,
        }
    }

    pub fn side_of(&self, team_id: Uuid) -> Option<Side> {
        if team_id == self.team_a_id {
            Some(Side::TeamA)
        } else if team_id == self.team_b_id {
            Some(Side::TeamB)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMatchRequest {
    pub team_a_id: Uuid,
    pub team_b_id: Uuid,
    pub kickoff: DateTime<Utc>,
    #[validate(range(min = 1, max = 16))]
    pub field: i32,
    #[validate(length(max = 255))]
    pub referee: Option<String>,
}

impl Match {
    /// New unplayed group-stage fixture.
    pub fn from_request(tournament_id: Uuid, req: CreateMatchRequest) -> Self {
        Match {
            id: Uuid::new_v4(),
            tournament_id,
            team_a_id: req.team_a_id,
            team_b_id: req.team_b_id,
            kickoff: req.kickoff,
            field: req.field,
            referee: req.referee,
            phase: Phase::Group,
            team_a_goals: 0,
            team_b_goals: 0,
            played: false,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportGoalRequest {
    pub player_id: Uuid,
    pub team_id: Uuid,
    pub side: Side,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalizeMatchRequest {
    pub team_a_goals: i64,
    pub team_b_goals: i64,
}

/// Aggregate score as returned by ledger and admin operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScoreResponse {
    pub match_id: Uuid,
    pub team_a_id: Uuid,
    pub team_b_id: Uuid,
    pub team_a_goals: i32,
    pub team_b_goals: i32,
    pub played: bool,
}

impl From<&Match> for MatchScoreResponse {
    fn from(m: &Match) -> Self {
        MatchScoreResponse {
            match_id: m.id,
            team_a_id: m.team_a_id,
            team_b_id: m.team_b_id,
            team_a_goals: m.team_a_goals,
            team_b_goals: m.team_b_goals,
            played: m.played,
        }
    }
}
