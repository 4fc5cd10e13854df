use crate::models::{GoalEvent, Match, Player, Team, Tournament};
use thiserror::Error;
use uuid::Uuid;

pub mod memory;
pub mod pg;

pub use memory::MemStore;
pub use pg::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Keyed read/write of the persisted entities. The engine never touches
/// this directly; services load through it, run the pure core, and write
/// the result back. Ledger writes are atomic per call: a goal and its
/// match update land together or not at all.
#[allow(async_fn_in_trait)]
pub trait Store: Send + Sync + 'static {
    async fn tournament(&self, id: Uuid) -> Result<Option<Tournament>, StoreError>;
    async fn insert_tournament(&self, tournament: &Tournament) -> Result<(), StoreError>;

    async fn team(&self, id: Uuid) -> Result<Option<Team>, StoreError>;
    async fn teams_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<Team>, StoreError>;
    async fn insert_team(&self, team: &Team) -> Result<(), StoreError>;

    async fn player(&self, id: Uuid) -> Result<Option<Player>, StoreError>;
    async fn insert_player(&self, player: &Player) -> Result<(), StoreError>;

    async fn match_by_id(&self, id: Uuid) -> Result<Option<Match>, StoreError>;
    async fn matches_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<Match>, StoreError>;
    async fn matches_by_team(&self, team_id: Uuid) -> Result<Vec<Match>, StoreError>;
    async fn insert_matches(&self, matches: &[Match]) -> Result<(), StoreError>;
    async fn update_match(&self, m: &Match) -> Result<(), StoreError>;

    async fn events_by_match(&self, match_id: Uuid) -> Result<Vec<GoalEvent>, StoreError>;
    async fn events_by_player(&self, player_id: Uuid) -> Result<Vec<GoalEvent>, StoreError>;
    /// Write an updated match together with its new goal event.
    async fn persist_goal(&self, m: &Match, event: &GoalEvent) -> Result<(), StoreError>;
    /// Write an updated match and delete the undone goal event.
    async fn persist_undo(&self, m: &Match, event_id: Uuid) -> Result<(), StoreError>;
}
