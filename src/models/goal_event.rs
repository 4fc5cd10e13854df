use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One recorded goal. Append-only; the only permitted deletion is the
/// most recent event per (match, player, team), in `ordinal` order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GoalEvent {
    pub id: Uuid,
    pub match_id: Uuid,
    pub player_id: Uuid,
    pub team_id: Uuid,
    /// Insertion order within the match; doubles as undo order.
    pub ordinal: i32,
    pub created_at: DateTime<Utc>,
}
