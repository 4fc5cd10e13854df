use crate::db::DbPool;
use crate::models::{GoalEvent, Match, Player, Team, Tournament};
use crate::store::{Store, StoreError};
use uuid::Uuid;

/// Postgres-backed store. Plain runtime queries; the schema lives under
/// `migrations/`.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

const MATCH_COLUMNS: &str = "id, tournament_id, team_a_id, team_b_id, kickoff, field, referee, \
                             phase, team_a_goals, team_b_goals, played, created_at";

impl Store for PgStore {
    async fn tournament(&self, id: Uuid) -> Result<Option<Tournament>, StoreError> {
        let row = sqlx::query_as::<_, Tournament>(
            "SELECT id, name, kind, created_at FROM tournaments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_tournament(&self, tournament: &Tournament) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO tournaments (id, name, kind, created_at) VALUES ($1, $2, $3, $4)")
            .bind(tournament.id)
            .bind(&tournament.name)
            .bind(tournament.kind)
            .bind(tournament.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn team(&self, id: Uuid) -> Result<Option<Team>, StoreError> {
        let row = sqlx::query_as::<_, Team>(
            "SELECT id, tournament_id, name, logo, group_no, created_at FROM teams WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn teams_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<Team>, StoreError> {
        let rows = sqlx::query_as::<_, Team>(
            "SELECT id, tournament_id, name, logo, group_no, created_at \
             FROM teams WHERE tournament_id = $1 ORDER BY group_no, name",
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_team(&self, team: &Team) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO teams (id, tournament_id, name, logo, group_no, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(team.id)
        .bind(team.tournament_id)
        .bind(&team.name)
        .bind(&team.logo)
        .bind(team.group_no)
        .bind(team.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn player(&self, id: Uuid) -> Result<Option<Player>, StoreError> {
        let row = sqlx::query_as::<_, Player>(
            "SELECT id, team_id, name, jersey_number, position, is_goalkeeper, created_at \
             FROM players WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_player(&self, player: &Player) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO players (id, team_id, name, jersey_number, position, is_goalkeeper, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(player.id)
        .bind(player.team_id)
        .bind(&player.name)
        .bind(player.jersey_number)
        .bind(&player.position)
        .bind(player.is_goalkeeper)
        .bind(player.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn match_by_id(&self, id: Uuid) -> Result<Option<Match>, StoreError> {
        let row = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn matches_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<Match>, StoreError> {
        let rows = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches WHERE tournament_id = $1 ORDER BY kickoff, id"
        ))
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn matches_by_team(&self, team_id: Uuid) -> Result<Vec<Match>, StoreError> {
        let rows = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches \
             WHERE team_a_id = $1 OR team_b_id = $1 ORDER BY kickoff, id"
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_matches(&self, matches: &[Match]) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        for m in matches {
            sqlx::query(
                "INSERT INTO matches (id, tournament_id, team_a_id, team_b_id, kickoff, field, \
                 referee, phase, team_a_goals, team_b_goals, played, created_at) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
            )
            .bind(m.id)
            .bind(m.tournament_id)
            .bind(m.team_a_id)
            .bind(m.team_b_id)
            .bind(m.kickoff)
            .bind(m.field)
            .bind(&m.referee)
            .bind(m.phase)
            .bind(m.team_a_goals)
            .bind(m.team_b_goals)
            .bind(m.played)
            .bind(m.created_at)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn update_match(&self, m: &Match) -> Result<(), StoreError> {
        sqlx::query(
            "UPDATE matches SET kickoff = $2, field = $3, referee = $4, \
             team_a_goals = $5, team_b_goals = $6, played = $7 WHERE id = $1",
        )
        .bind(m.id)
        .bind(m.kickoff)
        .bind(m.field)
        .bind(&m.referee)
        .bind(m.team_a_goals)
        .bind(m.team_b_goals)
        .bind(m.played)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn events_by_match(&self, match_id: Uuid) -> Result<Vec<GoalEvent>, StoreError> {
        let rows = sqlx::query_as::<_, GoalEvent>(
            "SELECT id, match_id, player_id, team_id, ordinal, created_at \
             FROM goal_events WHERE match_id = $1 ORDER BY ordinal",
        )
        .bind(match_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn events_by_player(&self, player_id: Uuid) -> Result<Vec<GoalEvent>, StoreError> {
        let rows = sqlx::query_as::<_, GoalEvent>(
            "SELECT id, match_id, player_id, team_id, ordinal, created_at \
             FROM goal_events WHERE player_id = $1 ORDER BY ordinal",
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn persist_goal(&self, m: &Match, event: &GoalEvent) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            "INSERT INTO goal_events (id, match_id, player_id, team_id, ordinal, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(event.id)
        .bind(event.match_id)
        .bind(event.player_id)
        .bind(event.team_id)
        .bind(event.ordinal)
        .bind(event.created_at)
        .execute(&mut *tx)
        .await?;
        sqlx::query(
            "UPDATE matches SET team_a_goals = $2, team_b_goals = $3, played = $4 WHERE id = $1",
        )
        .bind(m.id)
        .bind(m.team_a_goals)
        .bind(m.team_b_goals)
        .bind(m.played)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn persist_undo(&self, m: &Match, event_id: Uuid) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM goal_events WHERE id = $1")
            .bind(event_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query(
            "UPDATE matches SET team_a_goals = $2, team_b_goals = $3, played = $4 WHERE id = $1",
        )
        .bind(m.id)
        .bind(m.team_a_goals)
        .bind(m.team_b_goals)
        .bind(m.played)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(())
    }
}
