use crate::models::{GoalEvent, Match, Player, Team, Tournament};
use crate::store::{Store, StoreError};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// In-memory store used by service tests and local development. Same
/// contract as the Postgres store, including the atomic ledger writes.
#[derive(Default)]
pub struct MemStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    tournaments: HashMap<Uuid, Tournament>,
    teams: HashMap<Uuid, Team>,
    players: HashMap<Uuid, Player>,
    matches: HashMap<Uuid, Match>,
    events: HashMap<Uuid, GoalEvent>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemStore {
    async fn tournament(&self, id: Uuid) -> Result<Option<Tournament>, StoreError> {
        Ok(self.inner.read().unwrap().tournaments.get(&id).cloned())
    }

    async fn insert_tournament(&self, tournament: &Tournament) -> Result<(), StoreError> {
        self.inner
            .write()
            .unwrap()
            .tournaments
            .insert(tournament.id, tournament.clone());
        Ok(())
    }

    async fn team(&self, id: Uuid) -> Result<Option<Team>, StoreError> {
        Ok(self.inner.read().unwrap().teams.get(&id).cloned())
    }

    async fn teams_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<Team>, StoreError> {
        let mut teams: Vec<Team> = self
            .inner
            .read()
            .unwrap()
            .teams
            .values()
            .filter(|t| t.tournament_id == tournament_id)
            .cloned()
            .collect();
        teams.sort_by(|a, b| (a.group_no, &a.name).cmp(&(b.group_no, &b.name)));
        Ok(teams)
    }

    async fn insert_team(&self, team: &Team) -> Result<(), StoreError> {
        self.inner
            .write()
            .unwrap()
            .teams
            .insert(team.id, team.clone());
        Ok(())
    }

    async fn player(&self, id: Uuid) -> Result<Option<Player>, StoreError> {
        Ok(self.inner.read().unwrap().players.get(&id).cloned())
    }

    async fn insert_player(&self, player: &Player) -> Result<(), StoreError> {
        self.inner
            .write()
            .unwrap()
            .players
            .insert(player.id, player.clone());
        Ok(())
    }

    async fn match_by_id(&self, id: Uuid) -> Result<Option<Match>, StoreError> {
        Ok(self.inner.read().unwrap().matches.get(&id).cloned())
    }

    async fn matches_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<Match>, StoreError> {
        let mut matches: Vec<Match> = self
            .inner
            .read()
            .unwrap()
            .matches
            .values()
            .filter(|m| m.tournament_id == tournament_id)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.kickoff.cmp(&b.kickoff).then(a.id.cmp(&b.id)));
        Ok(matches)
    }

    async fn matches_by_team(&self, team_id: Uuid) -> Result<Vec<Match>, StoreError> {
        let mut matches: Vec<Match> = self
            .inner
            .read()
            .unwrap()
            .matches
            .values()
            .filter(|m| m.team_a_id == team_id || m.team_b_id == team_id)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.kickoff.cmp(&b.kickoff).then(a.id.cmp(&b.id)));
        Ok(matches)
    }

    async fn insert_matches(&self, matches: &[Match]) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        for m in matches {
            inner.matches.insert(m.id, m.clone());
        }
        Ok(())
    }

    async fn update_match(&self, m: &Match) -> Result<(), StoreError> {
        self.inner.write().unwrap().matches.insert(m.id, m.clone());
        Ok(())
    }

    async fn events_by_match(&self, match_id: Uuid) -> Result<Vec<GoalEvent>, StoreError> {
        let mut events: Vec<GoalEvent> = self
            .inner
            .read()
            .unwrap()
            .events
            .values()
            .filter(|e| e.match_id == match_id)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.ordinal);
        Ok(events)
    }

    async fn events_by_player(&self, player_id: Uuid) -> Result<Vec<GoalEvent>, StoreError> {
        let mut events: Vec<GoalEvent> = self
            .inner
            .read()
            .unwrap()
            .events
            .values()
            .filter(|e| e.player_id == player_id)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.ordinal);
        Ok(events)
    }

    async fn persist_goal(&self, m: &Match, event: &GoalEvent) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        inner.events.insert(event.id, event.clone());
        inner.matches.insert(m.id, m.clone());
        Ok(())
    }

    async fn persist_undo(&self, m: &Match, event_id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        inner.events.remove(&event_id);
        inner.matches.insert(m.id, m.clone());
        Ok(())
    }
}
