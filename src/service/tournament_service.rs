use crate::api_error::ApiError;
use crate::engine::bracket::{
    bracket_state, build_phase_matches, eligible_phase, validate_activation,
};
use crate::engine::standings::compute_standings;
use crate::engine::{BracketState, EngineError, Pairing, PhaseEligibility, StandingsRow};
use crate::models::{
    CreateMatchRequest, CreatePlayerRequest, CreateTeamRequest, CreateTournamentRequest, Match,
    Phase, Player, Team, Tournament,
};
use crate::store::Store;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Derived bracket view: the advancement state plus, when a phase is
/// activatable, its computed pairings for the administrator to confirm.
#[derive(Debug, Serialize)]
pub struct BracketResponse {
    pub state: BracketState,
    pub eligible: Option<PhaseEligibility>,
}

/// Standings reads, bracket progression, and the admin glue that creates
/// the entities everything else hangs off.
pub struct TournamentService<S> {
    store: Arc<S>,
}

impl<S: Store> TournamentService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn create_tournament(
        &self,
        req: CreateTournamentRequest,
    ) -> Result<Tournament, ApiError> {
        req.validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;
        let tournament = Tournament::from_request(req);
        self.store.insert_tournament(&tournament).await?;
        info!(tournament_id = %tournament.id, name = %tournament.name, "tournament created");
        Ok(tournament)
    }

    pub async fn create_team(
        &self,
        tournament_id: Uuid,
        req: CreateTeamRequest,
    ) -> Result<Team, ApiError> {
        req.validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;
        self.store
            .tournament(tournament_id)
            .await?
            .ok_or(ApiError::NotFound)?;
        let team = Team::from_request(tournament_id, req);
        self.store.insert_team(&team).await?;
        Ok(team)
    }

    pub async fn create_player(
        &self,
        team_id: Uuid,
        req: CreatePlayerRequest,
    ) -> Result<Player, ApiError> {
        req.validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;
        self.store.team(team_id).await?.ok_or(ApiError::NotFound)?;
        let player = Player::from_request(team_id, req);
        self.store.insert_player(&player).await?;
        Ok(player)
    }

    /// Group-stage fixtures only; knockout matches exist solely through
    /// phase activation.
    pub async fn create_group_match(
        &self,
        tournament_id: Uuid,
        req: CreateMatchRequest,
    ) -> Result<Match, ApiError> {
        req.validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;
        self.store
            .tournament(tournament_id)
            .await?
            .ok_or(ApiError::NotFound)?;
        for team_id in [req.team_a_id, req.team_b_id] {
            let team = self.store.team(team_id).await?.ok_or_else(|| {
                EngineError::InvalidReference(format!("team {} does not exist", team_id))
            })?;
            if team.tournament_id != tournament_id {
                return Err(EngineError::InvalidReference(format!(
                    "team {} belongs to another tournament",
                    team_id
                ))
                .into());
            }
        }
        let m = Match::from_request(tournament_id, req);
        self.store.insert_matches(std::slice::from_ref(&m)).await?;
        Ok(m)
    }

    pub async fn matches(&self, tournament_id: Uuid) -> Result<Vec<Match>, ApiError> {
        self.store
            .tournament(tournament_id)
            .await?
            .ok_or(ApiError::NotFound)?;
        Ok(self.store.matches_by_tournament(tournament_id).await?)
    }

    /// Recomputed from the full group-stage history on every call.
    pub async fn standings(&self, tournament_id: Uuid) -> Result<Vec<StandingsRow>, ApiError> {
        self.store
            .tournament(tournament_id)
            .await?
            .ok_or(ApiError::NotFound)?;
        let teams = self.store.teams_by_tournament(tournament_id).await?;
        let matches = self.store.matches_by_tournament(tournament_id).await?;
        Ok(compute_standings(&teams, &matches))
    }

    pub async fn bracket(&self, tournament_id: Uuid) -> Result<BracketResponse, ApiError> {
        let tournament = self
            .store
            .tournament(tournament_id)
            .await?
            .ok_or(ApiError::NotFound)?;
        let teams = self.store.teams_by_tournament(tournament_id).await?;
        let matches = self.store.matches_by_tournament(tournament_id).await?;

        let state = bracket_state(&tournament, &teams, &matches)?;
        let eligible = eligible_phase(&tournament, &teams, &matches)?;
        Ok(BracketResponse { state, eligible })
    }

    /// Manual, administrator-confirmed activation of the next knockout
    /// phase. The engine decides nothing on its own; it only checks that
    /// the request matches what the history allows.
    pub async fn activate_phase(
        &self,
        tournament_id: Uuid,
        phase: Phase,
        pairings: Vec<Pairing>,
    ) -> Result<Vec<Match>, ApiError> {
        let tournament = self
            .store
            .tournament(tournament_id)
            .await?
            .ok_or(ApiError::NotFound)?;
        let teams = self.store.teams_by_tournament(tournament_id).await?;
        let matches = self.store.matches_by_tournament(tournament_id).await?;

        let eligibility = validate_activation(&tournament, &teams, &matches, phase, &pairings)?;
        let created = build_phase_matches(tournament_id, &eligibility, Utc::now());
        self.store.insert_matches(&created).await?;

        info!(
            tournament_id = %tournament_id,
            phase = %phase,
            fixtures = created.len(),
            "knockout phase activated"
        );
        Ok(created)
    }
}
