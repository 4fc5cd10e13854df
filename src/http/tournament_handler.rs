use crate::api_error::ApiError;
use crate::engine::Pairing;
use crate::http::AppState;
use crate::models::{
    CreateMatchRequest, CreatePlayerRequest, CreateTeamRequest, CreateTournamentRequest, Phase,
};
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

/// POST /api/tournaments
pub async fn create_tournament<S: Store>(
    state: web::Data<AppState<S>>,
    req: web::Json<CreateTournamentRequest>,
) -> Result<impl Responder, ApiError> {
    let tournament = state.tournaments.create_tournament(req.into_inner()).await?;
    Ok(HttpResponse::Created().json(tournament))
}

/// POST /api/tournaments/:id/teams
pub async fn create_team<S: Store>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
    req: web::Json<CreateTeamRequest>,
) -> Result<impl Responder, ApiError> {
    let team = state
        .tournaments
        .create_team(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(team))
}

/// POST /api/teams/:id/players
pub async fn create_player<S: Store>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
    req: web::Json<CreatePlayerRequest>,
) -> Result<impl Responder, ApiError> {
    let player = state
        .tournaments
        .create_player(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(player))
}

/// POST /api/tournaments/:id/matches
pub async fn create_match<S: Store>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
    req: web::Json<CreateMatchRequest>,
) -> Result<impl Responder, ApiError> {
    let m = state
        .tournaments
        .create_group_match(path.into_inner(), req.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(m))
}

/// GET /api/tournaments/:id/matches
pub async fn list_matches<S: Store>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, ApiError> {
    let matches = state.tournaments.matches(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(matches))
}

/// GET /api/tournaments/:id/standings
pub async fn standings<S: Store>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, ApiError> {
    let table = state.tournaments.standings(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(table))
}

/// GET /api/tournaments/:id/bracket
pub async fn bracket<S: Store>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, ApiError> {
    let bracket = state.tournaments.bracket(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(bracket))
}

#[derive(Debug, Deserialize)]
pub struct ActivatePhaseRequest {
    pub phase: Phase,
    pub pairings: Vec<Pairing>,
}

/// POST /api/tournaments/:id/phases
/// Administrator confirmation of the next knockout round.
pub async fn activate_phase<S: Store>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
    req: web::Json<ActivatePhaseRequest>,
) -> Result<impl Responder, ApiError> {
    let tournament_id = path.into_inner();
    let req = req.into_inner();
    info!(
        tournament_id = %tournament_id,
        phase = %req.phase,
        "Received phase activation request"
    );

    let created = state
        .tournaments
        .activate_phase(tournament_id, req.phase, req.pairings)
        .await?;
    Ok(HttpResponse::Created().json(created))
}
