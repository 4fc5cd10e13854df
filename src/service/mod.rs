// Service layer: load entities, run the pure engine, persist the result.
pub mod locks;
pub mod match_service;
pub mod player_service;
pub mod tournament_service;

#[cfg(test)]
mod match_service_test;

pub use match_service::MatchService;
pub use player_service::PlayerService;
pub use tournament_service::{BracketResponse, TournamentService};
