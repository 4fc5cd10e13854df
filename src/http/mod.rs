pub mod health;
pub mod match_handler;
pub mod player_handler;
pub mod tournament_handler;

use crate::service::{MatchService, PlayerService, TournamentService};
use crate::store::Store;
use std::sync::Arc;

/// Application state shared by all handlers, generic over the store so the
/// same surface runs against Postgres in production and MemStore in tests.
pub struct AppState<S> {
    pub tournaments: TournamentService<S>,
    pub matches: MatchService<S>,
    pub players: PlayerService<S>,
}

impl<S: Store> AppState<S> {
    pub fn new(store: Arc<S>) -> Self {
        AppState {
            tournaments: TournamentService::new(store.clone()),
            matches: MatchService::new(store.clone()),
            players: PlayerService::new(store),
        }
    }
}
