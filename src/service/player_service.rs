use crate::api_error::ApiError;
use crate::engine::rating::compute_card;
use crate::engine::PlayerCard;
use crate::store::Store;
use std::sync::Arc;
use uuid::Uuid;

/// Player-card reads. Nothing here is persisted: the card is re-derived
/// from match and goal history on every request.
pub struct PlayerService<S> {
    store: Arc<S>,
}

impl<S: Store> PlayerService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn card(&self, player_id: Uuid) -> Result<PlayerCard, ApiError> {
        let player = self
            .store
            .player(player_id)
            .await?
            .ok_or(ApiError::NotFound)?;
        let team_matches = self.store.matches_by_team(player.team_id).await?;
        let goals = self.store.events_by_player(player_id).await?;
        Ok(compute_card(&player, &team_matches, &goals))
    }
}
