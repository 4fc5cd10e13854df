use crate::api_error::ApiError;
use crate::engine::ledger;
use crate::models::{FinalizeMatchRequest, Match, MatchScoreResponse, ReportGoalRequest};
use crate::service::locks::MatchLocks;
use crate::store::Store;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Goal Ledger operations plus the separate administrator score path.
/// Every mutation runs under the per-match lock and is written back
/// atomically by the store.
pub struct MatchService<S> {
    store: Arc<S>,
    locks: MatchLocks,
}

impl<S: Store> MatchService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            locks: MatchLocks::new(),
        }
    }

    async fn load_match(&self, match_id: Uuid) -> Result<Match, ApiError> {
        self.store
            .match_by_id(match_id)
            .await?
            .ok_or(ApiError::NotFound)
    }

    pub async fn report_goal(
        &self,
        match_id: Uuid,
        req: ReportGoalRequest,
    ) -> Result<MatchScoreResponse, ApiError> {
        let lock = self.locks.for_match(match_id);
        let _guard = lock.lock().await;

        let m = self.load_match(match_id).await?;
        let player = self
            .store
            .player(req.player_id)
            .await?
            .ok_or(ApiError::NotFound)?;
        let team = self.store.team(req.team_id).await?.ok_or(ApiError::NotFound)?;
        let events = self.store.events_by_match(match_id).await?;

        let (updated, event) =
            ledger::record_goal(&m, &player, &team, req.side, ledger::next_ordinal(&events))?;
        self.store.persist_goal(&updated, &event).await?;

        let score = format!("{}-{}", updated.team_a_goals, updated.team_b_goals);
        info!(
            match_id = %match_id,
            player_id = %player.id,
            side = %req.side,
            score = %score,
            "goal recorded"
        );
        Ok((&updated).into())
    }

    pub async fn undo_goal(
        &self,
        match_id: Uuid,
        req: ReportGoalRequest,
    ) -> Result<MatchScoreResponse, ApiError> {
        let lock = self.locks.for_match(match_id);
        let _guard = lock.lock().await;

        let m = self.load_match(match_id).await?;
        let events = self.store.events_by_match(match_id).await?;

        let (updated, removed) =
            ledger::undo_last_goal(&m, &events, req.player_id, req.team_id, req.side)?;
        self.store.persist_undo(&updated, removed).await?;

        info!(
            match_id = %match_id,
            player_id = %req.player_id,
            event_id = %removed,
            "goal undone"
        );
        Ok((&updated).into())
    }

    /// Administrator score correction. Distinct from the ledger: it writes
    /// the counters directly and is refused while the match is locked.
    pub async fn finalize(
        &self,
        match_id: Uuid,
        req: FinalizeMatchRequest,
    ) -> Result<MatchScoreResponse, ApiError> {
        let lock = self.locks.for_match(match_id);
        let _guard = lock.lock().await;

        let m = self.load_match(match_id).await?;
        if m.played {
            return Err(ApiError::Conflict(
                "match is locked; unlock it before correcting the score".to_string(),
            ));
        }

        let updated = ledger::apply_score_correction(&m, req.team_a_goals, req.team_b_goals)?;
        self.store.update_match(&updated).await?;

        let score = format!("{}-{}", updated.team_a_goals, updated.team_b_goals);
        warn!(
            match_id = %match_id,
            score = %score,
            "score set by administrator"
        );
        Ok((&updated).into())
    }

    pub async fn unlock(&self, match_id: Uuid) -> Result<MatchScoreResponse, ApiError> {
        let lock = self.locks.for_match(match_id);
        let _guard = lock.lock().await;

        let mut m = self.load_match(match_id).await?;
        m.played = false;
        self.store.update_match(&m).await?;

        warn!(match_id = %match_id, "match unlocked for score edits");
        Ok((&m).into())
    }
}
