use crate::engine::EngineError;
use crate::models::{GoalEvent, Match, Player, Side, Team};
use chrono::Utc;
use uuid::Uuid;

/// Append a goal for `player` of `team` on the stated side of `m`.
///
/// The aggregate counters are derived from the event log, so this is the
/// only path that may increment them; administrator corrections go through
/// the separate finalize operation. Recording a goal always marks the match
/// as played.
pub fn record_goal(
    m: &Match,
    player: &Player,
    team: &Team,
    side: Side,
    next_ordinal: i32,
) -> Result<(Match, GoalEvent), EngineError> {
    if m.team_on(side) != team.id {
        return Err(EngineError::InvalidReference(format!(
            "team {} is not {} of match {}",
            team.id, side, m.id
        )));
    }
    if player.team_id != team.id {
        return Err(EngineError::InvalidReference(format!(
            "player {} does not belong to team {}",
            player.id, team.id
        )));
    }

    let event = GoalEvent {
        id: Uuid::new_v4(),
        match_id: m.id,
        player_id: player.id,
        team_id: team.id,
        ordinal: next_ordinal,
        created_at: Utc::now(),
    };

    let mut updated = m.clone();
    match side {
        Side::TeamA => updated.team_a_goals += 1,
        Side::TeamB => updated.team_b_goals += 1,
    }
    updated.played = true;

    Ok((updated, event))
}

/// Remove the most recently inserted event matching (match, player, team)
/// and decrement the side counter, floored at zero.
///
/// `played` is left untouched: a finalized match stays finalized until
/// explicitly unlocked, even when its last goal is undone.
pub fn undo_last_goal(
    m: &Match,
    events: &[GoalEvent],
    player_id: Uuid,
    team_id: Uuid,
    side: Side,
) -> Result<(Match, Uuid), EngineError> {
    if m.team_on(side) != team_id {
        return Err(EngineError::InvalidReference(format!(
            "team {} is not {} of match {}",
            team_id, side, m.id
        )));
    }

    let last = events
        .iter()
        .filter(|e| e.match_id == m.id && e.player_id == player_id && e.team_id == team_id)
        .max_by_key(|e| e.ordinal)
        .ok_or(EngineError::NoSuchEvent)?;

    let mut updated = m.clone();
    match side {
        Side::TeamA => updated.team_a_goals = (updated.team_a_goals - 1).max(0),
        Side::TeamB => updated.team_b_goals = (updated.team_b_goals - 1).max(0),
    }

    Ok((updated, last.id))
}

/// Administrator score correction. Rejected while the match is locked
/// (`played`); the unlock operation clears the flag first. Marks the match
/// played, which is how a 0-0 result gets finalized.
pub fn apply_score_correction(
    m: &Match,
    team_a_goals: i64,
    team_b_goals: i64,
) -> Result<Match, EngineError> {
    if team_a_goals < 0 || team_b_goals < 0 {
        return Err(EngineError::InvalidScore(format!(
            "goal counts must be non-negative, got {}-{}",
            team_a_goals, team_b_goals
        )));
    }
    let (a, b) = match (i32::try_from(team_a_goals), i32::try_from(team_b_goals)) {
        (Ok(a), Ok(b)) => (a, b),
        _ => {
            return Err(EngineError::InvalidScore(format!(
                "goal counts out of range, got {}-{}",
                team_a_goals, team_b_goals
            )));
        }
    };
    let mut updated = m.clone();
    updated.team_a_goals = a;
    updated.team_b_goals = b;
    updated.played = true;
    Ok(updated)
}

/// Next insertion ordinal for a match's event log.
pub fn next_ordinal(events: &[GoalEvent]) -> i32 {
    events.iter().map(|e| e.ordinal).max().unwrap_or(0) + 1
}
