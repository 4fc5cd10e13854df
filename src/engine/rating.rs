use crate::models::{GoalEvent, Match, Phase, Player};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

pub const RATING_FLOOR: i64 = 65;
pub const RATING_CAP: i64 = 99;

/// Per-goal value by the phase it was scored in; late-round goals weigh
/// more. Also the flat fallback when a goal's match is missing from the
/// supplied history.
fn goal_value(phase: Option<Phase>) -> i64 {
    match phase {
        Some(Phase::Final) => 8,
        Some(Phase::Semifinal) => 6,
        Some(Phase::Group) | Some(Phase::Quarterfinal) | None => 5,
    }
}

/// Bonus on top of a win for the round it was won in; advancing rounds
/// signals sustained performance.
fn advancement_bonus(phase: Phase) -> i64 {
    match phase {
        Phase::Group => 0,
        Phase::Quarterfinal => 2,
        Phase::Semifinal => 3,
        Phase::Final => 5,
    }
}

/// Collectible-card stats. Derived, bounded, never persisted; the displayed
/// card must match these numbers exactly.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlayerCard {
    pub player_id: Uuid,
    pub rating: i64,
    pub pace: i64,
    pub shooting: i64,
    pub passing: i64,
    pub dribbling: i64,
    pub defense: i64,
    pub physical: i64,
}

fn clamp(value: i64) -> i64 {
    value.clamp(RATING_FLOOR, RATING_CAP)
}

/// Recompute a player's card from full history.
///
/// `team_matches` is every match of the player's team, `goals` every goal
/// event of the player. Participation is tracked at team level: each played
/// team match counts whether or not the player appeared.
pub fn compute_card(player: &Player, team_matches: &[Match], goals: &[GoalEvent]) -> PlayerCard {
    let by_id: HashMap<Uuid, &Match> = team_matches.iter().map(|m| (m.id, m)).collect();

    let goal_count = goals.len() as i64;
    let goal_points: i64 = goals
        .iter()
        .map(|g| goal_value(by_id.get(&g.match_id).map(|m| m.phase)))
        .sum();

    let mut matches_played: i64 = 0;
    let mut performance: i64 = 0;
    for m in team_matches {
        if !m.played {
            continue;
        }
        let side = match m.side_of(player.team_id) {
            Some(side) => side,
            None => continue,
        };
        matches_played += 1;

        let own = i64::from(m.goals_on(side));
        let opp = i64::from(m.goals_on(side.opposite()));
        let diff = own - opp;

        performance += if diff > 0 {
            4 + 2 * diff + advancement_bonus(m.phase)
        } else if diff == 0 {
            1
        } else {
            -2 + diff
        };
    }

    let rating = clamp(RATING_FLOOR + goal_points + matches_played + performance);

    PlayerCard {
        player_id: player.id,
        rating,
        pace: clamp(rating + 2),
        shooting: clamp(60 + 2 * goal_count),
        passing: clamp(65 + 2 * matches_played),
        dribbling: clamp(rating - 1),
        defense: clamp((60.0 + 0.5 * performance as f64).round() as i64),
        physical: clamp((70.0 + 0.3 * performance as f64).round() as i64),
    }
}
