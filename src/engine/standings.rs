use crate::models::{Match, Phase, Team};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

pub const POINTS_WIN: i32 = 2;
pub const POINTS_DRAW: i32 = 1;

/// Derived table row; recomputed on every read, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StandingsRow {
    pub team_id: Uuid,
    pub points: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub games_played: i32,
}

impl StandingsRow {
    pub fn goal_difference(&self) -> i32 {
        self.goals_for - self.goals_against
    }
}

/// Fold all played group-stage matches into a ranked table.
///
/// Knockout matches never contribute. Teams without a played match still
/// appear and sink to the bottom by the sort key. Order: points desc, goal
/// difference desc, then team id asc as the deterministic tertiary
/// tie-break.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<StandingsRow> {
    let mut rows: HashMap<Uuid, StandingsRow> = teams
        .iter()
        .map(|t| {
            (
                t.id,
                StandingsRow {
                    team_id: t.id,
                    points: 0,
                    goals_for: 0,
                    goals_against: 0,
                    games_played: 0,
                },
            )
        })
        .collect();

    for m in matches {
        if m.phase != Phase::Group || !m.played {
            continue;
        }
        let (a_pts, b_pts) = if m.team_a_goals > m.team_b_goals {
            (POINTS_WIN, 0)
        } else if m.team_a_goals < m.team_b_goals {
            (0, POINTS_WIN)
        } else {
            (POINTS_DRAW, POINTS_DRAW)
        };

        if let Some(row) = rows.get_mut(&m.team_a_id) {
            row.points += a_pts;
            row.goals_for += m.team_a_goals;
            row.goals_against += m.team_b_goals;
            row.games_played += 1;
        }
        if let Some(row) = rows.get_mut(&m.team_b_id) {
            row.points += b_pts;
            row.goals_for += m.team_b_goals;
            row.goals_against += m.team_a_goals;
            row.games_played += 1;
        }
    }

    let mut table: Vec<StandingsRow> = rows.into_values().collect();
    table.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference().cmp(&a.goal_difference()))
            .then(a.team_id.cmp(&b.team_id))
    });
    table
}
