use crate::engine::standings::compute_standings;
use crate::engine::EngineError;
use crate::models::{Match, Phase, Team, Tournament, TournamentKind};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gap between staggered kickoffs when a phase is activated. Slot order
/// within a phase is recovered from these timestamps (kickoff asc, id asc),
/// which keeps the persisted shape limited to the plain match columns.
const KICKOFF_STAGGER_HOURS: i64 = 2;
const KICKOFF_LEAD_HOURS: i64 = 24;

/// Knockout advancement state, derived on demand from the match list.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BracketState {
    GroupInProgress,
    QuartersEligible,
    QuartersActive,
    SemisEligible,
    SemisActive,
    FinalEligible,
    FinalActive,
    Complete,
}

impl BracketState {
    /// The phase the administrator may activate in this state, if any.
    pub fn eligible_phase(&self) -> Option<Phase> {
        match self {
            BracketState::QuartersEligible => Some(Phase::Quarterfinal),
            BracketState::SemisEligible => Some(Phase::Semifinal),
            BracketState::FinalEligible => Some(Phase::Final),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BracketState::Complete)
    }

    fn eligible_for(phase: Phase) -> BracketState {
        match phase {
            Phase::Quarterfinal => BracketState::QuartersEligible,
            Phase::Semifinal => BracketState::SemisEligible,
            Phase::Final => BracketState::FinalEligible,
            Phase::Group => BracketState::GroupInProgress,
        }
    }

    fn active_for(phase: Phase) -> BracketState {
        match phase {
            Phase::Quarterfinal => BracketState::QuartersActive,
            Phase::Semifinal => BracketState::SemisActive,
            Phase::Final => BracketState::FinalActive,
            Phase::Group => BracketState::GroupInProgress,
        }
    }
}

/// One knockout fixture to be created: team A is the better seed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pairing {
    pub team_a_id: Uuid,
    pub team_b_id: Uuid,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PhaseEligibility {
    pub phase: Phase,
    pub pairings: Vec<Pairing>,
}

/// Matches of one phase in bracket-slot order.
fn phase_matches<'a>(matches: &'a [Match], phase: Phase) -> Vec<&'a Match> {
    let mut ms: Vec<&Match> = matches.iter().filter(|m| m.phase == phase).collect();
    ms.sort_by(|a, b| a.kickoff.cmp(&b.kickoff).then(a.id.cmp(&b.id)));
    ms
}

/// Winner by aggregate score. A level knockout match blocks advancement;
/// the engine never invents a winner.
pub fn winner_of(m: &Match) -> Result<Uuid, EngineError> {
    if m.team_a_goals > m.team_b_goals {
        Ok(m.team_a_id)
    } else if m.team_b_goals > m.team_a_goals {
        Ok(m.team_b_id)
    } else {
        Err(EngineError::UndeterminedWinner(m.id))
    }
}

/// Derive the advancement state from the tournament's full match list.
///
/// Walks the knockout chain for the bracket size until it finds a round
/// that is missing (eligible) or unplayed (active). Surfacing a tied
/// completed knockout round is an error, not a state: eligibility past it
/// cannot be decided.
pub fn bracket_state(
    tournament: &Tournament,
    teams: &[Team],
    matches: &[Match],
) -> Result<BracketState, EngineError> {
    let first = match Phase::first_knockout_for(teams.len()) {
        Some(p) if tournament.kind == TournamentKind::Championship => p,
        _ => return Ok(BracketState::GroupInProgress),
    };

    let group = phase_matches(matches, Phase::Group);
    if group.is_empty() || group.iter().any(|m| !m.played) {
        return Ok(BracketState::GroupInProgress);
    }

    let mut phase = first;
    loop {
        let round = phase_matches(matches, phase);
        if round.is_empty() {
            return Ok(BracketState::eligible_for(phase));
        }
        if round.iter().any(|m| !m.played) {
            return Ok(BracketState::active_for(phase));
        }
        // Round complete: its winners must be determined before anything
        // downstream of it may be derived.
        for m in &round {
            winner_of(m)?;
        }
        match phase.next() {
            Some(next) => phase = next,
            None => return Ok(BracketState::Complete),
        }
    }
}

/// The next activatable phase with its pairings, or None.
///
/// The first knockout round seeds rank k against rank N+1-k from the
/// standings. Later rounds pair winners by classic bracket adjacency
/// (slot j meets slot P-1-j), never re-seeding by rank.
pub fn eligible_phase(
    tournament: &Tournament,
    teams: &[Team],
    matches: &[Match],
) -> Result<Option<PhaseEligibility>, EngineError> {
    let state = bracket_state(tournament, teams, matches)?;
    let phase = match state.eligible_phase() {
        Some(p) => p,
        None => return Ok(None),
    };

    let pairings = if Some(phase) == Phase::first_knockout_for(teams.len()) {
        let table = compute_standings(teams, matches);
        let n = table.len();
        (0..n / 2)
            .map(|k| Pairing {
                team_a_id: table[k].team_id,
                team_b_id: table[n - 1 - k].team_id,
            })
            .collect()
    } else {
        let prev = phase
            .preceding()
            .expect("knockout phase always has a preceding phase");
        let round = phase_matches(matches, prev);
        let winners: Vec<Uuid> = round
            .iter()
            .map(|m| winner_of(m))
            .collect::<Result<_, _>>()?;
        let p = winners.len();
        (0..p / 2)
            .map(|j| Pairing {
                team_a_id: winners[j],
                team_b_id: winners[p - 1 - j],
            })
            .collect()
    };

    Ok(Some(PhaseEligibility { phase, pairings }))
}

/// Gate a manual activation request against the derived eligibility.
///
/// The submitted pairings must match the computed ones pair-for-pair
/// (order-insensitive, sides fixed by seeding) so an administrator cannot
/// confirm a bracket that standings no longer support.
pub fn validate_activation(
    tournament: &Tournament,
    teams: &[Team],
    matches: &[Match],
    phase: Phase,
    pairings: &[Pairing],
) -> Result<PhaseEligibility, EngineError> {
    if !phase.is_knockout() {
        return Err(EngineError::PhaseNotEligible {
            phase,
            reason: "only knockout phases can be activated".to_string(),
        });
    }
    if !phase_matches(matches, phase).is_empty() {
        return Err(EngineError::PhaseAlreadyActive(phase));
    }

    let eligibility = match eligible_phase(tournament, teams, matches)? {
        Some(e) if e.phase == phase => e,
        Some(e) => {
            return Err(EngineError::PhaseNotEligible {
                phase,
                reason: format!("the eligible phase is {}", e.phase),
            })
        }
        None => {
            return Err(EngineError::PhaseNotEligible {
                phase,
                reason: "preceding phase is incomplete".to_string(),
            })
        }
    };

    let matches_computed = pairings.len() == eligibility.pairings.len()
        && eligibility.pairings.iter().all(|p| pairings.contains(p));
    if !matches_computed {
        return Err(EngineError::PhaseNotEligible {
            phase,
            reason: "submitted pairings do not match the computed seeding".to_string(),
        });
    }

    Ok(eligibility)
}

/// Materialize the fixtures of a validated activation. Fields are assigned
/// round-robin over the pairing count; kickoffs are staggered so slot order
/// stays recoverable.
pub fn build_phase_matches(
    tournament_id: Uuid,
    eligibility: &PhaseEligibility,
    now: DateTime<Utc>,
) -> Vec<Match> {
    let field_count = eligibility.pairings.len().max(1) as i32;
    eligibility
        .pairings
        .iter()
        .enumerate()
        .map(|(i, p)| Match {
            id: Uuid::new_v4(),
            tournament_id,
            team_a_id: p.team_a_id,
            team_b_id: p.team_b_id,
            kickoff: now
                + Duration::hours(KICKOFF_LEAD_HOURS + i as i64 * KICKOFF_STAGGER_HOURS),
            field: (i as i32 % field_count) + 1,
            referee: None,
            phase: eligibility.phase,
            team_a_goals: 0,
            team_b_goals: 0,
            played: false,
            created_at: now,
        })
        .collect()
}
