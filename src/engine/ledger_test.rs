#[cfg(test)]
mod tests {
    use crate::engine::ledger::*;
    use crate::engine::EngineError;
    use crate::models::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn fixture() -> (Match, Team, Team, Player, Player) {
        let tournament_id = Uuid::new_v4();
        let home = Team {
            id: Uuid::new_v4(),
            tournament_id,
            name: "Rovers".to_string(),
            logo: None,
            group_no: 1,
            created_at: Utc::now(),
        };
        let away = Team {
            id: Uuid::new_v4(),
            tournament_id,
            name: "Wanderers".to_string(),
            logo: None,
            group_no: 1,
            created_at: Utc::now(),
        };
        let striker = Player {
            id: Uuid::new_v4(),
            team_id: home.id,
            name: "Nine".to_string(),
            jersey_number: 9,
            position: "ST".to_string(),
            is_goalkeeper: false,
            created_at: Utc::now(),
        };
        let keeper = Player {
            id: Uuid::new_v4(),
            team_id: away.id,
            name: "One".to_string(),
            jersey_number: 1,
            position: "GK".to_string(),
            is_goalkeeper: true,
            created_at: Utc::now(),
        };
        let m = Match {
            id: Uuid::new_v4(),
            tournament_id,
            team_a_id: home.id,
            team_b_id: away.id,
            kickoff: Utc::now(),
            field: 1,
            referee: None,
            phase: Phase::Group,
            team_a_goals: 0,
            team_b_goals: 0,
            played: false,
            created_at: Utc::now(),
        };
        (m, home, away, striker, keeper)
    }

    #[test]
    fn record_goal_increments_counter_and_marks_played() {
        let (m, home, _, striker, _) = fixture();

        let (updated, event) = record_goal(&m, &striker, &home, Side::TeamA, 1).unwrap();

        assert_eq!(updated.team_a_goals, 1);
        assert_eq!(updated.team_b_goals, 0);
        assert!(updated.played);
        assert_eq!(event.match_id, m.id);
        assert_eq!(event.player_id, striker.id);
        assert_eq!(event.team_id, home.id);
        assert_eq!(event.ordinal, 1);
    }

    #[test]
    fn record_goal_rejects_team_on_wrong_side() {
        let (m, home, _, striker, _) = fixture();

        let err = record_goal(&m, &striker, &home, Side::TeamB, 1).unwrap_err();
        assert!(matches!(err, EngineError::InvalidReference(_)));
    }

    #[test]
    fn record_goal_rejects_player_of_other_team() {
        let (m, home, _, _, keeper) = fixture();

        let err = record_goal(&m, &keeper, &home, Side::TeamA, 1).unwrap_err();
        assert!(matches!(err, EngineError::InvalidReference(_)));
    }

    #[test]
    fn counters_track_live_event_count() {
        let (mut m, home, away, striker, keeper) = fixture();
        let mut events: Vec<GoalEvent> = Vec::new();

        for _ in 0..3 {
            let (updated, event) =
                record_goal(&m, &striker, &home, Side::TeamA, next_ordinal(&events)).unwrap();
            m = updated;
            events.push(event);
        }
        let (updated, event) =
            record_goal(&m, &keeper, &away, Side::TeamB, next_ordinal(&events)).unwrap();
        m = updated;
        events.push(event);

        let live_a = events.iter().filter(|e| e.team_id == home.id).count();
        let live_b = events.iter().filter(|e| e.team_id == away.id).count();
        assert_eq!(m.team_a_goals as usize, live_a);
        assert_eq!(m.team_b_goals as usize, live_b);
    }

    #[test]
    fn undo_round_trips_the_counter() {
        let (m, home, _, striker, _) = fixture();
        let (scored, event) = record_goal(&m, &striker, &home, Side::TeamA, 1).unwrap();

        let (undone, removed) =
            undo_last_goal(&scored, &[event.clone()], striker.id, home.id, Side::TeamA).unwrap();

        assert_eq!(removed, event.id);
        assert_eq!(undone.team_a_goals, m.team_a_goals);
        // A finalized match stays finalized.
        assert!(undone.played);
    }

    #[test]
    fn undo_removes_the_most_recent_matching_event() {
        let (mut m, home, _, striker, _) = fixture();
        let mut events: Vec<GoalEvent> = Vec::new();
        for _ in 0..2 {
            let (updated, event) =
                record_goal(&m, &striker, &home, Side::TeamA, next_ordinal(&events)).unwrap();
            m = updated;
            events.push(event);
        }

        let (_, removed) = undo_last_goal(&m, &events, striker.id, home.id, Side::TeamA).unwrap();
        assert_eq!(removed, events[1].id);
    }

    #[test]
    fn undo_without_matching_event_is_an_error() {
        let (m, home, _, striker, _) = fixture();

        let err = undo_last_goal(&m, &[], striker.id, home.id, Side::TeamA).unwrap_err();
        assert_eq!(err, EngineError::NoSuchEvent);
    }

    #[test]
    fn undo_floors_the_counter_at_zero() {
        let (mut m, home, _, striker, _) = fixture();
        // Counter already corrected down by an administrator while the
        // event is still in the log.
        let event = GoalEvent {
            id: Uuid::new_v4(),
            match_id: m.id,
            player_id: striker.id,
            team_id: home.id,
            ordinal: 1,
            created_at: Utc::now(),
        };
        m.team_a_goals = 0;

        let (undone, _) = undo_last_goal(&m, &[event], striker.id, home.id, Side::TeamA).unwrap();
        assert_eq!(undone.team_a_goals, 0);
    }

    #[test]
    fn score_correction_rejects_negative_counts() {
        let (m, _, _, _, _) = fixture();

        let err = apply_score_correction(&m, -1, 0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidScore(_)));
    }

    #[test]
    fn score_correction_rejects_counts_beyond_storage_range() {
        let (m, _, _, _, _) = fixture();

        let err = apply_score_correction(&m, i64::from(i32::MAX) + 1, 0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidScore(_)));

        let err = apply_score_correction(&m, 0, i64::from(i32::MAX) + 1).unwrap_err();
        assert!(matches!(err, EngineError::InvalidScore(_)));
    }

    #[test]
    fn score_correction_finalizes_a_goalless_match() {
        let (m, _, _, _, _) = fixture();

        let finalized = apply_score_correction(&m, 0, 0).unwrap();
        assert!(finalized.played);
        assert_eq!(finalized.team_a_goals, 0);
        assert_eq!(finalized.team_b_goals, 0);
    }
}
