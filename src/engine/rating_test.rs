#[cfg(test)]
mod tests {
    use crate::engine::rating::*;
    use crate::models::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn player(team_id: Uuid) -> Player {
        Player {
            id: Uuid::new_v4(),
            team_id,
            name: "Nine".to_string(),
            jersey_number: 9,
            position: "ST".to_string(),
            is_goalkeeper: false,
            created_at: Utc::now(),
        }
    }

    fn team_match(team_id: Uuid, own: i32, opp: i32, phase: Phase, played: bool) -> Match {
        Match {
            id: Uuid::new_v4(),
            tournament_id: Uuid::new_v4(),
            team_a_id: team_id,
            team_b_id: Uuid::new_v4(),
            kickoff: Utc::now(),
            field: 1,
            referee: None,
            phase,
            team_a_goals: own,
            team_b_goals: opp,
            played,
            created_at: Utc::now(),
        }
    }

    fn goal(player: &Player, match_id: Uuid, ordinal: i32) -> GoalEvent {
        GoalEvent {
            id: Uuid::new_v4(),
            match_id,
            player_id: player.id,
            team_id: player.team_id,
            ordinal,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn blank_history_sits_exactly_on_the_floor() {
        let p = player(Uuid::new_v4());

        let card = compute_card(&p, &[], &[]);

        assert_eq!(card.rating, 65);
        assert_eq!(card.pace, 67);
        assert_eq!(card.shooting, 65); // 60 raw, clamped up
        assert_eq!(card.passing, 65);
        assert_eq!(card.dribbling, 65); // 64 raw, clamped up
        assert_eq!(card.defense, 65);
        assert_eq!(card.physical, 70);
    }

    #[test]
    fn group_win_adds_participation_and_performance() {
        let team_id = Uuid::new_v4();
        let p = player(team_id);
        // 3-1 group win: performance 4 + 2*2 = 8, participation 1.
        let matches = vec![team_match(team_id, 3, 1, Phase::Group, true)];

        let card = compute_card(&p, &matches, &[]);
        assert_eq!(card.rating, 65 + 1 + 8);
        assert_eq!(card.passing, 67);
    }

    #[test]
    fn draws_and_losses_shape_the_performance_bonus() {
        let team_id = Uuid::new_v4();
        let p = player(team_id);

        let draw = vec![team_match(team_id, 2, 2, Phase::Group, true)];
        assert_eq!(compute_card(&p, &draw, &[]).rating, 65 + 1 + 1);

        // 1-3 loss: performance -2 + (-2) = -4; clamped back to the floor.
        let loss = vec![team_match(team_id, 1, 3, Phase::Group, true)];
        assert_eq!(compute_card(&p, &loss, &[]).rating, 65);
    }

    #[test]
    fn unplayed_matches_contribute_nothing() {
        let team_id = Uuid::new_v4();
        let p = player(team_id);
        let matches = vec![team_match(team_id, 3, 0, Phase::Group, false)];

        assert_eq!(compute_card(&p, &matches, &[]).rating, 65);
    }

    #[test]
    fn goal_weight_scales_with_the_phase() {
        let team_id = Uuid::new_v4();
        let p = player(team_id);
        let group = team_match(team_id, 1, 1, Phase::Group, true);
        let semi = team_match(team_id, 1, 1, Phase::Semifinal, true);
        let final_m = team_match(team_id, 1, 1, Phase::Final, true);
        let matches = vec![group.clone(), semi.clone(), final_m.clone()];

        let goals = vec![
            goal(&p, group.id, 1),
            goal(&p, semi.id, 1),
            goal(&p, final_m.id, 1),
        ];

        // 3 draws: participation 3, performance 3. Goals: 5 + 6 + 8.
        let card = compute_card(&p, &matches, &goals);
        assert_eq!(card.rating, 65 + 19 + 3 + 3);
        assert_eq!(card.shooting, 60 + 2 * 3);
    }

    #[test]
    fn goal_with_unresolvable_match_falls_back_to_flat_value() {
        let team_id = Uuid::new_v4();
        let p = player(team_id);
        let goals = vec![goal(&p, Uuid::new_v4(), 1)];

        let card = compute_card(&p, &[], &goals);
        assert_eq!(card.rating, 65 + 5);
    }

    #[test]
    fn one_extra_final_goal_strictly_raises_an_uncapped_rating() {
        let team_id = Uuid::new_v4();
        let p = player(team_id);
        let final_m = team_match(team_id, 2, 1, Phase::Final, true);
        let matches = vec![final_m.clone()];

        let without = compute_card(&p, &matches, &[goal(&p, final_m.id, 1)]);
        let with = compute_card(
            &p,
            &matches,
            &[goal(&p, final_m.id, 1), goal(&p, final_m.id, 2)],
        );

        assert!(without.rating < RATING_CAP);
        assert!(with.rating > without.rating);
    }

    #[test]
    fn rating_never_leaves_its_bounds() {
        let team_id = Uuid::new_v4();
        let p = player(team_id);
        let final_m = team_match(team_id, 9, 0, Phase::Final, true);
        let matches = vec![final_m.clone()];
        let goals: Vec<GoalEvent> = (0..40).map(|i| goal(&p, final_m.id, i + 1)).collect();

        let card = compute_card(&p, &matches, &goals);
        assert_eq!(card.rating, RATING_CAP);
        assert_eq!(card.pace, RATING_CAP);

        let losses: Vec<Match> = (0..30)
            .map(|_| team_match(team_id, 0, 9, Phase::Group, true))
            .collect();
        assert_eq!(compute_card(&p, &losses, &[]).rating, RATING_FLOOR);
    }
}
