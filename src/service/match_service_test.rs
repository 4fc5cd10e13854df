#[cfg(test)]
mod tests {
    use crate::api_error::ApiError;
    use crate::engine::EngineError;
    use crate::models::*;
    use crate::service::MatchService;
    use crate::store::{MemStore, Store};
    use chrono::Utc;
    use std::sync::Arc;
    use uuid::Uuid;

    struct Fixture {
        store: Arc<MemStore>,
        service: MatchService<MemStore>,
        m: Match,
        home: Team,
        away: Team,
        striker: Player,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(MemStore::new());
        let tournament = Tournament {
            id: Uuid::new_v4(),
            name: "Copa".to_string(),
            kind: TournamentKind::Championship,
            created_at: Utc::now(),
        };
        store.insert_tournament(&tournament).await.unwrap();

        let home = Team {
            id: Uuid::new_v4(),
            tournament_id: tournament.id,
            name: "Rovers".to_string(),
            logo: None,
            group_no: 1,
            created_at: Utc::now(),
        };
        let away = Team {
            id: Uuid::new_v4(),
            tournament_id: tournament.id,
            name: "Wanderers".to_string(),
            logo: None,
            group_no: 1,
            created_at: Utc::now(),
        };
        store.insert_team(&home).await.unwrap();
        store.insert_team(&away).await.unwrap();

        let striker = Player {
            id: Uuid::new_v4(),
            team_id: home.id,
            name: "Nine".to_string(),
            jersey_number: 9,
            position: "ST".to_string(),
            is_goalkeeper: false,
            created_at: Utc::now(),
        };
        store.insert_player(&striker).await.unwrap();

        let m = Match {
            id: Uuid::new_v4(),
            tournament_id: tournament.id,
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
        store.insert_matches(std::slice::from_ref(&m)).await.unwrap();

        let service = MatchService::new(store.clone());
        Fixture {
            store,
            service,
            m,
            home,
            away,
            striker,
        }
    }

    fn goal_request(f: &Fixture) -> ReportGoalRequest {
        ReportGoalRequest {
            player_id: f.striker.id,
            team_id: f.home.id,
            side: Side::TeamA,
        }
    }

    #[tokio::test]
    async fn report_goal_updates_score_and_ledger() {
        let f = fixture().await;

        let score = f.service.report_goal(f.m.id, goal_request(&f)).await.unwrap();

        assert_eq!(score.team_a_goals, 1);
        assert_eq!(score.team_b_goals, 0);
        assert!(score.played);

        let events = f.store.events_by_match(f.m.id).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].player_id, f.striker.id);
    }

    #[tokio::test]
    async fn concurrent_goals_on_one_match_all_land() {
        let f = fixture().await;
        let req = goal_request(&f);
        let match_id = f.m.id;
        let store = f.store.clone();
        let service = Arc::new(f.service);

        let mut handles = Vec::new();
        for _ in 0..16 {
            let service = service.clone();
            let req = req.clone();
            handles.push(tokio::spawn(async move {
                service.report_goal(match_id, req).await.unwrap();
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        let m = store.match_by_id(match_id).await.unwrap().unwrap();
        assert_eq!(m.team_a_goals, 16);
        assert_eq!(store.events_by_match(match_id).await.unwrap().len(), 16);
    }

    #[tokio::test]
    async fn undo_restores_score_but_not_the_played_flag() {
        let f = fixture().await;
        f.service.report_goal(f.m.id, goal_request(&f)).await.unwrap();

        let score = f.service.undo_goal(f.m.id, goal_request(&f)).await.unwrap();

        assert_eq!(score.team_a_goals, 0);
        assert!(score.played);
        assert!(f.store.events_by_match(f.m.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn undo_with_empty_ledger_reports_no_such_event() {
        let f = fixture().await;

        let err = f.service.undo_goal(f.m.id, goal_request(&f)).await.unwrap_err();
        assert!(matches!(err, ApiError::Engine(EngineError::NoSuchEvent)));
    }

    #[tokio::test]
    async fn goal_against_the_wrong_side_is_rejected() {
        let f = fixture().await;
        let req = ReportGoalRequest {
            player_id: f.striker.id,
            team_id: f.away.id,
            side: Side::TeamA,
        };

        let err = f.service.report_goal(f.m.id, req).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Engine(EngineError::InvalidReference(_))
        ));
    }

    #[tokio::test]
    async fn unknown_match_is_not_found() {
        let f = fixture().await;

        let err = f
            .service
            .report_goal(Uuid::new_v4(), goal_request(&f))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[tokio::test]
    async fn finalize_marks_a_goalless_match_played() {
        let f = fixture().await;

        let score = f
            .service
            .finalize(
                f.m.id,
                FinalizeMatchRequest {
                    team_a_goals: 0,
                    team_b_goals: 0,
                },
            )
            .await
            .unwrap();

        assert!(score.played);
        assert_eq!((score.team_a_goals, score.team_b_goals), (0, 0));
    }

    #[tokio::test]
    async fn finalize_is_refused_until_the_match_is_unlocked() {
        let f = fixture().await;
        f.service.report_goal(f.m.id, goal_request(&f)).await.unwrap();

        let req = FinalizeMatchRequest {
            team_a_goals: 2,
            team_b_goals: 2,
        };
        let err = f.service.finalize(f.m.id, req.clone()).await.unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));

        let unlocked = f.service.unlock(f.m.id).await.unwrap();
        assert!(!unlocked.played);

        let score = f.service.finalize(f.m.id, req).await.unwrap();
        assert!(score.played);
        assert_eq!((score.team_a_goals, score.team_b_goals), (2, 2));
    }

    #[tokio::test]
    async fn finalize_rejects_negative_scores() {
        let f = fixture().await;

        let err = f
            .service
            .finalize(
                f.m.id,
                FinalizeMatchRequest {
                    team_a_goals: -1,
                    team_b_goals: 0,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Engine(EngineError::InvalidScore(_))));
    }
}
