//! Confirmation rounds against a real SQLite database.

use std::sync::Arc;
use std::thread;

use round_robin_league::config::DatabaseSettings;
use round_robin_league::database::{self, DbPool};
use round_robin_league::league::{IntakeError, MatchReport, PlayerId, RegistrationError, RoundOutcome, ValidationError};
use round_robin_league::services::league::LeagueService;

fn memory_league() -> (LeagueService, DbPool) {
    let pool = database::create_memory_pool().unwrap();
    let league = LeagueService::open(pool.clone()).unwrap();
    (league, pool)
}

fn register(league: &LeagueService, names: &[&str]) -> Vec<PlayerId> {
    names
        .iter()
        .map(|name| league.register_player(name).unwrap().id)
        .collect()
}

fn report(league: &LeagueService, p1: PlayerId, s1: i32, p2: PlayerId, s2: i32) -> RoundOutcome {
    let report = MatchReport::new(p1, p2, s1, s2).unwrap();
    league.report_match(&report).unwrap().round
}

fn score(league: &LeagueService, id: PlayerId) -> i64 {
    league
        .standings()
        .unwrap()
        .players
        .into_iter()
        .find(|p| p.id == id)
        .unwrap()
        .score
}

#[test]
fn test_two_player_round_confirms_on_first_report() {
    let (league, _pool) = memory_league();
    let ids = register(&league, &["Anna", "Bartek"]);

    let round = report(&league, ids[0], 10, ids[1], 5);

    assert!(round.is_confirmed());
    assert_eq!(score(&league, ids[0]), 20);
    assert_eq!(score(&league, ids[1]), 5);

    let standings = league.standings().unwrap();
    assert_eq!(standings.confirmed_matches.len(), 1);
    assert!(standings.pending_matches.is_empty());
    assert_eq!(standings.confirmed_matches[0].player_one_name, "Anna");
    assert_eq!(standings.confirmed_matches[0].player_two_name, "Bartek");
}

#[test]
fn test_three_player_round_waits_then_confirms_together() {
    let (league, _pool) = memory_league();
    let ids = register(&league, &["Anna", "Bartek", "Celina"]);
    let (a, b, c) = (ids[0], ids[1], ids[2]);

    assert!(!report(&league, a, 7, b, 3).is_confirmed());
    assert!(!report(&league, a, 6, c, 2).is_confirmed());

    let standings = league.standings().unwrap();
    assert!(standings.players.iter().all(|p| p.score == 0));
    assert_eq!(standings.pending_matches.len(), 2);

    let round = report(&league, b, 4, c, 9);

    let RoundOutcome::Confirmed(summary) = round else {
        panic!("expected a confirmed round");
    };
    assert_eq!(summary.confirmed_matches.len(), 3);
    assert_eq!(score(&league, a), 26);
    assert_eq!(score(&league, b), 7);
    assert_eq!(score(&league, c), 20);
}

#[test]
fn test_duplicate_report_waits_for_next_round() {
    let (league, _pool) = memory_league();
    let ids = register(&league, &["Anna", "Bartek", "Celina"]);
    let (a, b, c) = (ids[0], ids[1], ids[2]);

    report(&league, a, 5, b, 3);
    report(&league, a, 8, b, 2);
    report(&league, a, 3, c, 1);
    assert!(report(&league, b, 2, c, 1).is_confirmed());

    let standings = league.standings().unwrap();
    assert_eq!(standings.confirmed_matches.len(), 3);
    assert_eq!(standings.pending_matches.len(), 1);
    let queued = &standings.pending_matches[0];
    assert_eq!((queued.player_one_score, queued.player_two_score), (8, 2));
    // 5-3 win and 3-1 win
    assert_eq!(score(&league, a), 16);
}

#[test]
fn test_manual_pass_without_new_data_is_a_noop() {
    let (league, _pool) = memory_league();
    let ids = register(&league, &["Anna", "Bartek"]);
    report(&league, ids[0], 10, ids[1], 5);
    let before = league.standings().unwrap();

    let round = league.confirm_pending().unwrap();

    assert_eq!(round, RoundOutcome::Incomplete { missing_pairs: vec![(ids[0], ids[1])] });
    let after = league.standings().unwrap();
    assert_eq!(before.players, after.players);
    assert_eq!(after.confirmed_matches.len(), 1);
}

#[test]
fn test_registration_closes_once_a_match_exists() {
    let (league, _pool) = memory_league();
    let ids = register(&league, &["Anna", "Bartek", "Celina"]);
    report(&league, ids[0], 1, ids[1], 0);

    let err = league.register_player("Dawid").unwrap_err();

    assert!(matches!(err, RegistrationError::LeagueStarted));
    assert_eq!(league.standings().unwrap().players.len(), 3);
}

#[test]
fn test_unknown_player_is_rejected_without_writing() {
    let (league, _pool) = memory_league();
    let ids = register(&league, &["Anna", "Bartek"]);

    let err = league
        .report_match(&MatchReport::new(ids[0], 77, 3, 1).unwrap())
        .unwrap_err();

    assert!(matches!(err, IntakeError::Validation(ValidationError::UnknownPlayer(77))));
    let standings = league.standings().unwrap();
    assert!(standings.pending_matches.is_empty());
    assert!(standings.confirmed_matches.is_empty());
}

#[test]
fn test_failed_write_rolls_back_scores_and_report() {
    let (league, pool) = memory_league();
    let ids = register(&league, &["Anna", "Bartek"]);
    {
        let conn = database::get_connection(&pool).unwrap();
        conn.execute_batch(&format!(
            "CREATE TRIGGER fail_score BEFORE UPDATE OF score ON players WHEN NEW.id = {}
             BEGIN SELECT RAISE(ABORT, 'disk full'); END;",
            ids[1]
        ))
        .unwrap();
    }

    let err = league
        .report_match(&MatchReport::new(ids[0], ids[1], 10, 5).unwrap())
        .unwrap_err();

    assert!(matches!(err, IntakeError::Round(_)));
    let standings = league.standings().unwrap();
    assert!(standings.players.iter().all(|p| p.score == 0));
    assert!(standings.confirmed_matches.is_empty());
    assert!(standings.pending_matches.is_empty());

    {
        let conn = database::get_connection(&pool).unwrap();
        conn.execute_batch("DROP TRIGGER fail_score").unwrap();
    }
    assert!(report(&league, ids[0], 10, ids[1], 5).is_confirmed());
    assert_eq!(score(&league, ids[0]), 20);
}

#[test]
fn test_standings_order_by_score_and_newest_match_first() {
    let (league, _pool) = memory_league();
    let ids = register(&league, &["Anna", "Bartek"]);
    report(&league, ids[1], 6, ids[0], 1);
    report(&league, ids[0], 9, ids[1], 2);
    report(&league, ids[0], 4, ids[1], 3);

    let standings = league.standings().unwrap();

    // Bartek: 12 + 2 + 3, Anna: 1 + 18 + 8
    assert_eq!(standings.players[0].id, ids[0]);
    assert_eq!(standings.players[0].score, 27);
    assert_eq!(standings.players[1].score, 17);
    let scores: Vec<_> = standings
        .confirmed_matches
        .iter()
        .map(|m| m.player_one_score)
        .collect();
    assert_eq!(scores, vec![4, 9, 6]);
}

#[test]
fn test_concurrent_reports_confirm_exactly_one_round() {
    let dir = tempfile::tempdir().unwrap();
    let settings = DatabaseSettings {
        path: dir.path().join("league.db").to_string_lossy().into_owned(),
        busy_timeout_ms: 10_000,
        pool_size: 8,
    };
    let league = Arc::new(LeagueService::open(database::create_pool(&settings).unwrap()).unwrap());
    let ids = register(&league, &["A", "B", "C", "D"]);

    let mut pairs = Vec::new();
    for (i, first) in ids.iter().enumerate() {
        for second in &ids[i + 1..] {
            pairs.push((*first, *second));
        }
    }

    let handles: Vec<_> = pairs
        .into_iter()
        .map(|(p1, p2)| {
            let league = Arc::clone(&league);
            thread::spawn(move || report(&league, p1, 3, p2, 1))
        })
        .collect();
    let confirmed = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(RoundOutcome::is_confirmed)
        .count();

    assert_eq!(confirmed, 1);
    let standings = league.standings().unwrap();
    assert_eq!(standings.confirmed_matches.len(), 6);
    assert!(standings.pending_matches.is_empty());
    // A wins three times, D loses three times
    assert_eq!(score(&league, ids[0]), 18);
    assert_eq!(score(&league, ids[3]), 3);
}
