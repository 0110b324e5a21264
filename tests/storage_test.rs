//! Integration tests for the storage layer over the public API

use tourney_restore::{
    fixture::{round_format, MATCH_RESULTS, ROUND_COUNT},
    storage::{Player, TournamentDb},
    Format, PlayerId, RoundNumber,
};

fn create_restored_db() -> TournamentDb {
    let mut db = TournamentDb::open_in_memory().unwrap();
    db.restore(&MATCH_RESULTS).unwrap();
    db
}

#[test]
fn test_restore_populates_expected_counts() {
    let db = create_restored_db();

    assert_eq!(db.count_rounds().unwrap(), 8);
    assert_eq!(db.count_matches().unwrap(), 40);
    assert_eq!(db.count_stats().unwrap(), 80);
}

#[test]
fn test_round_one_is_pb() {
    let db = create_restored_db();

    let rounds = db.rounds().unwrap();
    assert_eq!(rounds[0].round_number, RoundNumber::new(1));
    assert_eq!(rounds[0].format, Format::PB);
}

#[test]
fn test_stored_formats_match_schedule_rule() {
    let db = create_restored_db();

    for round in db.rounds().unwrap() {
        assert_eq!(round.format, round_format(round.round_number));
    }
}

#[test]
fn test_every_round_has_five_matches() {
    let db = create_restored_db();

    let map = db.round_id_map().unwrap();
    for n in 1..=ROUND_COUNT {
        let matches = db.matches_for_round(map[&RoundNumber::new(n)]).unwrap();
        assert_eq!(matches.len(), 5, "round {}", n);
    }
}

#[test]
fn test_stats_derived_from_scores() {
    let db = create_restored_db();

    for m in db.completed_matches().unwrap() {
        let stats = db.stats_for_match(m.id).unwrap();
        assert_eq!(stats.len(), 2);

        let games = m.score1 + m.score2;
        assert!(stats.iter().all(|s| s.games_played == games));

        let won: Vec<i64> = stats.iter().map(|s| s.games_won).collect();
        // Rows come back ordered by player id
        if m.player1_id < m.player2_id {
            assert_eq!(won, vec![m.score1, m.score2]);
        } else {
            assert_eq!(won, vec![m.score2, m.score1]);
        }
    }
}

#[test]
fn test_restore_is_idempotent() {
    let mut db = TournamentDb::open_in_memory().unwrap();
    db.restore(&MATCH_RESULTS).unwrap();
    db.restore(&MATCH_RESULTS).unwrap();

    assert_eq!(db.count_rounds().unwrap(), 8);
    assert_eq!(db.count_matches().unwrap(), 40);
    assert_eq!(db.count_stats().unwrap(), 80);
}

#[test]
fn test_restore_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("tournament.db");

    {
        let mut db = TournamentDb::open(&path).unwrap();
        db.restore(&MATCH_RESULTS).unwrap();
    }

    let db = TournamentDb::open(&path).unwrap();
    assert_eq!(db.count_rounds().unwrap(), 8);
    assert_eq!(db.count_matches().unwrap(), 40);
    assert_eq!(db.count_stats().unwrap(), 80);
}

#[test]
fn test_top_standings_limit() {
    let mut db = create_restored_db();
    for id in 145..=154 {
        db.upsert_player(&Player {
            id: PlayerId::new(id),
            name: format!("Player {}", id),
            confirmed: true,
        })
        .unwrap();
    }

    assert_eq!(db.top_standings(Some(3)).unwrap().len(), 3);
    assert_eq!(db.top_standings(None).unwrap().len(), 10);

    let top = db.top_standings(Some(1)).unwrap();
    assert_eq!(top[0].id, PlayerId::new(147));
    assert_eq!(top[0].points, 21);
}
