//! Integration tests for restore failure semantics and the command handlers

use tourney_restore::{
    commands::{restore::handle_restore, standings::handle_standings, verify::handle_verify},
    fixture::{MatchResult, MATCH_RESULTS},
    storage::TournamentDb,
    PlayerId, RestoreError, RoundNumber,
};

fn result(round: u8, p1: i64, p2: i64, s1: i64, s2: i64) -> MatchResult {
    MatchResult {
        round_number: RoundNumber::new(round),
        player1: PlayerId::new(p1),
        player2: PlayerId::new(p2),
        score1: s1,
        score2: s2,
    }
}

#[test]
fn test_unknown_round_fails_with_missing_round() {
    let mut db = TournamentDb::open_in_memory().unwrap();

    let err = db.restore(&[result(9, 145, 146, 2, 0)]).unwrap_err();
    match err.downcast_ref::<RestoreError>() {
        Some(RestoreError::MissingRound {
            round_number,
            expected,
        }) => {
            assert_eq!(*round_number, 9);
            assert_eq!(*expected, 8);
        }
        other => panic!("expected MissingRound, got {:?}", other),
    }
}

#[test]
fn test_failed_restore_leaves_no_partial_rows() {
    let mut db = TournamentDb::open_in_memory().unwrap();

    // Rounds and the first two matches would have been written before
    // the bad entry is hit; the transaction must discard all of it.
    let partial = [
        result(1, 145, 146, 2, 0),
        result(2, 147, 148, 1, 1),
        result(99, 149, 150, 2, 1),
    ];
    assert!(db.restore(&partial).is_err());

    assert_eq!(db.count_rounds().unwrap(), 0);
    assert_eq!(db.count_matches().unwrap(), 0);
    assert_eq!(db.count_stats().unwrap(), 0);
}

#[test]
fn test_failed_restore_keeps_previous_dataset() {
    let mut db = TournamentDb::open_in_memory().unwrap();
    db.restore(&MATCH_RESULTS).unwrap();

    assert!(db.restore(&[result(42, 145, 146, 2, 0)]).is_err());

    assert_eq!(db.count_rounds().unwrap(), 8);
    assert_eq!(db.count_matches().unwrap(), 40);
    assert_eq!(db.count_stats().unwrap(), 80);
}

#[test]
fn test_handle_restore_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tournament.db");

    handle_restore(Some(path.clone()), false).unwrap();

    let db = TournamentDb::open(&path).unwrap();
    assert_eq!(db.count_rounds().unwrap(), 8);
    assert_eq!(db.count_matches().unwrap(), 40);
    assert_eq!(db.count_stats().unwrap(), 80);
}

#[test]
fn test_handle_restore_twice_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tournament.db");

    handle_restore(Some(path.clone()), true).unwrap();
    handle_restore(Some(path.clone()), false).unwrap();

    let db = TournamentDb::open(&path).unwrap();
    assert_eq!(db.count_matches().unwrap(), 40);
    assert_eq!(db.count_stats().unwrap(), 80);
}

#[test]
fn test_handle_verify_and_standings_after_restore() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tournament.db");

    handle_restore(Some(path.clone()), true).unwrap();

    handle_verify(Some(path.clone()), false).unwrap();
    handle_verify(Some(path.clone()), true).unwrap();
    handle_standings(Some(path.clone()), false, Some(3)).unwrap();
    handle_standings(Some(path), true, None).unwrap();
}
