//! Verify command implementation

use super::resolve_database_path;
use crate::storage::{Match, TournamentDb};
use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

/// Handle the verify command.
///
/// Read-only: counts the restored tables, checks that every completed
/// match carries exactly two consistent stat rows, and prints the top-3
/// standings. Problems are reported, not fatal.
pub fn handle_verify(database: Option<PathBuf>, as_json: bool) -> Result<()> {
    let path = resolve_database_path(database)?;
    let db = TournamentDb::open(&path)?;

    let round_count = db.count_rounds()?;
    let match_count = db.count_matches()?;
    let stat_count = db.count_stats()?;

    let mut mismatches = Vec::new();
    for m in db.completed_matches()? {
        if let Some(problem) = check_match_stats(&db, &m)? {
            mismatches.push(problem);
        }
    }

    let top3 = db.top_standings(Some(3))?;

    if as_json {
        let report = json!({
            "database": path.display().to_string(),
            "rounds": round_count,
            "matches": match_count,
            "player_match_stats": stat_count,
            "stat_mismatches": mismatches,
            "top_standings": top3,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Database: {}", path.display());
    println!(
        "✓ {} rounds, {} matches, {} player match stats",
        round_count, match_count, stat_count
    );

    if mismatches.is_empty() {
        println!("✓ Every completed match has two consistent stat rows");
    } else {
        for problem in &mismatches {
            println!("⚠ {}", problem);
        }
    }

    if top3.is_empty() {
        println!("No standings to show (players table is empty)");
    } else {
        println!("Top 3 standings:");
        for standing in top3 {
            println!("  {}: {} pts", standing.name, standing.points);
        }
    }

    Ok(())
}

/// Check the stat rows stored for one match against its scores.
/// Returns a description of the first problem found, if any.
fn check_match_stats(db: &TournamentDb, m: &Match) -> Result<Option<String>> {
    let stats = db.stats_for_match(m.id)?;

    if stats.len() != 2 {
        return Ok(Some(format!(
            "match {} has {} stat rows, expected 2",
            m.id,
            stats.len()
        )));
    }

    for stat in &stats {
        let own_score = if stat.player_id == m.player1_id {
            m.score1
        } else if stat.player_id == m.player2_id {
            m.score2
        } else {
            return Ok(Some(format!(
                "match {} has a stat row for player {}, who did not play in it",
                m.id, stat.player_id
            )));
        };

        if stat.games_played != m.score1 + m.score2 || stat.games_won != own_score {
            return Ok(Some(format!(
                "match {} stat row for player {} is inconsistent with scores {}-{}",
                m.id, stat.player_id, m.score1, m.score2
            )));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::check_match_stats;
    use crate::fixture::MATCH_RESULTS;
    use crate::storage::TournamentDb;

    fn restored_db() -> TournamentDb {
        let mut db = TournamentDb::open_in_memory().unwrap();
        db.restore(&MATCH_RESULTS).unwrap();
        db
    }

    #[test]
    fn test_restored_matches_check_clean() {
        let db = restored_db();
        for m in db.completed_matches().unwrap() {
            assert_eq!(check_match_stats(&db, &m).unwrap(), None);
        }
    }

    #[test]
    fn test_detects_missing_stat_row() {
        let db = restored_db();
        let m = db.completed_matches().unwrap().remove(0);

        db.conn
            .execute(
                "DELETE FROM player_match_stats WHERE match_id = ? AND player_id = ?",
                rusqlite::params![m.id, m.player1_id.as_i64()],
            )
            .unwrap();

        let problem = check_match_stats(&db, &m).unwrap();
        assert!(problem.unwrap().contains("expected 2"));
    }

    #[test]
    fn test_detects_inconsistent_games_won() {
        let db = restored_db();
        let m = db.completed_matches().unwrap().remove(0);

        db.conn
            .execute(
                "UPDATE player_match_stats SET games_won = games_won + 1
                 WHERE match_id = ? AND player_id = ?",
                rusqlite::params![m.id, m.player1_id.as_i64()],
            )
            .unwrap();

        let problem = check_match_stats(&db, &m).unwrap();
        assert!(problem.unwrap().contains("inconsistent"));
    }
}
