//! Restore command implementation

use super::resolve_database_path;
use crate::fixture::MATCH_RESULTS;
use crate::storage::TournamentDb;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the restore command
pub fn handle_restore(database: Option<PathBuf>, no_verify: bool) -> Result<()> {
    let path = resolve_database_path(database)?;
    println!("Restoring tournament data in {}", path.display());

    let mut db = TournamentDb::open(&path)?;

    println!("Clearing stats, matches, and rounds, then re-inserting...");
    let summary = db.restore(&MATCH_RESULTS)?;

    println!("✓ {} rounds inserted", summary.rounds_inserted);
    println!("✓ {} matches inserted", summary.matches_inserted);
    println!("✓ {} player match stats inserted", summary.stats_inserted);

    if no_verify {
        return Ok(());
    }

    let round_count = db.count_rounds()?;
    let match_count = db.count_matches()?;
    println!(
        "✓ Verified: {} rounds, {} matches in database",
        round_count, match_count
    );

    let top3 = db.top_standings(Some(3))?;
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
