//! Standings command implementation

use super::resolve_database_path;
use crate::storage::TournamentDb;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the standings command
pub fn handle_standings(
    database: Option<PathBuf>,
    as_json: bool,
    limit: Option<usize>,
) -> Result<()> {
    let path = resolve_database_path(database)?;
    let db = TournamentDb::open(&path)?;

    let standings = db.top_standings(limit)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
        return Ok(());
    }

    if standings.is_empty() {
        println!("No standings to show (players table is empty)");
        return Ok(());
    }

    println!("{:<4} {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}", "#", "Player", "MP", "W", "T", "L", "Pts", "GF");
    for (rank, standing) in standings.iter().enumerate() {
        println!(
            "{:<4} {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}",
            rank + 1,
            standing.name,
            standing.matches_played,
            standing.wins,
            standing.ties,
            standing.losses,
            standing.points,
            standing.total_points_scored
        );
    }

    Ok(())
}
