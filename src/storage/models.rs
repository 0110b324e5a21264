//! Data models for the storage layer

use crate::cli::types::{Format, PlayerId, RoundNumber};
use serde::{Deserialize, Serialize};

/// Player information stored in the database.
///
/// The restore never writes this table; it exists so the `standings`
/// view has names to rank and so operators can reseed names by hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub confirmed: bool,
}

/// One scheduled round of the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub id: i64,
    pub round_number: RoundNumber,
    pub format: Format,
}

/// A contest between two players within a round, as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    pub round_id: i64,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub score1: i64,
    pub score2: i64,
    pub completed: bool,
}

impl Match {
    /// Derive the per-player stat rows for this match.
    ///
    /// Pure function of the stored scores: each player played every game
    /// of the match (`score1 + score2`) and won the games their own
    /// score counts. Always exactly two rows, player 1 first.
    pub fn stat_rows(&self) -> [PlayerMatchStat; 2] {
        let games_played = self.score1 + self.score2;
        [
            PlayerMatchStat {
                player_id: self.player1_id,
                match_id: self.id,
                games_played,
                games_won: self.score1,
            },
            PlayerMatchStat {
                player_id: self.player2_id,
                match_id: self.id,
                games_played,
                games_won: self.score2,
            },
        ]
    }
}

/// Per-player summary of one match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMatchStat {
    pub player_id: PlayerId,
    pub match_id: i64,
    pub games_played: i64,
    pub games_won: i64,
}

/// One row of the read-only `standings` view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standing {
    pub id: PlayerId,
    pub name: String,
    pub matches_played: i64,
    pub wins: i64,
    pub ties: i64,
    pub losses: i64,
    pub points: i64,
    pub total_points_scored: i64,
}

/// Row counts reported after a restore
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RestoreSummary {
    pub rounds_inserted: usize,
    pub matches_inserted: usize,
    pub stats_inserted: usize,
}
