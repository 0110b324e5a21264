//! Database query operations

use super::{models::*, schema::TournamentDb};
use crate::cli::types::{PlayerId, RoundNumber};
use crate::error::RestoreError;
use crate::fixture::{self, MatchResult};
use anyhow::Result;
use rusqlite::{params, Connection, Row};
use std::collections::HashMap;

impl TournamentDb {
    /// Restore the tournament dataset from `results`.
    ///
    /// Runs the full sequence in one transaction: clear
    /// `player_match_stats`, `matches`, and `rounds`, insert the round
    /// schedule, re-read the generated round ids, insert every result
    /// as a completed match, then derive and insert two stat rows per
    /// match. Any failure rolls the whole restore back.
    ///
    /// A result referencing a round number outside the schedule fails
    /// with [`RestoreError::MissingRound`].
    pub fn restore(&mut self, results: &[MatchResult]) -> Result<RestoreSummary> {
        let tx = self.conn.transaction()?;

        // Children before parents; a re-run must not accumulate stat rows
        tx.execute("DELETE FROM player_match_stats", [])?;
        tx.execute("DELETE FROM matches", [])?;
        tx.execute("DELETE FROM rounds", [])?;

        let mut rounds_inserted = 0;
        for number in 1..=fixture::ROUND_COUNT {
            let round_number = RoundNumber::new(number);
            tx.execute(
                "INSERT INTO rounds (round_number, format) VALUES (?, ?)",
                params![number, fixture::round_format(round_number).as_str()],
            )?;
            rounds_inserted += 1;
        }

        // Re-read the generated ids rather than trusting insert order
        let round_map = round_id_map_on(&tx)?;

        let mut matches_inserted = 0;
        for result in results {
            let round_id = round_map.get(&result.round_number).copied().ok_or(
                RestoreError::MissingRound {
                    round_number: result.round_number.as_u8(),
                    expected: fixture::ROUND_COUNT,
                },
            )?;

            tx.execute(
                "INSERT INTO matches (round_id, player1_id, player2_id, score1, score2, completed)
                 VALUES (?, ?, ?, ?, ?, 1)",
                params![
                    round_id,
                    result.player1.as_i64(),
                    result.player2.as_i64(),
                    result.score1,
                    result.score2
                ],
            )?;
            matches_inserted += 1;
        }

        let mut stats_inserted = 0;
        for m in completed_matches_on(&tx)? {
            for stat in m.stat_rows() {
                tx.execute(
                    "INSERT INTO player_match_stats (player_id, match_id, games_played, games_won)
                     VALUES (?, ?, ?, ?)",
                    params![
                        stat.player_id.as_i64(),
                        stat.match_id,
                        stat.games_played,
                        stat.games_won
                    ],
                )?;
                stats_inserted += 1;
            }
        }

        tx.commit()?;

        Ok(RestoreSummary {
            rounds_inserted,
            matches_inserted,
            stats_inserted,
        })
    }

    /// Insert or update a player's basic information
    pub fn upsert_player(&mut self, player: &Player) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO players (id, name, confirmed) VALUES (?, ?, ?)",
            params![player.id.as_i64(), player.name, player.confirmed],
        )?;
        Ok(())
    }

    /// All rounds ordered by round number
    pub fn rounds(&self) -> Result<Vec<Round>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, round_number, format FROM rounds ORDER BY round_number")?;

        let rows = stmt.query_map([], row_to_round)?;

        let mut rounds = Vec::new();
        for row in rows {
            rounds.push(row?);
        }
        Ok(rounds)
    }

    /// Map from round number to the generated round id
    pub fn round_id_map(&self) -> Result<HashMap<RoundNumber, i64>> {
        round_id_map_on(&self.conn)
    }

    /// All completed matches ordered by id
    pub fn completed_matches(&self) -> Result<Vec<Match>> {
        completed_matches_on(&self.conn)
    }

    /// Matches belonging to one round, ordered by id
    pub fn matches_for_round(&self, round_id: i64) -> Result<Vec<Match>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, round_id, player1_id, player2_id, score1, score2, completed
             FROM matches
             WHERE round_id = ?
             ORDER BY id",
        )?;

        let rows = stmt.query_map(params![round_id], row_to_match)?;

        let mut matches = Vec::new();
        for row in rows {
            matches.push(row?);
        }
        Ok(matches)
    }

    /// Stat rows recorded for one match, ordered by player id
    pub fn stats_for_match(&self, match_id: i64) -> Result<Vec<PlayerMatchStat>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, match_id, games_played, games_won
             FROM player_match_stats
             WHERE match_id = ?
             ORDER BY player_id",
        )?;

        let rows = stmt.query_map(params![match_id], |row| {
            Ok(PlayerMatchStat {
                player_id: PlayerId::new(row.get(0)?),
                match_id: row.get(1)?,
                games_played: row.get(2)?,
                games_won: row.get(3)?,
            })
        })?;

        let mut stats = Vec::new();
        for row in rows {
            stats.push(row?);
        }
        Ok(stats)
    }

    pub fn count_rounds(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM rounds", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn count_matches(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn count_stats(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM player_match_stats", [], |row| {
                row.get(0)
            })?;
        Ok(count)
    }

    /// Standings rows ordered by points, then total points scored.
    /// `limit` of `None` returns the whole table.
    pub fn top_standings(&self, limit: Option<usize>) -> Result<Vec<Standing>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, matches_played, wins, ties, losses, points, total_points_scored
             FROM standings
             ORDER BY points DESC, total_points_scored DESC
             LIMIT ?",
        )?;

        // SQLite treats a negative LIMIT as unbounded
        let limit = limit.map(|l| l as i64).unwrap_or(-1);
        let rows = stmt.query_map(params![limit], |row| {
            Ok(Standing {
                id: PlayerId::new(row.get(0)?),
                name: row.get(1)?,
                matches_played: row.get(2)?,
                wins: row.get(3)?,
                ties: row.get(4)?,
                losses: row.get(5)?,
                points: row.get(6)?,
                total_points_scored: row.get(7)?,
            })
        })?;

        let mut standings = Vec::new();
        for row in rows {
            standings.push(row?);
        }
        Ok(standings)
    }
}

fn round_id_map_on(conn: &Connection) -> Result<HashMap<RoundNumber, i64>> {
    let mut stmt = conn.prepare("SELECT id, round_number FROM rounds ORDER BY round_number")?;

    let rows = stmt.query_map([], |row| {
        Ok((RoundNumber::new(row.get(1)?), row.get::<_, i64>(0)?))
    })?;

    let mut map = HashMap::new();
    for row in rows {
        let (number, id) = row?;
        map.insert(number, id);
    }
    Ok(map)
}

fn completed_matches_on(conn: &Connection) -> Result<Vec<Match>> {
    let mut stmt = conn.prepare(
        "SELECT id, round_id, player1_id, player2_id, score1, score2, completed
         FROM matches
         WHERE completed = 1
         ORDER BY id",
    )?;

    let rows = stmt.query_map([], row_to_match)?;

    let mut matches = Vec::new();
    for row in rows {
        matches.push(row?);
    }
    Ok(matches)
}

fn row_to_match(row: &Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        round_id: row.get(1)?,
        player1_id: PlayerId::new(row.get(2)?),
        player2_id: PlayerId::new(row.get(3)?),
        score1: row.get(4)?,
        score2: row.get(5)?,
        completed: row.get(6)?,
    })
}

fn row_to_round(row: &Row) -> rusqlite::Result<Round> {
    let format: String = row.get(2)?;
    let format = format.parse().map_err(|e: RestoreError| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Round {
        id: row.get(0)?,
        round_number: RoundNumber::new(row.get(1)?),
        format,
    })
}
