//! Database connection and schema management

use crate::error::RestoreError;
use anyhow::Result;
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for the tournament data
pub struct TournamentDb {
    pub(crate) conn: Connection,
}

impl TournamentDb {
    /// Open (or create) the database at `path` and ensure the schema exists
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database, used by tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Default database location when neither `--database` nor the
    /// `TOURNEY_RESTORE_DB` env var is set
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or(RestoreError::NoDataDir)?;
        Ok(data_dir.join("tourney-restore").join("tournament.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute("PRAGMA foreign_keys = ON", [])?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                confirmed INTEGER NOT NULL DEFAULT 0
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS rounds (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                round_number INTEGER NOT NULL UNIQUE,
                format TEXT NOT NULL CHECK (format IN ('PB', 'BF'))
            )",
            [],
        )?;

        // Participant ids are not foreign keys; the restore runs
        // against a wiped database before player names are reseeded.
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS matches (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                round_id INTEGER NOT NULL REFERENCES rounds(id) ON DELETE CASCADE,
                player1_id INTEGER NOT NULL,
                player2_id INTEGER NOT NULL,
                score1 INTEGER NOT NULL,
                score2 INTEGER NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS player_match_stats (
                player_id INTEGER NOT NULL,
                match_id INTEGER NOT NULL REFERENCES matches(id) ON DELETE CASCADE,
                games_played INTEGER NOT NULL,
                games_won INTEGER NOT NULL,
                PRIMARY KEY (player_id, match_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_matches_round
             ON matches(round_id)",
            [],
        )?;

        // Win = 3 points, tie = 1; tie-break on total points scored.
        self.conn.execute(
            "CREATE VIEW IF NOT EXISTS standings AS
             SELECT
                 p.id AS id,
                 p.name AS name,
                 COUNT(m.id) AS matches_played,
                 SUM(CASE WHEN (m.player1_id = p.id AND m.score1 > m.score2)
                           OR (m.player2_id = p.id AND m.score2 > m.score1)
                          THEN 1 ELSE 0 END) AS wins,
                 SUM(CASE WHEN m.score1 = m.score2 THEN 1 ELSE 0 END) AS ties,
                 SUM(CASE WHEN (m.player1_id = p.id AND m.score1 < m.score2)
                           OR (m.player2_id = p.id AND m.score2 < m.score1)
                          THEN 1 ELSE 0 END) AS losses,
                 3 * SUM(CASE WHEN (m.player1_id = p.id AND m.score1 > m.score2)
                               OR (m.player2_id = p.id AND m.score2 > m.score1)
                              THEN 1 ELSE 0 END)
                   + SUM(CASE WHEN m.score1 = m.score2 THEN 1 ELSE 0 END) AS points,
                 SUM(CASE WHEN m.player1_id = p.id THEN m.score1
                          WHEN m.player2_id = p.id THEN m.score2
                          ELSE 0 END) AS total_points_scored
             FROM players p
             LEFT JOIN matches m
               ON m.completed = 1
              AND p.id IN (m.player1_id, m.player2_id)
             GROUP BY p.id, p.name",
            [],
        )?;

        Ok(())
    }
}
