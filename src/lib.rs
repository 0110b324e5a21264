//! Tournament Database Restore CLI
//!
//! A small administrative tool that restores a tournament's rounds,
//! matches, and derived per-player match statistics into a SQLite
//! database after a wipe, then verifies the result.
//!
//! ## Features
//!
//! - **Restore**: clear the dependent tables and re-insert the fixed
//!   round schedule, the recorded match results, and the per-player
//!   stats derived from them, all in one transaction
//! - **Verify**: re-run the post-restore verification queries without
//!   writing anything
//! - **Standings**: print the leaderboard ranked by the `standings` view
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tourney_restore::{fixture, storage::TournamentDb};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut db = TournamentDb::open("tournament.db")?;
//! let summary = db.restore(&fixture::MATCH_RESULTS)?;
//! println!("{} matches restored", summary.matches_inserted);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the tool at a database file without passing `--database`:
//! ```bash
//! export TOURNEY_RESTORE_DB=/srv/tournament/tournament.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod fixture;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Format, PlayerId, RoundNumber};
pub use error::{Result, RestoreError};

pub const DB_PATH_ENV_VAR: &str = "TOURNEY_RESTORE_DB";
