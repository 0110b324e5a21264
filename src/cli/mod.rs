//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Database location arguments shared between commands
#[derive(Debug, Args)]
pub struct DatabaseOpts {
    /// Path to the tournament database (or set `TOURNEY_RESTORE_DB` env var).
    #[clap(long, short)]
    pub database: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[clap(name = "tourney-restore", about = "Tournament database restore CLI")]
pub struct TourneyRestore {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Restore the tournament dataset from the recorded results.
    ///
    /// Clears `player_match_stats`, `matches`, and `rounds`, re-inserts
    /// the 8-round schedule and the 40 recorded match results, derives
    /// two stat rows per match, then prints verification counts and the
    /// top of the standings. The whole restore runs in one transaction.
    Restore {
        #[clap(flatten)]
        db: DatabaseOpts,

        /// Skip the post-restore verification queries.
        #[clap(long)]
        no_verify: bool,
    },

    /// Run the verification queries against an existing database.
    ///
    /// Read-only: prints row counts, checks that every completed match
    /// has exactly two consistent stat rows, and shows the top-3
    /// standings.
    Verify {
        #[clap(flatten)]
        db: DatabaseOpts,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Print the current standings.
    Standings {
        #[clap(flatten)]
        db: DatabaseOpts,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Only show the top N players.
        #[clap(long, short)]
        limit: Option<usize>,
    },
}
