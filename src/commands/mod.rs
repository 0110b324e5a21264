//! Command implementations for the tournament restore CLI

pub mod restore;
pub mod standings;
pub mod verify;


use crate::storage::TournamentDb;
use crate::DB_PATH_ENV_VAR;
use anyhow::Result;
use std::path::PathBuf;

/// Resolve the database location: explicit flag first, then the
/// `TOURNEY_RESTORE_DB` environment variable, then the platform default
pub fn resolve_database_path(database: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = database {
        return Ok(path);
    }

    if let Ok(path) = std::env::var(DB_PATH_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    TournamentDb::default_path()
}
