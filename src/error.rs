//! Error types for the tournament restore CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RestoreError>;

/// Domain errors. Driver-level failures (SQL errors, constraint
/// violations, IO) propagate as-is through `anyhow` and abort the run.
#[derive(Error, Debug)]
pub enum RestoreError {
    #[error("could not determine a data directory for the tournament database")]
    NoDataDir,

    #[error("round {round_number} is not in the database; expected rounds 1-{expected}")]
    MissingRound { round_number: u8, expected: u8 },

    #[error("failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("invalid format code: {format}")]
    InvalidFormat { format: String },
}
