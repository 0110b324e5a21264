//! Domain newtypes shared between the CLI and the storage layer.

use crate::error::{Result, RestoreError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for tournament player IDs.
///
/// Ensures player IDs are handled consistently throughout the
/// application and prevents mixing them up with other row ids.
///
/// # Examples
///
/// ```rust
/// use tourney_restore::PlayerId;
///
/// let player = PlayerId::new(150);
/// assert_eq!(player.as_i64(), 150);
/// assert_eq!(player.to_string(), "150");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

impl PlayerId {
    /// Create a new PlayerId from an i64 value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = RestoreError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for round numbers (1-based schedule position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundNumber(pub u8);

impl RoundNumber {
    pub fn new(number: u8) -> Self {
        Self(number)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for RoundNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RoundNumber {
    type Err = RestoreError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Match format played in a round.
///
/// The schedule alternates between the two styles of play; odd-numbered
/// rounds are `PB`, even-numbered rounds are `BF`. The database stores
/// the two-letter code as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    PB,
    BF,
}

impl Format {
    /// The two-letter code stored in the `rounds.format` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::PB => "PB",
            Format::BF => "BF",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = RestoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PB" => Ok(Format::PB),
            "BF" => Ok(Format::BF),
            other => Err(RestoreError::InvalidFormat {
                format: other.to_string(),
            }),
        }
    }
}
