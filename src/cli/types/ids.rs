//! ID types for the Fantasy Premier League API.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for FPL player (element) IDs.
///
/// # Examples
///
/// ```rust
/// use fpl_player::PlayerId;
///
/// let player_id: PlayerId = "302".parse().unwrap();
/// assert_eq!(player_id.as_u64(), 302);
/// assert_eq!(player_id.to_string(), "302");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
