//! Player position types and utilities.

use crate::error::FplError;
use std::fmt;

/// Fantasy Premier League player positions.
///
/// The API reports a player's position as its `element_type` code:
/// 1 = goalkeeper, 2 = defender, 3 = midfielder, 4 = forward.
///
/// # Examples
///
/// ```rust
/// use fpl_player::Position;
///
/// let mid = Position::try_from_code(3).unwrap();
/// assert_eq!(mid, Position::Midfielder);
/// assert_eq!(mid.to_string(), "Midfielder");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// Convert an `element_type` code into a Position.
    pub fn try_from_code(code: i64) -> Result<Self, FplError> {
        match code {
            1 => Ok(Position::Goalkeeper),
            2 => Ok(Position::Defender),
            3 => Ok(Position::Midfielder),
            4 => Ok(Position::Forward),
            _ => Err(FplError::InvalidPosition { code }),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        };
        write!(f, "{}", s)
    }
}
