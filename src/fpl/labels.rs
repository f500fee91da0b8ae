//! Position and team code lookups.

use crate::{cli::types::position::Position, error::FplError, Result};

/// Club names indexed by team code minus one.
pub const TEAM_NAMES: [&str; 20] = [
    "Arsenal",
    "Bournemouth",
    "Brighton",
    "Burnley",
    "Cardiff",
    "Chelsea",
    "Crystal Palace",
    "Everton",
    "Fulham",
    "Huddersfield",
    "Leicester",
    "Liverpool",
    "Man City",
    "Man Utd",
    "Newcastle",
    "Southampton",
    "Spurs",
    "Watford",
    "West Ham",
    "Wolves",
];

/// Converts numeric codes from the API into display labels.
///
/// Injected into [`PlayerRecord`](super::player::PlayerRecord) construction so
/// tests and other seasons can supply their own tables.
pub trait Labels: Send + Sync {
    fn position_label(&self, code: i64) -> Result<String>;
    fn team_label(&self, code: i64) -> Result<String>;
}

/// The built-in position names and team table.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLabels;

impl Labels for DefaultLabels {
    fn position_label(&self, code: i64) -> Result<String> {
        Position::try_from_code(code).map(|p| p.to_string())
    }

    fn team_label(&self, code: i64) -> Result<String> {
        team_name(code)
            .map(str::to_string)
            .ok_or(FplError::InvalidTeam { code })
    }
}

/// Look up a club name by team code (1-based).
pub fn team_name(code: i64) -> Option<&'static str> {
    let idx = usize::try_from(code).ok()?.checked_sub(1)?;
    TEAM_NAMES.get(idx).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_position_labels() {
        let labels = DefaultLabels;
        assert_eq!(labels.position_label(1).unwrap(), "Goalkeeper");
        assert_eq!(labels.position_label(2).unwrap(), "Defender");
        assert_eq!(labels.position_label(3).unwrap(), "Midfielder");
        assert_eq!(labels.position_label(4).unwrap(), "Forward");
    }

    #[test]
    fn test_unknown_position_code() {
        let err = DefaultLabels.position_label(7).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conversion);
    }

    #[test]
    fn test_team_table_bounds() {
        assert_eq!(team_name(1), Some("Arsenal"));
        assert_eq!(team_name(12), Some("Liverpool"));
        assert_eq!(team_name(20), Some("Wolves"));
        assert_eq!(team_name(0), None);
        assert_eq!(team_name(21), None);
        assert_eq!(team_name(-1), None);
    }

    #[test]
    fn test_unknown_team_code() {
        let err = DefaultLabels.team_label(99).unwrap_err();
        assert!(matches!(err, FplError::InvalidTeam { code: 99 }));
    }
}
