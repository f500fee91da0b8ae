//! Error types for the FPL player client

use std::fmt;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, FplError>;

/// Which remote JSON document a field was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    /// Per-player detail resource (`element-summary/{id}`).
    Detail,
    /// One entry of the bulk player list (`elements/`).
    Bulk,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Detail => write!(f, "player detail"),
            Document::Bulk => write!(f, "bulk player entry"),
        }
    }
}

/// Broad failure classes callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network/HTTP failure or a response that is not valid JSON.
    Transport,
    /// An expected key is absent, or no bulk entry matched the player ID.
    MissingField,
    /// A value is present but cannot be converted (wrong type, unknown code).
    Conversion,
    /// Bad configuration or command-line input.
    Config,
}

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse player ID: {0}")]
    InvalidPlayerId(#[from] std::num::ParseIntError),

    #[error("Missing field `{field}` in {document}")]
    MissingField { document: Document, field: String },

    #[error("Field `{field}` in {document} is not {expected}")]
    InvalidField {
        document: Document,
        field: String,
        expected: &'static str,
    },

    #[error("Player {player_id} not found in bulk player list")]
    PlayerNotFound { player_id: u64 },

    #[error("Invalid position code: {code}")]
    InvalidPosition { code: i64 },

    #[error("Invalid team code: {code}")]
    InvalidTeam { code: i64 },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl FplError {
    /// Classify this error into one of the broad failure classes.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FplError::Http(_) | FplError::Json(_) => ErrorKind::Transport,
            FplError::MissingField { .. } | FplError::PlayerNotFound { .. } => {
                ErrorKind::MissingField
            }
            FplError::InvalidField { .. }
            | FplError::InvalidPosition { .. }
            | FplError::InvalidTeam { .. } => ErrorKind::Conversion,
            FplError::InvalidPlayerId(_) | FplError::Config { .. } => ErrorKind::Config,
        }
    }

    pub(crate) fn missing(document: Document, field: &str) -> Self {
        FplError::MissingField {
            document,
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid(document: Document, field: &str, expected: &'static str) -> Self {
        FplError::InvalidField {
            document,
            field: field.to_string(),
            expected,
        }
    }
}
