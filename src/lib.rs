//! Fantasy Premier League player client
//!
//! Fetches a player's detail resource and bulk-list entry from the FPL API and
//! merges them into a typed, immutable [`PlayerRecord`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_player::{Config, DefaultLabels, HttpSource, PlayerId, PlayerRecord};
//!
//! # async fn example() -> fpl_player::Result<()> {
//! let source = HttpSource::new(&Config::from_env()?)?;
//! let player = PlayerRecord::fetch(&source, &DefaultLabels, PlayerId::new(302), None).await?;
//!
//! println!("{player}"); // "Salah - Midfielder - Liverpool"
//! println!("£{:.1}m, {} games", player.price, player.games_played());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FPL_API_URL=https://fantasy.premierleague.com/drf
//! export FPL_LOG_LEVEL=debug
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fpl;
pub mod logging;

// Re-export commonly used types
pub use cli::types::{ids::PlayerId, position::Position};
pub use config::Config;
pub use error::{ErrorKind, FplError, Result};
pub use fpl::{
    find_in_bulk_list,
    http::HttpSource,
    labels::{DefaultLabels, Labels},
    player::PlayerRecord,
    PlayerSource,
};
