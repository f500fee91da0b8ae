//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::ids::PlayerId;

#[derive(Debug, Parser)]
#[clap(name = "fpl", about = "Fantasy Premier League player lookup", version)]
pub struct Fpl {
    /// Enable debug logging (overridden by `RUST_LOG`).
    #[clap(long, global = true)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch one player's profile and print a summary.
    ///
    /// Queries `/element-summary/{id}` and `/elements/` and merges the two.
    Player {
        /// Player (element) ID.
        player_id: PlayerId,

        /// Output the full record as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// API base URL (or set `FPL_API_URL` env var).
        #[clap(long)]
        base_url: Option<String>,
    },
}
