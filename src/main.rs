//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use fpl_player::{
    cli::{Commands, Fpl},
    commands::player::{handle_player, PlayerParams},
    config::Config,
    logging::init_logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Fpl::parse();
    let config = Config::from_env().context("invalid configuration")?;
    init_logging(&config.log_level, app.debug)?;

    match app.command {
        Commands::Player {
            player_id,
            json,
            base_url,
        } => handle_player(
            config,
            PlayerParams {
                player_id,
                as_json: json,
                base_url,
            },
        )
        .await
        .with_context(|| format!("failed to load player {player_id}"))?,
    }

    Ok(())
}
