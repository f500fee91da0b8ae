//! Player command implementation

use serde_json::{json, Value};
use tracing::info;

use crate::{
    config::Config,
    fpl::{http::HttpSource, labels::DefaultLabels, player::PlayerRecord},
    PlayerId, Result,
};

/// Parameters for the player command
#[derive(Debug, Clone)]
pub struct PlayerParams {
    pub player_id: PlayerId,
    pub as_json: bool,
    pub base_url: Option<String>,
}

/// Handle the player command
pub async fn handle_player(config: Config, params: PlayerParams) -> Result<()> {
    let config = match params.base_url {
        Some(url) => config.with_base_url(url)?,
        None => config,
    };

    info!(player_id = %params.player_id, base_url = %config.base_url, "loading player");
    let source = HttpSource::new(&config)?;
    let record = PlayerRecord::fetch(&source, &DefaultLabels, params.player_id, None).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&player_json(&record)?)?);
    } else {
        println!("{}", render_text(&record));
    }

    Ok(())
}

/// Serialized record plus the computed stats.
pub fn player_json(record: &PlayerRecord) -> Result<Value> {
    let mut value = serde_json::to_value(record)?;
    if let Value::Object(map) = &mut value {
        map.insert("games_played".to_string(), json!(record.games_played()));
        map.insert("pp90".to_string(), json!(record.pp90()));
    }
    Ok(value)
}

/// Multi-line text summary headed by the one-line display form.
pub fn render_text(record: &PlayerRecord) -> String {
    let mut lines = vec![
        record.to_string(),
        format!("  Price:        £{:.1}m", record.price),
        format!(
            "  Points:       {} ({} this gameweek)",
            record.points, record.gameweek_points
        ),
        format!("  Minutes:      {}", record.minutes),
        format!("  Games played: {}", record.games_played()),
        format!("  Points/min:   {:.3}", record.pp90()),
        format!("  Selected by:  {:.1}%", record.selected_by),
        format!("  Status:       {}", record.status),
    ];
    if !record.news.is_empty() {
        lines.push(format!("  News:         {}", record.news));
    }
    lines.join("\n")
}
