//! A single player's profile merged from the detail and bulk resources.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, warn};

use super::{fields::Fields, find_in_bulk_list, labels::Labels, PlayerSource};
use crate::{
    error::{Document, FplError},
    PlayerId, Result,
};


/// One player's full profile. Populated once at construction, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
    pub player_id: PlayerId,

    /// Short display name (`web_name`).
    pub name: String,
    pub first_name: String,
    pub second_name: String,
    /// Position code: 1 = GKP, 2 = DEF, 3 = MID, 4 = FWD.
    pub player_type: u32,
    pub position: String,
    pub team_id: u32,
    pub team: String,
    pub squad_number: Option<u32>,

    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub saves: u32,
    pub penalties_missed: u32,
    pub minutes: u32,
    pub bps: i64,
    /// Season total points.
    pub points: i64,
    pub ppg: f64,
    pub form: f64,

    /// Current price in millions (`now_cost` / 10).
    pub price: f64,
    pub gameweek_points: i64,
    pub gameweek_price_change: i64,
    pub gameweek_transfers_in: u64,
    pub gameweek_transfers_out: u64,
    pub transfers_in: u64,
    pub transfers_out: u64,
    pub selected_by: f64,

    pub status: String,
    pub news: String,

    pub explain: Vec<Value>,
    pub fixtures: Vec<Value>,
    pub fixtures_summary: Vec<Value>,
    pub history: Vec<Value>,
    pub history_past: Vec<Value>,
    pub history_summary: Vec<Value>,
}

impl PlayerRecord {
    /// Fetch the remote documents for `player_id` and build the record.
    ///
    /// When `additional` is supplied it is used as the bulk-list entry and only
    /// the detail resource is fetched.
    pub async fn fetch(
        source: &dyn PlayerSource,
        labels: &dyn Labels,
        player_id: PlayerId,
        additional: Option<Map<String, Value>>,
    ) -> Result<Self> {
        debug!(%player_id, "fetching player detail");
        let detail = source.fetch_player_detail(player_id).await?;

        let additional = match additional {
            Some(entry) => entry,
            None => lookup_additional(source, player_id).await?,
        };

        Self::assemble(player_id, &detail, &additional, labels)
    }

    /// Build a record from already-fetched documents. Performs no I/O.
    pub fn assemble(
        player_id: PlayerId,
        detail: &Map<String, Value>,
        additional: &Map<String, Value>,
        labels: &dyn Labels,
    ) -> Result<Self> {
        let d = Fields::new(Document::Detail, detail);
        let a = Fields::new(Document::Bulk, additional);

        let player_type = a.count("element_type")?;
        let team_id = a.count("team")?;
        let now_cost = a.count("now_cost")?;

        Ok(Self {
            player_id,
            name: a.string("web_name")?,
            first_name: a.string("first_name")?,
            second_name: a.string("second_name")?,
            position: labels.position_label(i64::from(player_type))?,
            player_type,
            team: labels.team_label(i64::from(team_id))?,
            team_id,
            squad_number: a.opt_count("squad_number")?,

            goals: a.count("goals_scored")?,
            assists: a.count("assists")?,
            clean_sheets: a.count("clean_sheets")?,
            yellow_cards: a.count("yellow_cards")?,
            red_cards: a.count("red_cards")?,
            saves: a.count("saves")?,
            penalties_missed: a.count("penalties_missed")?,
            minutes: a.count("minutes")?,
            bps: a.int("bps")?,
            points: a.int("total_points")?,
            ppg: a.decimal("points_per_game")?,
            form: a.decimal("form")?,

            price: f64::from(now_cost) / 10.0,
            gameweek_points: a.int("event_points")?,
            gameweek_price_change: a.int("cost_change_event")?,
            gameweek_transfers_in: a.total("transfers_in_event")?,
            gameweek_transfers_out: a.total("transfers_out_event")?,
            transfers_in: a.total("transfers_in")?,
            transfers_out: a.total("transfers_out")?,
            selected_by: a.decimal("selected_by_percent")?,

            status: a.string("status")?,
            news: a.string("news")?,

            explain: d.list("explain")?,
            fixtures: d.list("fixtures")?,
            fixtures_summary: d.list("fixtures_summary")?,
            history: d.list("history")?,
            history_past: d.list("history_past")?,
            history_summary: d.list("history_summary")?,
        })
    }

    /// Number of fixtures in which the player got on the pitch.
    pub fn games_played(&self) -> usize {
        self.fixtures
            .iter()
            .filter(|fixture| {
                fixture
                    .get("minutes")
                    .and_then(Value::as_f64)
                    .is_some_and(|m| m > 0.0)
            })
            .count()
    }

    /// Points per minute played; `0.0` for a player with no minutes.
    pub fn pp90(&self) -> f64 {
        if self.minutes == 0 {
            return 0.0;
        }
        self.points as f64 / f64::from(self.minutes)
    }
}

impl fmt::Display for PlayerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.name, self.position, self.team)
    }
}

/// Fetch the bulk list and pull out the entry for `player_id`.
pub async fn lookup_additional(
    source: &dyn PlayerSource,
    player_id: PlayerId,
) -> Result<Map<String, Value>> {
    debug!(%player_id, "fetching bulk player list");
    let players = source.fetch_all_players().await?;

    match find_in_bulk_list(player_id, &players) {
        Some(entry) => Ok(entry.clone()),
        None => {
            warn!(%player_id, listed = players.len(), "player missing from bulk list");
            Err(FplError::PlayerNotFound {
                player_id: player_id.as_u64(),
            })
        }
    }
}
