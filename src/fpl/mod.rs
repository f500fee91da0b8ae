//! Fantasy Premier League data access.
//!
//! - `http`: reqwest-backed [`PlayerSource`] and endpoint URL builders
//! - `labels`: position/team code lookups
//! - `player`: the [`PlayerRecord`](player::PlayerRecord) model
//! - `fields`: typed access to raw JSON documents

pub mod fields;
pub mod http;
pub mod labels;
pub mod player;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::{PlayerId, Result};

/// The two remote resources a player record is built from.
#[async_trait]
pub trait PlayerSource: Send + Sync {
    /// Per-player detail document (fixtures, history, explain).
    async fn fetch_player_detail(&self, player_id: PlayerId) -> Result<Map<String, Value>>;

    /// Bulk list with one summary object per player.
    async fn fetch_all_players(&self) -> Result<Vec<Value>>;
}

/// Find the bulk-list entry for `player_id`.
///
/// First match wins; later entries with the same `id` are ignored. Entries
/// that are not JSON objects or lack a numeric `id` never match.
pub fn find_in_bulk_list(player_id: PlayerId, bulk_list: &[Value]) -> Option<&Map<String, Value>> {
    bulk_list.iter().find_map(|entry| {
        let obj = entry.as_object()?;
        let id = obj.get("id").and_then(Value::as_u64)?;
        (id == player_id.as_u64()).then_some(obj)
    })
}
