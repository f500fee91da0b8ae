//! HTTP transport for the Fantasy Premier League API

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use super::PlayerSource;
use crate::{
    config::Config,
    error::{Document, FplError},
    PlayerId, Result,
};

#[cfg(test)]
mod tests;

/// `{base}/elements/`: every player's season summary.
pub fn players_url(base_url: &str) -> String {
    format!("{}/elements/", base_url.trim_end_matches('/'))
}

/// `{base}/element-summary/{id}`: fixtures and history for one player.
pub fn player_detail_url(base_url: &str, player_id: PlayerId) -> String {
    format!(
        "{}/element-summary/{}",
        base_url.trim_end_matches('/'),
        player_id
    )
}

fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// [`PlayerSource`] backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(default_headers())
            .build()?;
        Ok(Self::with_client(client, &config.base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self))]
    async fn get_json(&self, url: &str) -> Result<Value> {
        let res = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        debug!("received response from {url}");
        Ok(res)
    }
}

#[async_trait]
impl PlayerSource for HttpSource {
    async fn fetch_player_detail(&self, player_id: PlayerId) -> Result<Map<String, Value>> {
        let url = player_detail_url(&self.base_url, player_id);
        match self.get_json(&url).await? {
            Value::Object(map) => Ok(map),
            _ => Err(FplError::invalid(Document::Detail, "<root>", "a JSON object")),
        }
    }

    async fn fetch_all_players(&self) -> Result<Vec<Value>> {
        let url = players_url(&self.base_url);
        match self.get_json(&url).await? {
            Value::Array(players) => {
                debug!(count = players.len(), "bulk player list loaded");
                Ok(players)
            }
            _ => Err(FplError::invalid(Document::Bulk, "<root>", "a JSON array")),
        }
    }
}
