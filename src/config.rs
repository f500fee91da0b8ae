//! Environment-driven configuration.

use crate::error::{FplError, Result};

/// Default base URL of the Fantasy Premier League API.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com/drf";

pub const API_URL_ENV_VAR: &str = "FPL_API_URL";
pub const USER_AGENT_ENV_VAR: &str = "FPL_USER_AGENT";
pub const LOG_LEVEL_ENV_VAR: &str = "FPL_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL the endpoint paths are appended to (`FPL_API_URL`).
    pub base_url: String,
    /// User agent sent with every request (`FPL_USER_AGENT`).
    pub user_agent: String,
    /// Default tracing filter when `RUST_LOG` is unset (`FPL_LOG_LEVEL`).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: FPL_BASE_URL.to_string(),
            user_agent: default_user_agent(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            base_url: lookup(API_URL_ENV_VAR).unwrap_or(defaults.base_url),
            user_agent: lookup(USER_AGENT_ENV_VAR).unwrap_or(defaults.user_agent),
            log_level: lookup(LOG_LEVEL_ENV_VAR).unwrap_or(defaults.log_level),
        };
        config.validated()
    }

    /// Replace the base URL, e.g. from a command-line flag.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        self.base_url = base_url.into();
        self.validated()
    }

    fn validated(mut self) -> Result<Self> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(FplError::Config {
                message: format!("{API_URL_ENV_VAR} must not be empty"),
            });
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(FplError::Config {
                message: format!("base URL must start with http:// or https://: {trimmed}"),
            });
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }
}

fn default_user_agent() -> String {
    format!("fpl-player/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.base_url, FPL_BASE_URL);
        assert_eq!(config.log_level, "info");
        assert!(config.user_agent.starts_with("fpl-player/"));
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            (API_URL_ENV_VAR, "http://localhost:8080/api/"),
            (USER_AGENT_ENV_VAR, "test-agent"),
            (LOG_LEVEL_ENV_VAR, "debug"),
        ]))
        .unwrap();

        // Trailing slash is stripped so URL builders can join with '/'
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let err = Config::from_lookup(lookup_from(&[(API_URL_ENV_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, FplError::Config { .. }));
    }

    #[test]
    fn test_base_url_without_scheme_rejected() {
        let err = Config::default()
            .with_base_url("fantasy.premierleague.com")
            .unwrap_err();
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn test_with_base_url_override() {
        let config = Config::default()
            .with_base_url("http://127.0.0.1:9999")
            .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
    }
}
