pub mod theme;

use crate::util::ok_or_default;
use exchange::{Asset, FetchRequest, QuoteCurrency};
use theme::ThemeMode;

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;
pub const MIN_POLL_INTERVAL_SECS: u64 = 10;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    #[serde(deserialize_with = "ok_or_default")]
    pub assets: Vec<Asset>,
    #[serde(deserialize_with = "ok_or_default")]
    pub poll_interval_secs: u64,
    #[serde(deserialize_with = "ok_or_true")]
    pub include_24h_change: bool,
    #[serde(deserialize_with = "ok_or_default")]
    pub theme: ThemeMode,
    #[serde(deserialize_with = "ok_or_default")]
    pub log_level: String,
}

/// Invalid values keep the 24h change column on.
fn ok_or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(true))
}

impl Default for Config {
    fn default() -> Self {
        Config {
            assets: Asset::ALL.to_vec(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            include_24h_change: true,
            theme: ThemeMode::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Drops duplicate assets and pulls out-of-range values back to usable ones.
    pub fn sanitized(mut self) -> Self {
        let mut seen = Vec::with_capacity(self.assets.len());
        self.assets.retain(|asset| {
            if seen.contains(asset) {
                false
            } else {
                seen.push(*asset);
                true
            }
        });

        if self.assets.is_empty() {
            self.assets = Asset::ALL.to_vec();
        }

        if self.poll_interval_secs == 0 {
            self.poll_interval_secs = DEFAULT_POLL_INTERVAL_SECS;
        }
        self.poll_interval_secs = self.poll_interval_secs.max(MIN_POLL_INTERVAL_SECS);

        self
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level
            .parse()
            .unwrap_or(log::LevelFilter::Info)
    }

    pub fn fetch_request(&self) -> FetchRequest {
        FetchRequest {
            assets: self.assets.clone(),
            currency: QuoteCurrency::Usd,
            include_24h_change: self.include_24h_change,
        }
    }
}

/// Reads `<config dir>/cryptoscope/config.json`, defaults when absent.
pub fn load() -> Result<Config, ConfigError> {
    match crate::config_path(CONFIG_FILE_NAME) {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse(&contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(ConfigError::Io(e)),
    }
}

pub fn parse(contents: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_json::from_str(contents)?;
    Ok(config.sanitized())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_change_flag_keeps_change_column() {
        let config = parse(r#"{"include_24h_change": "yes"}"#).unwrap();
        assert!(config.include_24h_change);

        let config = parse(r#"{"include_24h_change": false}"#).unwrap();
        assert!(!config.include_24h_change);
    }

    #[test]
    fn empty_object_gives_defaults() {
        let config = parse("{}").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.poll_interval(), Duration::from_secs(60));
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn invalid_fields_fall_back_individually() {
        let config = parse(r#"{"assets": "BTC", "poll_interval_secs": 120, "theme": "neon"}"#)
            .unwrap();

        assert_eq!(config.assets, Asset::ALL.to_vec());
        assert_eq!(config.poll_interval_secs, 120);
        assert_eq!(config.theme, ThemeMode::Dark);
    }

    #[test]
    fn sanitizes_assets_and_interval() {
        let config = parse(r#"{"assets": ["SOL", "BTC", "SOL"], "poll_interval_secs": 2}"#)
            .unwrap();

        assert_eq!(config.assets, vec![Asset::Solana, Asset::Bitcoin]);
        assert_eq!(config.poll_interval_secs, MIN_POLL_INTERVAL_SECS);
    }

    #[test]
    fn fetch_request_follows_config() {
        let config = parse(r#"{"assets": ["ETH"], "include_24h_change": false}"#).unwrap();
        let request = config.fetch_request();

        assert_eq!(request.assets, vec![Asset::Ethereum]);
        assert!(!request.include_24h_change);
        assert_eq!(request.currency, QuoteCurrency::Usd);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(parse("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("cryptoscope-missing-config-for-test.json");
        let config = load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }
}
