use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use news_core::TimestampFormat;
use news_engine::{FetchSettings, NewsApiConfig, DEFAULT_PER_PAGE};
use news_logging::{news_debug, news_info};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "./news_table.ron";
pub const API_KEY_ENV: &str = "NEWS_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_key: String,
    pub country: String,
    pub endpoint: String,
    pub per_page: usize,
    pub bind: String,
    pub utc_offset_minutes: i32,
    pub log_level: String,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api = NewsApiConfig::default();
        Self {
            api_key: api.api_key,
            country: api.country,
            endpoint: api.endpoint,
            per_page: DEFAULT_PER_PAGE,
            bind: "127.0.0.1:8000".to_string(),
            utc_offset_minutes: 0,
            log_level: "info".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    pub fn news_api(&self) -> NewsApiConfig {
        NewsApiConfig {
            endpoint: self.endpoint.clone(),
            country: self.country.clone(),
            api_key: self.api_key.clone(),
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
            ..FetchSettings::default()
        }
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        TimestampFormat::from_offset_minutes(self.utc_offset_minutes)
    }

    /// Environment values win over the file.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(API_KEY_ENV).filter(|key| !key.trim().is_empty()) {
            self.api_key = key.trim().to_string();
        }
    }
}

/// A missing file means defaults; an unreadable or malformed one is an error.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            news_debug!("No config at {:?}, using defaults", path);
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    news_info!("Loaded config from {:?}", path);
    Ok(config)
}

/// File, then environment.
pub fn load_with_env(path: &Path) -> Result<AppConfig, ConfigError> {
    let mut config = load(path)?;
    config.apply_env(|name| std::env::var(name).ok());
    Ok(config)
}
