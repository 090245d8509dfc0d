//! Environment-driven settings for the web app binary.

use std::num::ParseIntError;

use services_core::DEFAULT_WEATHER_BASE_URL;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub weather_base_url: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl AppConfig {
    /// Read `PORT` and `WEATHER_BASE_URL`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let weather_base_url = lookup("WEATHER_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.to_string());
        Ok(Self {
            port,
            weather_base_url,
        })
    }
}
