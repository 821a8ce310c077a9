//! Process configuration.
//!
//! Everything is read from `WX_*` environment variables, falling back to
//! defaults that talk to the public NOAA feed and keep the station store in
//! the working directory.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::noaa::NoaaConfig;

pub const DEFAULT_DATABASE: &str = "weather.sqlite";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBind { var: &'static str, value: String },

    #[error("{var} is not a whole number of seconds: {value}")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Station index document
    pub index_url: String,

    /// Base URL for `<station_id>.xml` observation documents
    pub observation_base_url: String,

    /// SQLite file holding the station cache
    pub database: PathBuf,

    /// Address the web server listens on
    pub bind: SocketAddr,

    /// Serve feed documents from this directory instead of the network
    pub mock_dir: Option<PathBuf>,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get("WX_INDEX_URL") {
            config = config.with_index_url(url);
        }
        if let Some(url) = get("WX_OBSERVATION_URL") {
            config = config.with_observation_base_url(url);
        }
        if let Some(path) = get("WX_DATABASE") {
            config = config.with_database(path);
        }
        if let Some(dir) = get("WX_MOCK_DIR") {
            config = config.with_mock_dir(dir);
        }
        if let Some(value) = get("WX_BIND") {
            let bind = value.trim().parse().map_err(|_| ConfigError::InvalidBind {
                var: "WX_BIND",
                value: value.clone(),
            })?;
            config = config.with_bind(bind);
        }
        if let Some(value) = get("WX_HTTP_TIMEOUT_SECS") {
            let secs = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout {
                    var: "WX_HTTP_TIMEOUT_SECS",
                    value: value.clone(),
                })?;
            config = config.with_timeout(secs);
        }

        Ok(config)
    }

    pub fn with_index_url(mut self, url: impl Into<String>) -> Self {
        self.index_url = url.into();
        self
    }

    pub fn with_observation_base_url(mut self, url: impl Into<String>) -> Self {
        self.observation_base_url = url.into();
        self
    }

    pub fn with_database(mut self, path: impl Into<PathBuf>) -> Self {
        self.database = path.into();
        self
    }

    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    pub fn with_mock_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.mock_dir = Some(dir.into());
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Settings for the HTTP feed client.
    pub fn noaa(&self) -> NoaaConfig {
        NoaaConfig::new()
            .with_index_url(&self.index_url)
            .with_observation_base_url(&self.observation_base_url)
            .with_timeout(self.timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let noaa = NoaaConfig::default();
        Self {
            index_url: noaa.index_url,
            observation_base_url: noaa.observation_base_url,
            database: PathBuf::from(DEFAULT_DATABASE),
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            mock_dir: None,
            timeout_secs: noaa.timeout_secs,
        }
    }
}
