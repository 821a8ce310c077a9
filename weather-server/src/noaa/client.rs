//! NOAA current-conditions HTTP client.

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::Url;
use tracing::{debug, info};

use super::error::NoaaError;
use super::parse::{parse_observation, parse_station_index};
use super::source::RemoteStationSource;
use super::types::{RawObservation, RawStation};

/// Default URL of the full station index.
const DEFAULT_INDEX_URL: &str = "https://w1.weather.gov/xml/current_obs/index.xml";

/// Default base URL for per-station observation documents.
const DEFAULT_OBSERVATION_BASE_URL: &str = "https://w1.weather.gov/xml/current_obs";

/// The feed refuses requests without a descriptive user agent.
const DEFAULT_USER_AGENT: &str = concat!("weather-server/", env!("CARGO_PKG_VERSION"));

/// Configuration for the NOAA client.
#[derive(Debug, Clone)]
pub struct NoaaConfig {
    /// URL of the station index document
    pub index_url: String,
    /// Base URL; observations live at `{base}/{station_id}.xml`
    pub observation_base_url: String,
    /// User-Agent header value
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NoaaConfig {
    /// Create a config pointing at the production feed.
    pub fn new() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            observation_base_url: DEFAULT_OBSERVATION_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom station index URL (for testing).
    pub fn with_index_url(mut self, url: impl Into<String>) -> Self {
        self.index_url = url.into();
        self
    }

    /// Set a custom observation base URL (for testing).
    pub fn with_observation_base_url(mut self, url: impl Into<String>) -> Self {
        self.observation_base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for NoaaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the NOAA XML current-conditions feed.
#[derive(Debug, Clone)]
pub struct NoaaClient {
    http: reqwest::Client,
    index_url: String,
    observation_base_url: String,
}

impl NoaaClient {
    /// Create a new NOAA client.
    pub fn new(config: NoaaConfig) -> Result<Self, NoaaError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            index_url: config.index_url,
            observation_base_url: config.observation_base_url,
        })
    }

    /// Build the observation document URL for a station.
    pub fn observation_url(&self, station_id: &str) -> Result<Url, NoaaError> {
        validate_station_id(station_id)?;
        let url = format!(
            "{}/{}.xml",
            self.observation_base_url.trim_end_matches('/'),
            station_id
        );
        Url::parse(&url).map_err(|_| NoaaError::InvalidStationId(station_id.to_string()))
    }

    /// Fetch and parse the full station index.
    pub async fn fetch_station_index(&self) -> Result<Vec<RawStation>, NoaaError> {
        debug!(url = %self.index_url, "fetching station index");

        let response = self.http.get(&self.index_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NoaaError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.bytes().await?;
        let stations = parse_station_index(&body)?;
        info!(count = stations.len(), "fetched station index");
        Ok(stations)
    }

    /// Fetch and parse one station's current observation.
    ///
    /// A 404 means the feed has no observation for this station and yields
    /// `Ok(None)`, as does a document without an observation element.
    pub async fn fetch_observation(
        &self,
        station_id: &str,
    ) -> Result<Option<RawObservation>, NoaaError> {
        let url = self.observation_url(station_id)?;
        debug!(%url, "fetching current observation");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NoaaError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.bytes().await?;
        parse_observation(&body)
    }
}

impl RemoteStationSource for NoaaClient {
    fn fetch_station_index(&self) -> BoxFuture<'_, Result<Vec<RawStation>, NoaaError>> {
        NoaaClient::fetch_station_index(self).boxed()
    }

    fn fetch_observation<'a>(
        &'a self,
        station_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<RawObservation>, NoaaError>> {
        NoaaClient::fetch_observation(self, station_id).boxed()
    }
}

/// Station ids are ASCII letters and digits, e.g. `KNYC` or `PAOT1`.
pub(crate) fn validate_station_id(station_id: &str) -> Result<(), NoaaError> {
    if station_id.is_empty() || !station_id.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(NoaaError::InvalidStationId(station_id.to_string()));
    }
    Ok(())
}
