//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::data::RefreshReport;
use crate::domain::{CurrentObservation, Station};

/// Query for the stations of one state.
#[derive(Debug, Deserialize)]
pub struct StationsQuery {
    /// State abbreviation, e.g. "NY"
    #[serde(default)]
    pub state: String,
}

/// Query for one station's current observation.
#[derive(Debug, Deserialize)]
pub struct ObservationQuery {
    /// State whose station list the page should keep showing
    #[serde(default)]
    pub state: Option<String>,

    /// Station ID, e.g. "KNYC"
    #[serde(default)]
    pub station: String,
}

#[derive(Debug, Serialize)]
pub struct StatesResponse {
    pub states: Vec<String>,
}

/// A station in API results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub station_id: String,
    pub state: String,
    pub station_name: String,

    /// "Name (ID)", as shown in the station selector
    pub label: String,
}

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        Self {
            station_id: station.station_id().to_string(),
            state: station.state().to_string(),
            station_name: station.station_name().to_string(),
            label: station.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub state: String,
    pub stations: Vec<StationResult>,
}

/// Current conditions, as the feed reported them.
#[derive(Debug, Serialize)]
pub struct ObservationResult {
    pub location: String,
    pub station_id: String,
    pub observation_time: String,
    pub observation_time_rfc822: String,
    pub weather: String,
    pub temperature: String,
    pub dewpoint: String,
    pub humidity: String,
    pub wind: String,
    pub pressure: String,
}

impl ObservationResult {
    pub fn from_observation(obs: &CurrentObservation) -> Self {
        Self {
            location: obs.location().to_string(),
            station_id: obs.station_id().to_string(),
            observation_time: obs.observation_time().to_string(),
            observation_time_rfc822: obs.observation_time_rfc822().to_string(),
            weather: obs.weather().to_string(),
            temperature: obs.temperature().to_string(),
            dewpoint: obs.dewpoint().to_string(),
            humidity: obs.humidity().to_string(),
            wind: obs.wind().to_string(),
            pressure: obs.pressure().to_string(),
        }
    }
}

/// Observation lookup result.
///
/// `observation` is null when the feed has nothing for the station.
#[derive(Debug, Serialize)]
pub struct ObservationResponse {
    pub station_id: String,
    pub observation: Option<ObservationResult>,

    /// Plain-text report; empty when there is no observation
    pub report: String,
}

/// A state that could not be repopulated during a refresh.
#[derive(Debug, Serialize)]
pub struct FailedStateResult {
    pub state: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub message: String,
    pub complete: bool,
    pub refreshed: Vec<String>,
    pub failed: Vec<FailedStateResult>,
}

impl RefreshResponse {
    pub fn from_report(report: &RefreshReport) -> Self {
        Self {
            message: report.message(),
            complete: report.is_complete(),
            refreshed: report.refreshed.clone(),
            failed: report
                .failed
                .iter()
                .map(|(state, e)| FailedStateResult {
                    state: state.clone(),
                    error: e.to_string(),
                })
                .collect(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
