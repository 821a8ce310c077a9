//! View-model behind the station browser page.

use crate::data::{DataError, WeatherData};
use crate::domain::{CurrentObservation, Station};

/// What the page shows: the state selector, the station list for the
/// selected state and the selected station's current conditions.
///
/// Each handler fills in one step. Failures put the user-safe message in
/// place of the data they would have produced.
#[derive(Debug, Clone, Default)]
pub struct WeatherModel {
    pub states: Vec<String>,
    pub selected_state: Option<String>,
    pub stations: Vec<Station>,
    pub selected_station: Option<String>,
    pub observation: CurrentObservation,
    pub message: Option<String>,
}

impl WeatherModel {
    pub fn new(states: Vec<String>) -> Self {
        Self {
            states,
            ..Default::default()
        }
    }

    /// Show the stations of `state`. Clears any displayed observation.
    pub async fn load(&mut self, data: &WeatherData, state: &str) -> Result<(), DataError> {
        self.selected_state = Some(state.trim().to_string());
        self.selected_station = None;
        self.observation = CurrentObservation::empty();

        match data.catalog().get_stations(state).await {
            Ok(stations) => {
                self.stations = stations;
                Ok(())
            }
            Err(e) => {
                self.stations.clear();
                self.fail(e)
            }
        }
    }

    /// Show the current conditions at `station_id`.
    pub async fn get(&mut self, data: &WeatherData, station_id: &str) -> Result<(), DataError> {
        let station_id = station_id.trim();
        self.selected_station = Some(station_id.to_string());
        self.observation = CurrentObservation::empty();

        match data.observations().get_observation(station_id).await {
            Ok(Some(observation)) => {
                self.observation = observation;
                Ok(())
            }
            Ok(None) => {
                self.message = Some(format!(
                    "No current observation for station {}.",
                    station_id
                ));
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    /// Rebuild local data and report how it went.
    pub async fn refresh(&mut self, data: &WeatherData) -> Result<(), DataError> {
        self.selected_state = None;
        self.selected_station = None;
        self.stations.clear();
        self.observation = CurrentObservation::empty();

        match data.refresher().refresh_all().await {
            Ok(report) => {
                self.message = Some(report.message());
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, e: DataError) -> Result<(), DataError> {
        self.message = Some(e.to_string());
        Err(e)
    }

    pub fn is_selected_state(&self, state: &str) -> bool {
        self.selected_state.as_deref() == Some(state)
    }

    pub fn is_selected_station(&self, station_id: &str) -> bool {
        self.selected_station.as_deref() == Some(station_id)
    }

    pub fn has_observation(&self) -> bool {
        !self.observation.is_empty()
    }

    /// The observation report, or `""` when there is none.
    pub fn report(&self) -> String {
        self.observation.to_string()
    }
}
