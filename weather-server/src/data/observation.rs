//! Current observation lookup. Always goes to the feed.

use std::sync::Arc;

use tracing::info;

use crate::domain::CurrentObservation;
use crate::noaa::{RawObservation, RemoteStationSource};

use super::error::{DataError, OBSERVATION_UNAVAILABLE};
use super::task::dispatch;

/// Fetches a station's latest observation.
///
/// Observations are time-sensitive and never cached.
#[derive(Clone)]
pub struct ObservationFetcher {
    source: Arc<dyn RemoteStationSource>,
}

impl ObservationFetcher {
    pub fn new(source: Arc<dyn RemoteStationSource>) -> Self {
        Self { source }
    }

    /// The current observation for `station_id`.
    ///
    /// `Ok(None)` means the feed answered but had no observation for this
    /// station, which is not a fault.
    pub async fn get_observation(
        &self,
        station_id: &str,
    ) -> Result<Option<CurrentObservation>, DataError> {
        let station_id = station_id.trim();
        if station_id.is_empty() {
            return Err(DataError::invalid_argument("A station must be selected."));
        }

        let source = Arc::clone(&self.source);
        let id = station_id.to_string();
        let raw = dispatch(OBSERVATION_UNAVAILABLE, async move {
            source.fetch_observation(&id).await
        })
        .join()
        .await?
        .map_err(|e| DataError::from_remote(OBSERVATION_UNAVAILABLE, e))?;

        match raw {
            Some(raw) => Ok(Some(to_observation(station_id, raw))),
            None => {
                info!(station_id, "no current observation");
                Ok(None)
            }
        }
    }
}

/// Copy the raw strings across as-is. The station id is the one asked for.
fn to_observation(station_id: &str, raw: RawObservation) -> CurrentObservation {
    CurrentObservation::builder(raw.location, Some(station_id.to_string()))
        .observation_time(raw.observation_time)
        .observation_time_rfc822(raw.observation_time_rfc822)
        .weather(raw.weather)
        .temperature(raw.temperature_string)
        .dewpoint(raw.dewpoint_string)
        .humidity(raw.relative_humidity)
        .wind(raw.wind_string)
        .pressure(raw.pressure_string)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testing::FakeSource;
    use crate::domain::NOT_PROVIDED;

    fn knyc() -> RawObservation {
        RawObservation {
            location: Some("New York City, Central Park, NY".into()),
            station_id: Some("KNYC".into()),
            observation_time: Some("Last Updated on Oct 17 2026, 9:51 am EDT".into()),
            observation_time_rfc822: Some("Sat, 17 Oct 2026 09:51:00 -0400".into()),
            weather: Some("Fair".into()),
            temperature_string: Some("72.0 F".into()),
            dewpoint_string: Some("55.0 F (12.8 C)".into()),
            relative_humidity: Some("55".into()),
            wind_string: None,
            pressure_string: Some("1016.4 mb".into()),
        }
    }

    #[tokio::test]
    async fn copies_fields_verbatim() {
        let source = Arc::new(FakeSource::default());
        source.add_observation("KNYC", knyc());
        let fetcher = ObservationFetcher::new(source.clone());

        let obs = fetcher.get_observation("KNYC").await.unwrap().unwrap();

        assert_eq!(obs.temperature(), "72.0 F");
        assert_eq!(obs.station_id(), "KNYC");
        assert_eq!(obs.humidity(), "55");
        assert_eq!(obs.observation_time_rfc822(), "Sat, 17 Oct 2026 09:51:00 -0400");
        assert_eq!(obs.wind(), NOT_PROVIDED);
    }

    #[tokio::test]
    async fn never_cached() {
        let source = Arc::new(FakeSource::default());
        source.add_observation("KNYC", knyc());
        let fetcher = ObservationFetcher::new(source.clone());

        fetcher.get_observation("KNYC").await.unwrap();
        fetcher.get_observation("KNYC").await.unwrap();

        assert_eq!(source.observation_calls(), 2);
    }

    #[tokio::test]
    async fn missing_observation_is_none() {
        let source = Arc::new(FakeSource::default());
        let fetcher = ObservationFetcher::new(source);

        assert_eq!(fetcher.get_observation("KXYZ").await, Ok(None));
    }

    #[tokio::test]
    async fn malformed_id_is_invalid_argument() {
        let source = Arc::new(FakeSource::default());
        let fetcher = ObservationFetcher::new(source);

        let err = fetcher.get_observation("K/NYC").await.unwrap_err();
        assert!(matches!(err, DataError::InvalidArgument { .. }));

        let err = fetcher.get_observation("").await.unwrap_err();
        assert!(matches!(err, DataError::InvalidArgument { .. }));
    }

    #[tokio::test]
    async fn feed_failure_is_data_access() {
        let source = Arc::new(FakeSource::default());
        source.set_failing(true);
        let fetcher = ObservationFetcher::new(source);

        let err = fetcher.get_observation("KNYC").await.unwrap_err();
        assert_eq!(err.to_string(), OBSERVATION_UNAVAILABLE);
        assert!(err.detail().is_some());
    }
}
