//! Read-through cache of station lists by state.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::Station;
use crate::noaa::{RawStation, RemoteStationSource};
use crate::store::StationStore;

use super::error::{DataError, SAVE_FAILED, STATION_DATA_UNAVAILABLE};
use super::task::fetch_station_index;

/// Station lists per state, served from the local store when present and
/// fetched from the feed (then saved) when not.
///
/// A state's list is always read and written as a whole; the catalog never
/// merges a partial fetch into what is stored.
#[derive(Clone)]
pub struct StationCatalog {
    source: Arc<dyn RemoteStationSource>,
    store: Arc<dyn StationStore>,
}

impl StationCatalog {
    pub fn new(source: Arc<dyn RemoteStationSource>, store: Arc<dyn StationStore>) -> Self {
        Self { source, store }
    }

    /// Stations in `state`, sorted by name.
    ///
    /// On a cache miss the full list is fetched, sorted and saved before it
    /// is returned. Nothing is written if the fetch fails.
    pub async fn get_stations(&self, state: &str) -> Result<Vec<Station>, DataError> {
        let state = state.trim();
        if state.is_empty() {
            return Err(DataError::invalid_argument("A state must be selected."));
        }

        let cached = self
            .store
            .stations_by_state(state)
            .map_err(|e| DataError::data_access(STATION_DATA_UNAVAILABLE, e))?;
        if !cached.is_empty() {
            debug!(state, count = cached.len(), "station cache hit");
            return Ok(cached);
        }

        info!(state, "station cache miss, fetching index");
        let stations = self.fetch_stations(state).await?;
        self.store
            .save_stations(&stations)
            .map_err(|e| DataError::data_access(SAVE_FAILED, e))?;

        Ok(stations)
    }

    async fn fetch_stations(&self, state: &str) -> Result<Vec<Station>, DataError> {
        let raw = fetch_station_index(&self.source, STATION_DATA_UNAVAILABLE).await?;
        let stations = stations_in_state(raw, state);
        if stations.is_empty() {
            return Err(DataError::not_found(format!(
                "No stations found in state {}.",
                state
            )));
        }
        info!(state, count = stations.len(), "fetched stations");
        Ok(stations)
    }
}

/// Pick out the stations of one state from raw index records.
///
/// Records missing an id, state or name are skipped. Exact duplicates are
/// collapsed and the result is sorted by name.
pub(crate) fn stations_in_state(raw: Vec<RawStation>, state: &str) -> Vec<Station> {
    let stations: BTreeSet<Station> = raw
        .into_iter()
        .filter(|r| r.state.as_deref().map(str::trim) == Some(state))
        .filter_map(|r| {
            let (Some(id), Some(st), Some(name)) = (r.station_id, r.state, r.station_name) else {
                debug!("skipping station record with missing fields");
                return None;
            };
            match Station::new(&id, &st, &name) {
                Ok(station) => Some(station),
                Err(e) => {
                    debug!(station_id = %id, error = %e, "skipping invalid station record");
                    None
                }
            }
        })
        .collect();

    stations.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testing::{FakeSource, raw_station};
    use crate::store::SqliteStationStore;

    fn catalog(source: &Arc<FakeSource>, store: &Arc<SqliteStationStore>) -> StationCatalog {
        StationCatalog::new(source.clone(), store.clone())
    }

    fn ny_source() -> Arc<FakeSource> {
        Arc::new(FakeSource::with_stations(vec![
            raw_station("KNYC", "NY", "Central Park"),
            raw_station("KALB", "NY", "Albany"),
            raw_station("KSFO", "CA", "San Francisco"),
        ]))
    }

    #[tokio::test]
    async fn miss_fetches_sorts_and_saves() {
        let source = ny_source();
        let store = Arc::new(SqliteStationStore::open_in_memory().unwrap());

        let stations = catalog(&source, &store).get_stations("NY").await.unwrap();

        let expected = vec![
            Station::new("KALB", "NY", "Albany").unwrap(),
            Station::new("KNYC", "NY", "Central Park").unwrap(),
        ];
        assert_eq!(stations, expected);
        assert_eq!(store.stations_by_state("NY").unwrap(), expected);
        assert!(store.stations_by_state("CA").unwrap().is_empty());
    }

    #[tokio::test]
    async fn second_call_is_cache_hit() {
        let source = ny_source();
        let store = Arc::new(SqliteStationStore::open_in_memory().unwrap());
        let catalog = catalog(&source, &store);

        let first = catalog.get_stations("NY").await.unwrap();
        let second = catalog.get_stations("NY").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(source.index_calls(), 1);
    }

    #[tokio::test]
    async fn unknown_state_is_not_found() {
        let source = ny_source();
        let store = Arc::new(SqliteStationStore::open_in_memory().unwrap());

        let err = catalog(&source, &store).get_stations("TX").await.unwrap_err();

        assert!(matches!(err, DataError::NotFound { .. }));
        assert!(store.distinct_states().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unreachable_source_leaves_store_untouched() {
        let source = ny_source();
        source.set_failing(true);
        let store = Arc::new(SqliteStationStore::open_in_memory().unwrap());

        let err = catalog(&source, &store).get_stations("NY").await.unwrap_err();

        assert!(matches!(err, DataError::DataAccess { .. }));
        assert_eq!(err.to_string(), STATION_DATA_UNAVAILABLE);
        assert!(store.distinct_states().unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_state_is_invalid_argument() {
        let source = ny_source();
        let store = Arc::new(SqliteStationStore::open_in_memory().unwrap());

        let err = catalog(&source, &store).get_stations("  ").await.unwrap_err();

        assert!(matches!(err, DataError::InvalidArgument { .. }));
        assert_eq!(source.index_calls(), 0);
    }

    #[test]
    fn stations_in_state_normalizes_records() {
        let mut incomplete = raw_station("KXXX", "NY", "Ghost");
        incomplete.station_name = None;

        let raw = vec![
            raw_station(" KNYC ", "NY ", "Central Park"),
            raw_station("KNYC", "NY", "Central Park"),
            incomplete,
            raw_station("KBUF", "NY", "Buffalo"),
            raw_station("KSFO", "CA", "San Francisco"),
        ];

        let stations = stations_in_state(raw, "NY");
        let ids: Vec<&str> = stations.iter().map(|s| s.station_id()).collect();
        assert_eq!(ids, vec!["KBUF", "KNYC"]);
    }

    #[test]
    fn stations_in_state_matches_case_sensitively() {
        let raw = vec![raw_station("KNYC", "NY", "Central Park")];
        assert!(stations_in_state(raw, "ny").is_empty());
    }
}
