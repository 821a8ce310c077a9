//! Known states, from the feed or from the local store.

use std::sync::Arc;

use tracing::info;

use crate::domain::StateSet;
use crate::noaa::RemoteStationSource;
use crate::store::StationStore;

use super::error::{DataError, LOCAL_DATA_UNAVAILABLE, NO_LOCAL_STATE, STATION_DATA_UNAVAILABLE};
use super::task::fetch_station_index;

#[derive(Clone)]
pub struct StateDirectory {
    source: Arc<dyn RemoteStationSource>,
    store: Arc<dyn StationStore>,
}

impl StateDirectory {
    pub fn new(source: Arc<dyn RemoteStationSource>, store: Arc<dyn StationStore>) -> Self {
        Self { source, store }
    }

    /// Every state in the feed's station index.
    pub async fn load_all_states(&self) -> Result<StateSet, DataError> {
        let raw = fetch_station_index(&self.source, STATION_DATA_UNAVAILABLE).await?;
        let states: StateSet = raw.iter().filter_map(|r| r.state.as_deref()).collect();
        info!(count = states.len(), "loaded states from feed");
        Ok(states)
    }

    /// States with stations in the local store.
    ///
    /// Fails with `NotFound` if nothing has been fetched yet.
    pub fn known_states(&self) -> Result<StateSet, DataError> {
        let states: StateSet = self
            .store
            .distinct_states()
            .map_err(|e| DataError::data_access(LOCAL_DATA_UNAVAILABLE, e))?
            .into_iter()
            .collect();

        if states.is_empty() {
            return Err(DataError::not_found(NO_LOCAL_STATE));
        }
        Ok(states)
    }
}
