//! Station and observation data access.
//!
//! This is where the cache policy lives:
//!
//! - [`StationCatalog`] serves station lists per state from the local
//!   store, fetching and saving them from the feed on a miss
//! - [`ObservationFetcher`] always asks the feed for current conditions
//! - [`StateDirectory`] lists states, either from the feed or from what the
//!   store has seen
//! - [`RefreshCoordinator`] clears the store and refetches every known
//!   state
//!
//! Remote calls run as separate tokio tasks (see [`dispatch`]). All errors
//! leave this module as a [`DataError`].

mod catalog;
mod error;
mod observation;
mod refresh;
mod states;
mod task;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::StationCatalog;
pub use error::*;
pub use observation::ObservationFetcher;
pub use refresh::{REFRESH_COMPLETE, RefreshCoordinator, RefreshReport};
pub use states::StateDirectory;
pub use task::{FetchTask, dispatch};

use std::sync::Arc;

use crate::noaa::RemoteStationSource;
use crate::store::StationStore;

/// The remote source and local store shared by every data component.
///
/// Cheap to clone; components built from it share the same collaborators.
#[derive(Clone)]
pub struct WeatherData {
    source: Arc<dyn RemoteStationSource>,
    store: Arc<dyn StationStore>,
}

impl WeatherData {
    pub fn new(source: Arc<dyn RemoteStationSource>, store: Arc<dyn StationStore>) -> Self {
        Self { source, store }
    }

    pub fn catalog(&self) -> StationCatalog {
        StationCatalog::new(self.source.clone(), self.store.clone())
    }

    pub fn observations(&self) -> ObservationFetcher {
        ObservationFetcher::new(self.source.clone())
    }

    pub fn states(&self) -> StateDirectory {
        StateDirectory::new(self.source.clone(), self.store.clone())
    }

    pub fn refresher(&self) -> RefreshCoordinator {
        RefreshCoordinator::new(self.catalog(), self.states(), self.store.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testing::{FakeSource, raw_station};
    use crate::store::SqliteStationStore;

    #[tokio::test]
    async fn components_share_collaborators() {
        let source = Arc::new(FakeSource::with_stations(vec![
            raw_station("KNYC", "NY", "Central Park"),
            raw_station("KALB", "NY", "Albany"),
        ]));
        let store = Arc::new(SqliteStationStore::open_in_memory().unwrap());
        let data = WeatherData::new(source.clone(), store.clone());

        data.catalog().get_stations("NY").await.unwrap();
        assert_eq!(data.states().known_states().unwrap().as_slice(), ["NY"]);

        data.refresher().refresh_all().await.unwrap();
        data.catalog().get_stations("NY").await.unwrap();

        // Initial miss plus one refetch during refresh
        assert_eq!(source.index_calls(), 2);
        assert_eq!(store.stations_by_state("NY").unwrap().len(), 2);
    }
}
