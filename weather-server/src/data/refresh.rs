//! Rebuild the local store from the feed.

use std::sync::Arc;

use tracing::{info, warn};

use crate::store::StationStore;

use super::catalog::StationCatalog;
use super::error::{CLEAR_FAILED, DataError};
use super::states::StateDirectory;

/// Message shown when every state was refreshed.
pub const REFRESH_COMPLETE: &str = "All local data are refreshed.";

/// Outcome of [`RefreshCoordinator::refresh_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// States whose station lists were fetched and saved again
    pub refreshed: Vec<String>,
    /// States left empty, with the reason
    pub failed: Vec<(String, DataError)>,
}

impl RefreshReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Summary for the user.
    pub fn message(&self) -> String {
        if self.is_complete() {
            return REFRESH_COMPLETE.to_string();
        }
        let failed: Vec<&str> = self.failed.iter().map(|(s, _)| s.as_str()).collect();
        format!(
            "Refreshed {} of {} states; failed: {}.",
            self.refreshed.len(),
            self.refreshed.len() + self.failed.len(),
            failed.join(", ")
        )
    }
}

/// Clears the store and repopulates every previously known state.
///
/// Best effort: the clear is never rolled back. A state whose fetch fails
/// stays empty until it is requested again.
#[derive(Clone)]
pub struct RefreshCoordinator {
    catalog: StationCatalog,
    directory: StateDirectory,
    store: Arc<dyn StationStore>,
}

impl RefreshCoordinator {
    pub fn new(
        catalog: StationCatalog,
        directory: StateDirectory,
        store: Arc<dyn StationStore>,
    ) -> Self {
        Self {
            catalog,
            directory,
            store,
        }
    }

    /// Refresh every known state, one after another.
    ///
    /// Fails with `NotFound` if the store is empty, and with `DataAccess` if
    /// the store cannot be read or cleared. Per-state failures are reported
    /// in the [`RefreshReport`] instead.
    pub async fn refresh_all(&self) -> Result<RefreshReport, DataError> {
        let states = self.directory.known_states()?;
        info!(count = states.len(), "refreshing local station data");

        self.store
            .delete_all()
            .map_err(|e| DataError::data_access(CLEAR_FAILED, e))?;

        let mut report = RefreshReport::default();
        for state in states {
            // The store was just cleared, so every lookup here is a miss
            match self.catalog.get_stations(&state).await {
                Ok(stations) => {
                    info!(state = %state, count = stations.len(), "state refreshed");
                    report.refreshed.push(state);
                }
                Err(e) => {
                    warn!(state = %state, error = %e, "state refresh failed");
                    report.failed.push((state, e));
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testing::{FakeSource, raw_station};
    use crate::domain::Station;
    use crate::store::SqliteStationStore;

    struct Fixture {
        source: Arc<FakeSource>,
        store: Arc<SqliteStationStore>,
        catalog: StationCatalog,
        coordinator: RefreshCoordinator,
    }

    fn fixture() -> Fixture {
        let source = Arc::new(FakeSource::with_stations(vec![
            raw_station("KNYC", "NY", "Central Park"),
            raw_station("KALB", "NY", "Albany"),
            raw_station("KSFO", "CA", "San Francisco"),
            raw_station("KAUS", "TX", "Austin"),
        ]));
        let store = Arc::new(SqliteStationStore::open_in_memory().unwrap());
        let catalog = StationCatalog::new(source.clone(), store.clone());
        let directory = StateDirectory::new(source.clone(), store.clone());
        let coordinator = RefreshCoordinator::new(catalog.clone(), directory, store.clone());
        Fixture {
            source,
            store,
            catalog,
            coordinator,
        }
    }

    #[tokio::test]
    async fn empty_store_is_not_found() {
        let f = fixture();
        let err = f.coordinator.refresh_all().await.unwrap_err();
        assert!(matches!(err, DataError::NotFound { .. }));
        assert_eq!(f.source.index_calls(), 0);
    }

    #[tokio::test]
    async fn refresh_picks_up_new_remote_data() {
        let f = fixture();
        f.catalog.get_stations("NY").await.unwrap();
        f.catalog.get_stations("CA").await.unwrap();

        f.source.set_stations(vec![
            raw_station("KNYC", "NY", "Central Park"),
            raw_station("KJFK", "NY", "Kennedy Airport"),
            raw_station("KSFO", "CA", "San Francisco"),
        ]);

        let report = f.coordinator.refresh_all().await.unwrap();
        assert!(report.is_complete());
        assert_eq!(report.refreshed, vec!["CA", "NY"]);
        assert_eq!(report.message(), REFRESH_COMPLETE);

        let calls_after_refresh = f.source.index_calls();
        let ny = f.catalog.get_stations("NY").await.unwrap();
        assert_eq!(
            ny,
            vec![
                Station::new("KNYC", "NY", "Central Park").unwrap(),
                Station::new("KJFK", "NY", "Kennedy Airport").unwrap(),
            ]
        );
        // Served from the rebuilt store
        assert_eq!(f.source.index_calls(), calls_after_refresh);
    }

    #[tokio::test]
    async fn only_known_states_are_refreshed() {
        let f = fixture();
        f.catalog.get_stations("TX").await.unwrap();

        f.coordinator.refresh_all().await.unwrap();

        assert_eq!(f.store.distinct_states().unwrap(), vec!["TX"]);
    }

    #[tokio::test]
    async fn partial_failure_is_reported_not_rolled_back() {
        let f = fixture();
        f.catalog.get_stations("CA").await.unwrap();
        f.catalog.get_stations("NY").await.unwrap();
        f.catalog.get_stations("TX").await.unwrap();

        // CA refreshes, then the feed goes away
        f.source.fail_after(1);
        let report = f.coordinator.refresh_all().await.unwrap();

        assert_eq!(report.refreshed, vec!["CA"]);
        let failed: Vec<&str> = report.failed.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(failed, vec!["NY", "TX"]);
        assert_eq!(
            report.message(),
            "Refreshed 1 of 3 states; failed: NY, TX."
        );
        assert_eq!(f.store.distinct_states().unwrap(), vec!["CA"]);
    }

    #[tokio::test]
    async fn state_gone_from_feed_is_reported() {
        let f = fixture();
        f.catalog.get_stations("TX").await.unwrap();
        f.source.set_stations(vec![raw_station("KNYC", "NY", "Central Park")]);

        let report = f.coordinator.refresh_all().await.unwrap();

        assert!(!report.is_complete());
        assert!(matches!(report.failed[0].1, DataError::NotFound { .. }));
        assert!(f.store.distinct_states().unwrap().is_empty());
    }
}
