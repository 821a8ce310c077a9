//! Local station store.
//!
//! Persists station rows between runs so station lists for a state only
//! have to be fetched from the feed once. The store knows nothing about
//! cache policy; [`crate::data::StationCatalog`] decides when to read,
//! write and clear it.

mod error;
mod schema;
mod sqlite;

pub use error::StoreError;
pub use schema::create_schema;
pub use sqlite::SqliteStationStore;

use crate::domain::Station;

/// Storage primitives the data layer needs.
///
/// Calls are blocking and each is a single statement (or a single
/// transaction, for [`save_stations`](Self::save_stations)).
pub trait StationStore: Send + Sync {
    /// All stations recorded for `state`, in insertion order.
    fn stations_by_state(&self, state: &str) -> Result<Vec<Station>, StoreError>;

    /// Insert every station, or none of them.
    fn save_stations(&self, stations: &[Station]) -> Result<(), StoreError>;

    /// Remove every station row.
    fn delete_all(&self) -> Result<(), StoreError>;

    /// Every state with at least one row, ascending.
    fn distinct_states(&self) -> Result<Vec<String>, StoreError>;
}
