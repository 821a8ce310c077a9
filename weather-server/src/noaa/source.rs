//! The remote side of the station data layer.

use futures::future::BoxFuture;

use super::error::NoaaError;
use super::types::{RawObservation, RawStation};

/// Where raw station and observation records come from.
///
/// Implemented by [`NoaaClient`](super::NoaaClient) for the live feed and by
/// [`MockSource`](super::MockSource) for offline development. Futures are
/// boxed so the data layer can hold the source as a trait object.
pub trait RemoteStationSource: Send + Sync {
    /// Fetch every station in the index.
    fn fetch_station_index(&self) -> BoxFuture<'_, Result<Vec<RawStation>, NoaaError>>;

    /// Fetch one station's current observation.
    ///
    /// `Ok(None)` means the request succeeded but there was no observation
    /// for this station.
    fn fetch_observation<'a>(
        &'a self,
        station_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<RawObservation>, NoaaError>>;
}
