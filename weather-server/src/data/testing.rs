//! Test doubles for the data layer.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::noaa::{NoaaError, RawObservation, RawStation, RemoteStationSource};

pub fn raw_station(id: &str, state: &str, name: &str) -> RawStation {
    RawStation {
        station_id: Some(id.to_string()),
        state: Some(state.to_string()),
        station_name: Some(name.to_string()),
        ..Default::default()
    }
}

/// In-memory remote source that counts index fetches and can be told to
/// fail like an unreachable feed.
#[derive(Default)]
pub struct FakeSource {
    stations: Mutex<Vec<RawStation>>,
    observations: Mutex<HashMap<String, RawObservation>>,
    index_calls: AtomicUsize,
    observation_calls: AtomicUsize,
    failing: AtomicBool,
    // Index fetches after this many succeed again fail
    fail_after: Mutex<Option<usize>>,
}

impl FakeSource {
    pub fn with_stations(stations: Vec<RawStation>) -> Self {
        Self {
            stations: Mutex::new(stations),
            ..Default::default()
        }
    }

    pub fn set_stations(&self, stations: Vec<RawStation>) {
        *self.stations.lock().unwrap() = stations;
    }

    pub fn add_observation(&self, station_id: &str, observation: RawObservation) {
        self.observations
            .lock()
            .unwrap()
            .insert(station_id.to_string(), observation);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Let the next `n` index fetches succeed, then fail the rest.
    pub fn fail_after(&self, n: usize) {
        *self.fail_after.lock().unwrap() = Some(self.index_calls() + n);
    }

    pub fn index_calls(&self) -> usize {
        self.index_calls.load(Ordering::SeqCst)
    }

    pub fn observation_calls(&self) -> usize {
        self.observation_calls.load(Ordering::SeqCst)
    }

    fn unreachable() -> NoaaError {
        NoaaError::Api {
            status: 503,
            message: "Service Unavailable".to_string(),
        }
    }
}

impl RemoteStationSource for FakeSource {
    fn fetch_station_index(&self) -> BoxFuture<'_, Result<Vec<RawStation>, NoaaError>> {
        async move {
            let call = self.index_calls.fetch_add(1, Ordering::SeqCst);
            let past_limit = self
                .fail_after
                .lock()
                .unwrap()
                .is_some_and(|limit| call >= limit);
            if self.failing.load(Ordering::SeqCst) || past_limit {
                return Err(Self::unreachable());
            }
            Ok(self.stations.lock().unwrap().clone())
        }
        .boxed()
    }

    fn fetch_observation<'a>(
        &'a self,
        station_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<RawObservation>, NoaaError>> {
        async move {
            self.observation_calls.fetch_add(1, Ordering::SeqCst);
            crate::noaa::validate_station_id(station_id)?;
            if self.failing.load(Ordering::SeqCst) {
                return Err(Self::unreachable());
            }
            Ok(self.observations.lock().unwrap().get(station_id).cloned())
        }
        .boxed()
    }
}
