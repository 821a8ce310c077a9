//! Mock NOAA source for running without network access.
//!
//! Loads a station index and observation documents from XML files and
//! serves them as if they were live feed responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::sync::RwLock;

use super::client::validate_station_id;
use super::error::NoaaError;
use super::parse::{parse_observation, parse_station_index};
use super::source::RemoteStationSource;
use super::types::{RawObservation, RawStation};

/// File name of the station index inside the mock data directory.
const INDEX_FILE: &str = "index.xml";

#[derive(Debug, Default)]
struct MockData {
    stations: Vec<RawStation>,
    observations: HashMap<String, RawObservation>,
}

/// Mock source that serves data from XML files.
///
/// This is useful for development and testing without hitting the live feed.
#[derive(Clone)]
pub struct MockSource {
    data: Arc<RwLock<MockData>>,
}

impl MockSource {
    /// Create a new mock source by loading XML files from a directory.
    ///
    /// Expects `index.xml` plus one `{STATION_ID}.xml` per observation
    /// (e.g. `KNYC.xml`).
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, NoaaError> {
        let data = load(data_dir.as_ref())?;
        Ok(Self {
            data: Arc::new(RwLock::new(data)),
        })
    }

    /// List station ids with a mock observation.
    pub async fn available_observations(&self) -> Vec<String> {
        let data = self.data.read().await;
        let mut ids: Vec<String> = data.observations.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Reload mock data from disk (useful for development).
    pub async fn reload(&self, data_dir: impl AsRef<Path>) -> Result<(), NoaaError> {
        let fresh = load(data_dir.as_ref())?;
        let mut data = self.data.write().await;
        *data = fresh;
        Ok(())
    }
}

fn load(data_dir: &Path) -> Result<MockData, NoaaError> {
    let index_path = data_dir.join(INDEX_FILE);
    let index = std::fs::read(&index_path).map_err(|e| NoaaError::Mock {
        message: format!("Failed to read {:?}: {}", index_path, e),
    })?;
    let stations = parse_station_index(&index)?;

    let entries = std::fs::read_dir(data_dir).map_err(|e| NoaaError::Mock {
        message: format!("Failed to read mock data directory: {}", e),
    })?;

    let mut observations = HashMap::new();
    for entry in entries {
        let entry = entry.map_err(|e| NoaaError::Mock {
            message: format!("Failed to read directory entry: {}", e),
        })?;

        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("xml") {
            continue;
        }

        // Station id from filename (e.g., "KNYC.xml" -> "KNYC")
        let Some(station_id) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if station_id == "index" {
            continue;
        }

        let body = std::fs::read(&path).map_err(|e| NoaaError::Mock {
            message: format!("Failed to read {:?}: {}", path, e),
        })?;
        if let Some(observation) = parse_observation(&body)? {
            observations.insert(station_id.to_string(), observation);
        }
    }

    Ok(MockData {
        stations,
        observations,
    })
}

impl RemoteStationSource for MockSource {
    fn fetch_station_index(&self) -> BoxFuture<'_, Result<Vec<RawStation>, NoaaError>> {
        async move {
            let data = self.data.read().await;
            Ok::<_, NoaaError>(data.stations.clone())
        }
        .boxed()
    }

    fn fetch_observation<'a>(
        &'a self,
        station_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<RawObservation>, NoaaError>> {
        async move {
            validate_station_id(station_id)?;
            let data = self.data.read().await;
            Ok::<_, NoaaError>(data.observations.get(station_id).cloned())
        }
        .boxed()
    }
}
