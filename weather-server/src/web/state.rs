//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use crate::data::{DataError, WeatherData};
use crate::domain::StateSet;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Station and observation data access
    pub data: WeatherData,

    /// State list from the feed, once it has been fetched
    states: Arc<RwLock<Option<StateSet>>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(data: WeatherData) -> Self {
        Self {
            data,
            states: Arc::new(RwLock::new(None)),
        }
    }

    /// States to offer in the selector.
    ///
    /// The feed's list is fetched on first use and kept. Until the feed
    /// answers, the states already in the local store are offered instead.
    pub async fn state_choices(&self) -> Result<StateSet, DataError> {
        if let Some(states) = self.states.read().await.as_ref() {
            return Ok(states.clone());
        }

        match self.data.states().load_all_states().await {
            Ok(states) => {
                *self.states.write().await = Some(states.clone());
                Ok(states)
            }
            Err(remote) => {
                warn!(error = %remote, "state list unavailable from feed, using local states");
                self.data.states().known_states().map_err(|_| remote)
            }
        }
    }
}
