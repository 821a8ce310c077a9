//! Data layer error types.
//!
//! Every failure inside the data layer leaves it as one of these kinds.
//! `Display` only ever shows a short user-safe message; the diagnostic
//! detail of a [`DataError::DataAccess`] is logged where it is created and
//! kept in [`DataError::detail`] for callers that want to log it again.

use std::fmt;

use tracing::error;

use crate::noaa::NoaaError;

pub const STATION_DATA_UNAVAILABLE: &str = "Cannot access station data. Contact support.";
pub const OBSERVATION_UNAVAILABLE: &str = "Cannot connect to weather conditions. Contact support.";
pub const SAVE_FAILED: &str = "Cannot save stations. Contact support.";
pub const CLEAR_FAILED: &str = "Cannot delete all data. Contact support.";
pub const LOCAL_DATA_UNAVAILABLE: &str = "Cannot connect to the local data. Contact support.";
pub const NO_LOCAL_STATE: &str = "There is no local state.";
pub const INVALID_STATION_ID: &str = "Invalid station ID.";

/// A failure surfaced by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    /// The caller supplied an identifier that cannot be used
    #[error("{message}")]
    InvalidArgument { message: String },

    /// The query was well-formed but there is no matching data
    #[error("{message}")]
    NotFound { message: String },

    /// Transport, parse or storage fault
    #[error("{message}")]
    DataAccess {
        message: &'static str,
        detail: String,
    },

    /// The background fetch was aborted before it finished
    #[error("The request was cancelled.")]
    Cancelled,
}

impl DataError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        DataError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        DataError::NotFound {
            message: message.into(),
        }
    }

    /// Build a [`DataError::DataAccess`], logging the diagnostic detail.
    pub fn data_access(message: &'static str, detail: impl fmt::Display) -> Self {
        let detail = detail.to_string();
        error!(%detail, "{}", message);
        DataError::DataAccess { message, detail }
    }

    /// Translate a feed error. `message` is what the user sees if the
    /// failure is a fault rather than a bad station id.
    pub fn from_remote(message: &'static str, err: NoaaError) -> Self {
        match err {
            NoaaError::InvalidStationId(id) => {
                error!(station_id = %id, "{}", INVALID_STATION_ID);
                DataError::invalid_argument(INVALID_STATION_ID)
            }
            other => DataError::data_access(message, other),
        }
    }

    /// Diagnostic detail for logs. Never shown to users.
    pub fn detail(&self) -> Option<&str> {
        match self {
            DataError::DataAccess { detail, .. } => Some(detail),
            _ => None,
        }
    }
}
