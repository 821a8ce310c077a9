//! NOAA current-conditions feed.
//!
//! The National Weather Service publishes an XML index of every reporting
//! station and one XML document per station with its latest observation:
//!
//! - `index.xml` lists `station_id`, `state`, `station_name`, coordinates
//!   and resource URLs for each station
//! - `{station_id}.xml` holds the current observation as display-ready
//!   strings (`temperature_string`, `wind_string`, ...)
//!
//! This module fetches and parses both into raw records. It does not
//! validate or cache anything; that is the job of [`crate::data`].

mod client;
mod error;
mod mock;
mod parse;
mod source;
mod types;

pub use client::{NoaaClient, NoaaConfig};
pub(crate) use client::validate_station_id;
pub use error::NoaaError;
pub use mock::MockSource;
pub use parse::{parse_observation, parse_station_index};
pub use source::RemoteStationSource;
pub use types::{RawObservation, RawStation};
