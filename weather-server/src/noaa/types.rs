//! Raw records from the NOAA current-conditions feed.
//!
//! Fields mirror the XML element names. Everything is optional text; the
//! feed is inconsistent and blank elements are common. Validation happens
//! when records are turned into domain values.

use std::collections::HashMap;

/// One `<station>` entry of the station index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawStation {
    pub station_id: Option<String>,
    pub state: Option<String>,
    pub station_name: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub html_url: Option<String>,
    pub rss_url: Option<String>,
    pub xml_url: Option<String>,
}

impl RawStation {
    pub(crate) fn from_fields(mut fields: HashMap<String, String>) -> Self {
        Self {
            station_id: fields.remove("station_id"),
            state: fields.remove("state"),
            station_name: fields.remove("station_name"),
            latitude: fields.remove("latitude"),
            longitude: fields.remove("longitude"),
            html_url: fields.remove("html_url"),
            rss_url: fields.remove("rss_url"),
            xml_url: fields.remove("xml_url"),
        }
    }
}

/// The `<current_observation>` document for one station.
///
/// Only the fields the browser displays are kept; the feed carries dozens
/// more (numeric variants, heat index, visibility...) which are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawObservation {
    pub location: Option<String>,
    pub station_id: Option<String>,
    pub observation_time: Option<String>,
    pub observation_time_rfc822: Option<String>,
    pub weather: Option<String>,
    pub temperature_string: Option<String>,
    pub dewpoint_string: Option<String>,
    pub relative_humidity: Option<String>,
    pub wind_string: Option<String>,
    pub pressure_string: Option<String>,
}

impl RawObservation {
    pub(crate) fn from_fields(mut fields: HashMap<String, String>) -> Self {
        Self {
            location: fields.remove("location"),
            station_id: fields.remove("station_id"),
            observation_time: fields.remove("observation_time"),
            observation_time_rfc822: fields.remove("observation_time_rfc822"),
            weather: fields.remove("weather"),
            temperature_string: fields.remove("temperature_string"),
            dewpoint_string: fields.remove("dewpoint_string"),
            relative_humidity: fields.remove("relative_humidity"),
            wind_string: fields.remove("wind_string"),
            pressure_string: fields.remove("pressure_string"),
        }
    }
}
