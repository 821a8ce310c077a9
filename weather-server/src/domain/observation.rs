//! Current weather observation for a single station.

use std::fmt;

/// Placeholder for a field the remote feed did not provide.
pub const NOT_PROVIDED: &str = "Not provided.";

/// A snapshot of one station's weather readings.
///
/// Every reading is kept as the display-ready string the feed supplied;
/// nothing is parsed or converted. Absent fields hold [`NOT_PROVIDED`], so
/// an observation can always be rendered.
///
/// [`CurrentObservation::empty`] is the "no observation yet" sentinel and
/// renders as an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentObservation {
    location: String,
    station_id: String,
    observation_time: String,
    observation_time_rfc822: String,
    weather: String,
    temperature: String,
    dewpoint: String,
    humidity: String,
    wind: String,
    pressure: String,
}

impl CurrentObservation {
    /// Start building an observation for the given location and station.
    pub fn builder(
        location: Option<String>,
        station_id: Option<String>,
    ) -> CurrentObservationBuilder {
        CurrentObservationBuilder {
            inner: Self {
                location: or_placeholder(location),
                station_id: or_placeholder(station_id),
                observation_time: NOT_PROVIDED.to_string(),
                observation_time_rfc822: NOT_PROVIDED.to_string(),
                weather: NOT_PROVIDED.to_string(),
                temperature: NOT_PROVIDED.to_string(),
                dewpoint: NOT_PROVIDED.to_string(),
                humidity: NOT_PROVIDED.to_string(),
                wind: NOT_PROVIDED.to_string(),
                pressure: NOT_PROVIDED.to_string(),
            },
        }
    }

    /// The "no observation yet" sentinel. Every field is blank.
    pub fn empty() -> Self {
        Self {
            location: String::new(),
            station_id: String::new(),
            observation_time: String::new(),
            observation_time_rfc822: String::new(),
            weather: String::new(),
            temperature: String::new(),
            dewpoint: String::new(),
            humidity: String::new(),
            wind: String::new(),
            pressure: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn observation_time(&self) -> &str {
        &self.observation_time
    }

    pub fn observation_time_rfc822(&self) -> &str {
        &self.observation_time_rfc822
    }

    /// Short text description of the conditions, e.g. "Fair".
    pub fn weather(&self) -> &str {
        &self.weather
    }

    pub fn temperature(&self) -> &str {
        &self.temperature
    }

    pub fn dewpoint(&self) -> &str {
        &self.dewpoint
    }

    pub fn humidity(&self) -> &str {
        &self.humidity
    }

    pub fn wind(&self) -> &str {
        &self.wind
    }

    pub fn pressure(&self) -> &str {
        &self.pressure
    }
}

impl Default for CurrentObservation {
    fn default() -> Self {
        Self::empty()
    }
}

fn or_placeholder(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_PROVIDED.to_string())
}

/// Builder for [`CurrentObservation`].
///
/// Setters take `Option`s straight from the raw record; `None` keeps the
/// placeholder.
#[derive(Debug, Clone)]
pub struct CurrentObservationBuilder {
    inner: CurrentObservation,
}

impl CurrentObservationBuilder {
    pub fn observation_time(mut self, value: Option<String>) -> Self {
        self.inner.observation_time = or_placeholder(value);
        self
    }

    pub fn observation_time_rfc822(mut self, value: Option<String>) -> Self {
        self.inner.observation_time_rfc822 = or_placeholder(value);
        self
    }

    pub fn weather(mut self, value: Option<String>) -> Self {
        self.inner.weather = or_placeholder(value);
        self
    }

    pub fn temperature(mut self, value: Option<String>) -> Self {
        self.inner.temperature = or_placeholder(value);
        self
    }

    pub fn dewpoint(mut self, value: Option<String>) -> Self {
        self.inner.dewpoint = or_placeholder(value);
        self
    }

    pub fn humidity(mut self, value: Option<String>) -> Self {
        self.inner.humidity = or_placeholder(value);
        self
    }

    pub fn wind(mut self, value: Option<String>) -> Self {
        self.inner.wind = or_placeholder(value);
        self
    }

    pub fn pressure(mut self, value: Option<String>) -> Self {
        self.inner.pressure = or_placeholder(value);
        self
    }

    pub fn build(self) -> CurrentObservation {
        self.inner
    }
}

impl fmt::Display for CurrentObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        writeln!(f, "{}({})", self.location, self.station_id)?;
        writeln!(f, "Last Update: {}", self.observation_time)?;
        writeln!(f, "             {}", self.observation_time_rfc822)?;
        writeln!(f, "Weather: {}", self.weather)?;
        writeln!(f, "Temperature: {}", self.temperature)?;
        writeln!(f, "Dewpoint: {}", self.dewpoint)?;
        writeln!(f, "Relative Humidity: {}%", self.humidity)?;
        writeln!(f, "Wind: {}", self.wind)?;
        writeln!(f, "MSL Pressure: {}", self.pressure)
    }
}
