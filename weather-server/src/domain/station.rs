//! Weather station values.

use std::cmp::Ordering;
use std::fmt;

use super::DomainError;

/// A weather-reporting location: its code, owning state and display name.
///
/// All three fields are non-empty by construction. Stations order by name
/// first; id and state only break ties so that the order agrees with
/// equality.
///
/// # Examples
///
/// ```
/// use weather_server::domain::Station;
///
/// let albany = Station::new("KALB", "NY", "Albany").unwrap();
/// let park = Station::new("KNYC", "NY", "Central Park").unwrap();
/// assert!(albany < park);
/// assert_eq!(albany.to_string(), "Albany (KALB)");
///
/// assert!(Station::new("", "NY", "Nowhere").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Station {
    station_id: String,
    state: String,
    station_name: String,
}

impl Station {
    /// Create a station, trimming surrounding whitespace from every field.
    pub fn new(
        station_id: impl AsRef<str>,
        state: impl AsRef<str>,
        station_name: impl AsRef<str>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            station_id: required("station_id", station_id.as_ref())?,
            state: required("state", state.as_ref())?,
            station_name: required("station_name", station_name.as_ref())?,
        })
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn station_name(&self) -> &str {
        &self.station_name
    }
}

fn required(field: &'static str, value: &str) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(value.to_string())
}

impl Ord for Station {
    fn cmp(&self, other: &Self) -> Ordering {
        self.station_name
            .cmp(&other.station_name)
            .then_with(|| self.station_id.cmp(&other.station_id))
            .then_with(|| self.state.cmp(&other.state))
    }
}

impl PartialOrd for Station {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Station({}, {}, {:?})",
            self.station_id, self.state, self.station_name
        )
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.station_name, self.station_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_fields() {
        let s = Station::new(" KNYC ", "NY\n", "  Central Park").unwrap();
        assert_eq!(s.station_id(), "KNYC");
        assert_eq!(s.state(), "NY");
        assert_eq!(s.station_name(), "Central Park");
    }

    #[test]
    fn new_rejects_blank_fields() {
        assert_eq!(
            Station::new("", "NY", "Albany"),
            Err(DomainError::MissingField("station_id"))
        );
        assert_eq!(
            Station::new("KALB", "  ", "Albany"),
            Err(DomainError::MissingField("state"))
        );
        assert_eq!(
            Station::new("KALB", "NY", ""),
            Err(DomainError::MissingField("station_name"))
        );
    }

    #[test]
    fn orders_by_name_first() {
        let a = Station::new("ZZZZ", "WY", "Albany").unwrap();
        let b = Station::new("AAAA", "AK", "Boston").unwrap();
        assert!(a < b);
    }

    #[test]
    fn name_comparison_is_case_sensitive() {
        let upper = Station::new("K1", "NY", "Zebra").unwrap();
        let lower = Station::new("K2", "NY", "apple").unwrap();
        // 'Z' sorts before 'a' in byte order
        assert!(upper < lower);
    }

    #[test]
    fn equal_names_fall_back_to_id() {
        let a = Station::new("KAAA", "NY", "Airport").unwrap();
        let b = Station::new("KBBB", "NY", "Airport").unwrap();
        assert!(a < b);
        assert_ne!(a, b);
    }

    #[test]
    fn display_shows_name_and_id() {
        let s = Station::new("KNYC", "NY", "Central Park").unwrap();
        assert_eq!(s.to_string(), "Central Park (KNYC)");
        assert_eq!(format!("{:?}", s), "Station(KNYC, NY, \"Central Park\")");
    }
}
