//! XML parsing for the station index and observation documents.
//!
//! Both documents are flat: a record element whose direct children each
//! hold one text value. We stream the document with `xml-rs` and collect
//! each record's children into a field map.

use std::collections::HashMap;

use xml::reader::{EventReader, XmlEvent};

use super::error::NoaaError;
use super::types::{RawObservation, RawStation};

/// Parse the station index (`index.xml`) into raw station records.
pub fn parse_station_index(body: &[u8]) -> Result<Vec<RawStation>, NoaaError> {
    let records = parse_records(body, "station")?;
    Ok(records.into_iter().map(RawStation::from_fields).collect())
}

/// Parse a single observation document.
///
/// Returns `None` if the document has no `current_observation` element.
pub fn parse_observation(body: &[u8]) -> Result<Option<RawObservation>, NoaaError> {
    let records = parse_records(body, "current_observation")?;
    Ok(records.into_iter().next().map(RawObservation::from_fields))
}

/// Collect every `record` element's direct children as name → trimmed text.
///
/// Blank children are left out. Grandchildren (e.g. the `image` block) are
/// skipped.
fn parse_records(body: &[u8], record: &str) -> Result<Vec<HashMap<String, String>>, NoaaError> {
    let mut records = Vec::new();
    let mut current: Option<HashMap<String, String>> = None;
    // Nesting depth below the open record element
    let mut depth = 0usize;
    let mut text = String::new();

    for event in EventReader::new(body) {
        let event = event.map_err(|e| NoaaError::Xml {
            message: e.to_string(),
        })?;

        match event {
            XmlEvent::StartElement { name, .. } => {
                if current.is_some() {
                    depth += 1;
                    text.clear();
                } else if name.local_name == record {
                    current = Some(HashMap::new());
                    depth = 0;
                }
            }
            XmlEvent::Characters(s) | XmlEvent::CData(s) => {
                if current.is_some() && depth == 1 {
                    text.push_str(&s);
                }
            }
            XmlEvent::EndElement { name } => match current.take() {
                Some(fields) if depth == 0 => records.push(fields),
                Some(mut fields) => {
                    if depth == 1 {
                        let value = text.trim();
                        if !value.is_empty() {
                            fields.insert(name.local_name, value.to_string());
                        }
                        text.clear();
                    }
                    depth -= 1;
                    current = Some(fields);
                }
                None => {}
            },
            _ => {}
        }
    }

    Ok(records)
}
