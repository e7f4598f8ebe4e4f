//! Backend cat records to located entities.
//!
//! The API serves cats as JSON objects carrying `xCoordinate` (longitude) and
//! `yCoordinate` (latitude) among many other fields:
//!
//! ```json
//! {"id": "a1b2", "name": "Misi", "xCoordinate": -3.70379, "yCoordinate": 40.416775}
//! ```
//!
//! A cat whose coordinates are missing, null, non-numeric or out of range is
//! kept, but without a location.

use crate::{Coordinate, GeoError, LocatedEntity, Result};
use serde_json::Value;
use tracing::{debug, trace};

/// Field holding the longitude.
pub const LONGITUDE_FIELD: &str = "xCoordinate";

/// Field holding the latitude.
pub const LATITUDE_FIELD: &str = "yCoordinate";

/// Extracts a valid coordinate from a cat record.
///
/// # Returns
/// * `Some(Coordinate)` if both fields are numbers forming a valid coordinate
/// * `None` otherwise
///
/// # Example
/// ```
/// use streetcats_geo::ingest::parse_record_coordinate;
/// use serde_json::json;
///
/// let cat = json!({"id": "a1", "xCoordinate": -3.70379, "yCoordinate": 40.416775});
/// let coord = parse_record_coordinate(&cat).unwrap();
/// assert!((coord.latitude - 40.416775).abs() < 1e-9);
///
/// let lost = json!({"id": "a2", "xCoordinate": null, "yCoordinate": 40.4});
/// assert!(parse_record_coordinate(&lost).is_none());
/// ```
pub fn parse_record_coordinate(record: &Value) -> Option<Coordinate> {
    let lng = record.get(LONGITUDE_FIELD)?.as_f64()?;
    let lat = record.get(LATITUDE_FIELD)?.as_f64()?;

    Coordinate::new(lat, lng).valid()
}

/// Converts one cat record into a located entity.
///
/// The id may be a string or a number; anything else is an error.
pub fn entity_from_record(record: &Value) -> Result<LocatedEntity<String>> {
    if !record.is_object() {
        return Err(GeoError::InvalidRecord(format!("Expected an object, got: {}", record)));
    }

    let id = match record.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => return Err(GeoError::InvalidRecord("Missing or non-scalar id".into())),
    };

    let coordinate = parse_record_coordinate(record);
    if coordinate.is_none() {
        trace!(%id, "Cat record has no usable coordinates");
    }

    Ok(LocatedEntity { id, coordinate })
}

/// Converts an array of cat records into located entities, keeping order.
pub fn entities_from_value(value: &Value) -> Result<Vec<LocatedEntity<String>>> {
    let records = value
        .as_array()
        .ok_or_else(|| GeoError::InvalidRecord("Expected an array of cats".into()))?;

    let entities = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            entity_from_record(record).map_err(|e| match e {
                GeoError::InvalidRecord(msg) => {
                    GeoError::InvalidRecord(format!("record {}: {}", index, msg))
                }
                other => other,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let unlocated = entities.iter().filter(|e| e.coordinate.is_none()).count();
    debug!(total = entities.len(), unlocated, "Ingested cat records");

    Ok(entities)
}

/// Parses a JSON array of cat records.
pub fn entities_from_json(json: &str) -> Result<Vec<LocatedEntity<String>>> {
    let value: Value = serde_json::from_str(json)?;
    entities_from_value(&value)
}
