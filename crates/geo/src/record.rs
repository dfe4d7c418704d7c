//! Coordinate extraction from stored records.
//!
//! Vessel and catch rows store positions in several loose shapes. They are
//! validated here once, so the rest of the crate only sees [`Coordinate`]s:
//! - `{"latitude": 10.8, "longitude": 106.75}` (numbers or numeric strings)
//! - `{"lat": "10.8", "lng": "106.75"}`
//! - GeoJSON: `{"type": "Point", "coordinates": [lng, lat]}`
//! - WKT: `POINT(lng lat)`

use crate::{Coordinate, GeoError, Result};
use serde_json::Value;

/// Parse a coordinate from a stored record value.
///
/// # Returns
/// * `Some(Coordinate)` if a finite, in-range position was found
/// * `None` for null, missing, non-numeric, NaN or out-of-range fields
///
/// # Example
/// ```
/// use fleetzone_geo::parse_record_coordinate;
/// use serde_json::json;
///
/// let row = json!({"latitude": "10.80", "longitude": 106.75});
/// let coord = parse_record_coordinate(&row).unwrap();
/// assert!((coord.latitude - 10.80).abs() < 1e-9);
///
/// assert!(parse_record_coordinate(&json!({"lat": "NaN", "lng": 106.75})).is_none());
/// assert!(parse_record_coordinate(&json!("POINT(106.75 10.80)")).is_some());
/// ```
pub fn parse_record_coordinate(value: &Value) -> Option<Coordinate> {
    let coord = match value {
        Value::Object(_) => parse_object(value)?,
        Value::String(wkt) => parse_wkt_point(wkt).ok()?,
        _ => return None,
    };

    coord.is_valid().then_some(coord)
}

fn parse_object(value: &Value) -> Option<Coordinate> {
    let named = [("latitude", "longitude"), ("lat", "lng"), ("lat", "lon")];
    for (lat_key, lng_key) in named {
        if let (Some(lat), Some(lng)) = (number_field(value, lat_key), number_field(value, lng_key)) {
            return Some(Coordinate::new(lat, lng));
        }
    }

    // GeoJSON order is [lng, lat]
    let coords = value.get("coordinates")?.as_array()?;
    if coords.len() >= 2 {
        let lng = as_number(&coords[0])?;
        let lat = as_number(&coords[1])?;
        return Some(Coordinate::new(lat, lng));
    }

    None
}

fn number_field(value: &Value, key: &str) -> Option<f64> {
    as_number(value.get(key)?)
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parse a WKT POINT string.
///
/// Format: `POINT(longitude latitude)`. The result is not range-checked.
pub fn parse_wkt_point(wkt: &str) -> Result<Coordinate> {
    let wkt = wkt.trim();

    if !wkt.starts_with("POINT(") && !wkt.starts_with("POINT (") {
        return Err(GeoError::InvalidWkt(format!("Expected POINT, got: {}", wkt)));
    }

    let start = wkt.find('(').ok_or_else(|| GeoError::InvalidWkt("Missing '('".into()))?;
    let end = wkt.find(')').ok_or_else(|| GeoError::InvalidWkt("Missing ')'".into()))?;

    if start >= end {
        return Err(GeoError::InvalidWkt("Invalid parentheses".into()));
    }

    let parts: Vec<&str> = wkt[start + 1..end].split_whitespace().collect();
    let [lng, lat] = parts.as_slice() else {
        return Err(GeoError::InvalidWkt(format!(
            "Expected 2 coordinates, got {}",
            parts.len()
        )));
    };

    let lng: f64 = lng
        .parse()
        .map_err(|_| GeoError::InvalidWkt(format!("Invalid longitude: {}", lng)))?;
    let lat: f64 = lat
        .parse()
        .map_err(|_| GeoError::InvalidWkt(format!("Invalid latitude: {}", lat)))?;

    Ok(Coordinate::new(lat, lng))
}
