//! WASM bindings for the geo crate.
//!
//! These bindings expose zone classification, distances and identifiers to
//! the browser application. Results that are records are returned as JSON
//! strings.

use crate::{
    build_transaction_identifier, calculate_ec30_zone, checked_distance_km, classify_coastal_region,
    parse_fleet_json, vessel_distances, Coordinate, GeoError,
};
use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

fn json_error(context: &str, e: serde_json::Error) -> JsValue {
    JsValue::from_str(&format!("{context}: {e}"))
}

fn geo_error(e: GeoError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Classify a position into a coastal region.
///
/// # Returns
/// JSON string `{"code", "name", "description"}`
#[wasm_bindgen]
pub fn coastal_region(lat: f64, lng: f64) -> Result<String, JsValue> {
    let region = classify_coastal_region(&Coordinate::new(lat, lng));
    serde_json::to_string(&region).map_err(|e| json_error("JSON serialize error", e))
}

/// Calculate the EC30 zone of a position.
///
/// # Returns
/// JSON string of the zone, camelCase keys
#[wasm_bindgen]
pub fn ec30_zone(lat: f64, lng: f64) -> Result<String, JsValue> {
    let zone = calculate_ec30_zone(&Coordinate::new(lat, lng));
    serde_json::to_string(&zone).map_err(|e| json_error("JSON serialize error", e))
}

/// Distance between two vessels in kilometers.
///
/// Returns `undefined` when either position is NaN or out of range.
#[wasm_bindgen]
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Option<f64> {
    checked_distance_km(&Coordinate::new(lat1, lng1), &Coordinate::new(lat2, lng2))
}

/// Build an identifier for an explicit calendar date.
///
/// # Arguments
/// * `month` - 1-based month
#[wasm_bindgen]
pub fn transaction_identifier(
    prefix: &str,
    component: f64,
    day: u32,
    month: u32,
    year: i32,
    daily_sequence: u32,
) -> Result<String, JsValue> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| JsValue::from_str(&format!("Invalid date: {year}-{month}-{day}")))?;
    Ok(build_transaction_identifier(prefix, component, date, daily_sequence))
}

/// Build an identifier for today's date in the browser's local time zone.
#[wasm_bindgen]
pub fn transaction_identifier_today(
    prefix: &str,
    component: f64,
    daily_sequence: u32,
) -> Result<String, JsValue> {
    let now = js_sys::Date::new_0();
    // getMonth() is 0-based
    transaction_identifier(
        prefix,
        component,
        now.get_date(),
        now.get_month() + 1,
        now.get_full_year() as i32,
        daily_sequence,
    )
}

/// Distances from the own vessel to a fleet.
///
/// # Arguments
/// * `vessels_json` - JSON array of `{"id", "location"}` records
///
/// # Returns
/// JSON array of `{"id", "distance_km", "region"}`
#[wasm_bindgen]
pub fn fleet_distances(lat: f64, lng: f64, vessels_json: &str) -> Result<String, JsValue> {
    let vessels = parse_fleet_json(vessels_json).map_err(geo_error)?;

    let results = vessel_distances(&Coordinate::new(lat, lng), &vessels);

    serde_json::to_string(&results).map_err(|e| json_error("JSON serialize error", e))
}
