//! Batch distance calculations across a fleet, with optional parallelism.
//!
//! Used by the vessel tracking view: one origin vessel against every other
//! vessel's last reported position.

use crate::{
    checked_distance_km, classify_coastal_region, parse_record_coordinate, CoastalRegionCode,
    Coordinate, Result,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Input record: a vessel id and its stored position in any shape
/// accepted by [`parse_record_coordinate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VesselLocation {
    pub id: String,
    pub location: serde_json::Value,
}

/// Distance from the origin vessel to one other vessel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselDistance {
    pub id: String,
    /// `None` when the stored position is missing or invalid
    pub distance_km: Option<f64>,
    /// Coastal region of the other vessel (`X` when unknown)
    pub region: CoastalRegionCode,
}

/// Parse a JSON array of `{"id", "location"}` records.
///
/// Malformed JSON is a [`crate::GeoError::JsonError`]; a record whose
/// location is unusable still parses and later reports no distance.
pub fn parse_fleet_json(json: &str) -> Result<Vec<VesselLocation>> {
    Ok(serde_json::from_str(json)?)
}

/// Calculate the distance from `origin` to every vessel.
///
/// Output order matches input order.
///
/// # Example
/// ```
/// use fleetzone_geo::{vessel_distances, Coordinate, VesselLocation};
/// use serde_json::json;
///
/// let fleet = vec![
///     VesselLocation { id: "KG-90123".into(), location: json!({"lat": 10.80, "lng": 106.75}) },
///     VesselLocation { id: "BT-44501".into(), location: json!(null) },
/// ];
///
/// let results = vessel_distances(&Coordinate::new(10.775, 106.7), &fleet);
/// assert_eq!(results.len(), 2);
/// assert!(results[1].distance_km.is_none());
/// ```
pub fn vessel_distances(origin: &Coordinate, vessels: &[VesselLocation]) -> Vec<VesselDistance> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        vessels
            .par_iter()
            .map(|vessel| single_distance(origin, vessel))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        vessels
            .iter()
            .map(|vessel| single_distance(origin, vessel))
            .collect()
    }
}

/// Distances sorted closest first; vessels without a position go last.
///
/// # Arguments
/// * `origin` - Own vessel position
/// * `vessels` - Other vessels
/// * `max_results` - Maximum number of results to return (None for all)
pub fn nearest_vessels(
    origin: &Coordinate,
    vessels: &[VesselLocation],
    max_results: Option<usize>,
) -> Vec<VesselDistance> {
    let mut results = vessel_distances(origin, vessels);
    results.sort_by(compare_distance);

    if let Some(max) = max_results {
        results.truncate(max);
    }

    results
}

/// Vessels within `radius_km` of the origin, closest first.
pub fn vessels_within_radius(
    origin: &Coordinate,
    vessels: &[VesselLocation],
    radius_km: f64,
) -> Vec<VesselDistance> {
    let mut results = vessel_distances(origin, vessels);
    results.retain(|r| r.distance_km.is_some_and(|d| d <= radius_km));
    results.sort_by(compare_distance);
    results
}

fn compare_distance(a: &VesselDistance, b: &VesselDistance) -> Ordering {
    match (a.distance_km, b.distance_km) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[inline]
fn single_distance(origin: &Coordinate, vessel: &VesselLocation) -> VesselDistance {
    let position = parse_record_coordinate(&vessel.location);

    VesselDistance {
        id: vessel.id.clone(),
        distance_km: position.and_then(|p| checked_distance_km(origin, &p)),
        region: position.map_or(CoastalRegionCode::X, |p| classify_coastal_region(&p).code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ORIGIN: Coordinate = Coordinate { latitude: 10.775, longitude: 106.700 };

    fn create_test_fleet() -> Vec<VesselLocation> {
        vec![
            // ~6 km away
            VesselLocation {
                id: "near".into(),
                location: json!({"latitude": 10.80, "longitude": 106.75}),
            },
            // Vung Tau, ~63 km
            VesselLocation {
                id: "vung-tau".into(),
                location: json!("POINT(107.084 10.346)"),
            },
            // Rach Gia, ~196 km
            VesselLocation {
                id: "rach-gia".into(),
                location: json!({"coordinates": [105.08, 10.01]}),
            },
            // No fix
            VesselLocation {
                id: "unknown".into(),
                location: json!({"lat": null, "lng": null}),
            },
        ]
    }

    #[test]
    fn test_batch_distances() {
        let fleet = create_test_fleet();
        let results = vessel_distances(&ORIGIN, &fleet);

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].id, "near");
        let near = results[0].distance_km.unwrap();
        assert!(near > 5.0 && near < 7.0, "near: {}", near);
        assert_eq!(results[0].region, CoastalRegionCode::B);

        let unknown = results.iter().find(|r| r.id == "unknown").unwrap();
        assert!(unknown.distance_km.is_none());
        assert_eq!(unknown.region, CoastalRegionCode::X);
    }

    #[test]
    fn test_nearest_sorted_unavailable_last() {
        let fleet = create_test_fleet();
        let results = nearest_vessels(&ORIGIN, &fleet, None);

        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["near", "vung-tau", "rach-gia", "unknown"]);
    }

    #[test]
    fn test_max_results() {
        let fleet = create_test_fleet();
        let results = nearest_vessels(&ORIGIN, &fleet, Some(2));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_parse_fleet_json() {
        let fleet = parse_fleet_json(r#"[{"id": "KG-90123", "location": "POINT(106.75 10.8)"}]"#)
            .unwrap();
        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet[0].id, "KG-90123");

        let err = parse_fleet_json(r#"{"id": "KG-90123"}"#).unwrap_err();
        assert_eq!(err.code(), crate::GeoErrorCode::JsonParsing);
    }

    #[test]
    fn test_radius_filter() {
        let fleet = create_test_fleet();
        let results = vessels_within_radius(&ORIGIN, &fleet, 100.0);

        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["near", "vung-tau"]);
    }
}
