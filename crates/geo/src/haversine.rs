//! Haversine distance between vessels.
//!
//! Kilometres are the only unit computed here. Call sites that display or
//! store metres convert at the boundary with [`km_to_meters`].

use crate::Coordinate;
use std::fmt;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// Symmetric, zero for identical points. NaN in either input propagates to
/// the result; use [`checked_distance_km`] for unvalidated input.
///
/// # Arguments
/// * `from` - Own vessel position
/// * `to` - Other vessel position
///
/// # Example
/// ```
/// use fleetzone_geo::{haversine_distance_km, Coordinate};
///
/// let a = Coordinate::new(10.775, 106.700);
/// let b = Coordinate::new(10.800, 106.750);
///
/// let distance = haversine_distance_km(&a, &b);
/// assert!((distance - 6.1).abs() < 0.2);
/// ```
#[inline]
pub fn haversine_distance_km(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    // Rounding can push `a` just past 1.0 for near-antipodal points
    let a = ((d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance in kilometers, or `None` when either coordinate is non-finite
/// or out of range.
///
/// ```
/// use fleetzone_geo::{checked_distance_km, Coordinate};
///
/// let here = Coordinate::new(10.775, 106.7);
/// assert!(checked_distance_km(&here, &Coordinate::new(f64::NAN, 106.7)).is_none());
/// assert_eq!(checked_distance_km(&here, &here), Some(0.0));
/// ```
pub fn checked_distance_km(from: &Coordinate, to: &Coordinate) -> Option<f64> {
    if !from.is_valid() || !to.is_valid() {
        tracing::debug!(?from, ?to, "distance unavailable: invalid coordinate");
        return None;
    }
    Some(haversine_distance_km(from, to))
}

/// Converts kilometers to meters.
#[inline]
pub fn km_to_meters(km: f64) -> f64 {
    km * 1000.0
}

/// A distance as shown to the user: either a value or "not available".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceReading {
    Km(f64),
    Unavailable,
}

impl DistanceReading {
    pub fn between(from: &Coordinate, to: &Coordinate) -> Self {
        checked_distance_km(from, to).map_or(DistanceReading::Unavailable, DistanceReading::Km)
    }

    pub fn km(&self) -> Option<f64> {
        match *self {
            DistanceReading::Km(km) => Some(km),
            DistanceReading::Unavailable => None,
        }
    }
}

impl fmt::Display for DistanceReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceReading::Km(km) => write!(f, "{km:.1} km"),
            DistanceReading::Unavailable => f.write_str("N/A"),
        }
    }
}
