//! Geospatial zone classification for FleetZone.
//!
//! This crate provides:
//! - Coastal region classification (codes A–D, `X` when outside)
//! - EC30 fishing-ground zone calculation
//! - Haversine distance between vessels
//! - Transaction and catch identifier formatting
//! - Parsing of loosely typed stored coordinates
//! - Batch vessel distances with optional parallelism
//! - WASM bindings for browser usage
//!
//! All classification and distance functions are pure: no I/O and no shared
//! state, so they can be called from any thread.
//!
//! # Example
//!
//! ```
//! use fleetzone_geo::{calculate_ec30_zone, classify_coastal_region, CoastalRegionCode, Coordinate};
//!
//! let catch_site = Coordinate::new(9.5, 104.8);
//! assert_eq!(classify_coastal_region(&catch_site).code, CoastalRegionCode::A);
//!
//! let zone = calculate_ec30_zone(&Coordinate::new(10.25, 106.5));
//! assert_eq!(zone.ec30_code, "D13");
//! ```

mod bounds;
mod ec30;
mod error;
mod haversine;
mod identifier;
mod record;
mod region;
pub mod fleet;

#[cfg(feature = "wasm")]
mod wasm;

pub use bounds::BoundingBox;
pub use ec30::{
    calculate_ec30_zone, calculate_zone_with_layout, Ec30Zone, FishingGround, GridLayout,
    AREA_PER_SUB_ZONE_KM2, FISHING_GROUNDS, OUTSIDE_EC30_CODE,
};
pub use error::{GeoError, GeoErrorCode, Result};
pub use fleet::{
    nearest_vessels, parse_fleet_json, vessel_distances, vessels_within_radius, VesselDistance,
    VesselLocation,
};
pub use haversine::{
    checked_distance_km, haversine_distance_km, km_to_meters, DistanceReading, EARTH_RADIUS_KM,
};
pub use identifier::{
    build_transaction_identifier, catch_identifier, format_date_component, IdentifierKind,
    TransactionIdentifier,
};
pub use record::{parse_record_coordinate, parse_wkt_point};
pub use region::{
    classify_coastal_region, CoastalRegion, CoastalRegionCode, RegionDefinition, COASTAL_REGIONS,
};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Fallback position used when no location fix is available (Ho Chi Minh City).
    pub const DEFAULT_FALLBACK: Coordinate = Coordinate {
        latitude: 10.775,
        longitude: 106.7,
    };

    /// Creates a new coordinate without validation.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a coordinate, rejecting non-finite or out-of-range values.
    ///
    /// This is the constructor to use where a geolocation reading or a stored
    /// record enters the system.
    ///
    /// # Example
    /// ```
    /// use fleetzone_geo::{Coordinate, GeoError};
    ///
    /// assert!(Coordinate::try_new(10.8, 106.75).is_ok());
    /// assert!(matches!(
    ///     Coordinate::try_new(f64::NAN, 106.75),
    ///     Err(GeoError::NonFiniteCoordinate { .. })
    /// ));
    /// ```
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeoError::NonFiniteCoordinate { latitude, longitude });
        }

        let coord = Self::new(latitude, longitude);
        if !coord.is_valid() {
            return Err(GeoError::InvalidCoordinate(format!(
                "({latitude}, {longitude}) is outside -90..=90 / -180..=180"
            )));
        }

        Ok(coord)
    }

    /// Returns true if the coordinate has finite, in-range values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = Coordinate::new(10.775, 106.7);
        assert_eq!(coord.latitude, 10.775);
        assert_eq!(coord.longitude, 106.7);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_try_new_rejects_nan() {
        let err = Coordinate::try_new(f64::NAN, 106.7).unwrap_err();
        assert_eq!(err.code(), GeoErrorCode::NonFiniteCoordinate);

        let err = Coordinate::try_new(10.0, f64::INFINITY).unwrap_err();
        assert_eq!(err.code(), GeoErrorCode::NonFiniteCoordinate);
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        let err = Coordinate::try_new(95.0, 106.7).unwrap_err();
        assert_eq!(err.code(), GeoErrorCode::InvalidCoordinate);
    }

    #[test]
    fn test_coordinate_from_tuple() {
        let coord: Coordinate = (10.8, 106.75).into();
        assert_eq!(coord.latitude, 10.8);
        assert_eq!(coord.longitude, 106.75);
    }

    #[test]
    fn test_default_fallback_is_valid() {
        assert!(Coordinate::DEFAULT_FALLBACK.is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(10.775, 106.7).to_string(), "10.77500, 106.70000");
    }
}
