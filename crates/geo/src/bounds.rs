//! Inclusive latitude/longitude bounding boxes.

use crate::Coordinate;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in degrees. All four edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub const fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self { min_lat, max_lat, min_lng, max_lng }
    }

    /// Inclusive containment. Any NaN component yields `false`.
    #[inline]
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.latitude >= self.min_lat
            && coord.latitude <= self.max_lat
            && coord.longitude >= self.min_lng
            && coord.longitude <= self.max_lng
    }

    /// Position of `coord` inside the box as `(lat_ratio, lng_ratio)`.
    ///
    /// Precondition: the box has positive extent on both axes.
    #[inline]
    pub fn ratios(&self, coord: &Coordinate) -> (f64, f64) {
        (
            (coord.latitude - self.min_lat) / (self.max_lat - self.min_lat),
            (coord.longitude - self.min_lng) / (self.max_lng - self.min_lng),
        )
    }

    /// True when both axes have positive, finite extent.
    pub fn has_positive_extent(&self) -> bool {
        let lat_span = self.max_lat - self.min_lat;
        let lng_span = self.max_lng - self.min_lng;
        lat_span.is_finite() && lng_span.is_finite() && lat_span > 0.0 && lng_span > 0.0
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    /// True when the two boxes share any point (edges included).
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_lat <= other.max_lat
            && other.min_lat <= self.max_lat
            && self.min_lng <= other.max_lng
            && other.min_lng <= self.max_lng
    }
}
