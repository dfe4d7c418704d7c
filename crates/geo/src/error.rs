//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
///
/// Classification and distance functions never return these; they are
/// produced only at the boundary where raw input becomes a [`crate::Coordinate`].
#[derive(Debug, Error)]
pub enum GeoError {
    /// Invalid WKT format
    #[error("Invalid WKT format: {0}")]
    InvalidWkt(String),

    /// Coordinate outside the valid latitude/longitude range
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// NaN or infinite latitude/longitude
    #[error("Coordinate is not finite: ({latitude}, {longitude})")]
    NonFiniteCoordinate {
        /// Latitude as received
        latitude: f64,
        /// Longitude as received
        longitude: f64,
    },

    /// Fishing-ground reference data that breaks the grid preconditions
    #[error("Invalid fishing ground {name}: {reason}")]
    InvalidGround {
        /// Ground name
        name: String,
        /// What is wrong with it
        reason: String,
    },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for integration with fleetzone-core error handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Invalid WKT format
    InvalidWkt = 10001,
    /// Invalid coordinate values
    InvalidCoordinate = 10002,
    /// JSON parsing error
    JsonParsing = 10003,
    /// NaN or infinite coordinate
    NonFiniteCoordinate = 10004,
    /// Broken fishing-ground definition
    InvalidGround = 10005,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidWkt(_) => GeoErrorCode::InvalidWkt,
            GeoError::InvalidCoordinate(_) => GeoErrorCode::InvalidCoordinate,
            GeoError::NonFiniteCoordinate { .. } => GeoErrorCode::NonFiniteCoordinate,
            GeoError::InvalidGround { .. } => GeoErrorCode::InvalidGround,
            GeoError::JsonError(_) => GeoErrorCode::JsonParsing,
        }
    }
}
