//! Configuration schema definitions

use crate::error::{Error, Result};
use fleetzone_geo::Coordinate;
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub location: LocationConfig,

    #[serde(default)]
    pub identifiers: IdentifierConfig,

    #[serde(default)]
    pub tracking: TrackingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigSchema {
    /// Check values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<()> {
        Coordinate::try_new(
            self.location.fallback_latitude,
            self.location.fallback_longitude,
        )
        .map_err(|e| Error::config_invalid(format!("location.fallback: {e}")))?;

        let prefix = &self.identifiers.transaction_prefix;
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::config_invalid(format!(
                "identifiers.transaction_prefix must be non-empty ASCII letters, got {prefix:?}"
            )));
        }

        let radius = self.tracking.nearby_radius_km;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::config_invalid(format!(
                "tracking.nearby_radius_km must be positive, got {radius}"
            )));
        }

        Ok(())
    }
}

/// Location fallback used when no fix is available
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_fallback_latitude")]
    pub fallback_latitude: f64,

    #[serde(default = "default_fallback_longitude")]
    pub fallback_longitude: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            fallback_latitude: default_fallback_latitude(),
            fallback_longitude: default_fallback_longitude(),
        }
    }
}

impl LocationConfig {
    /// The fallback as a coordinate
    pub fn fallback(&self) -> Coordinate {
        Coordinate::new(self.fallback_latitude, self.fallback_longitude)
    }
}

fn default_fallback_latitude() -> f64 {
    Coordinate::DEFAULT_FALLBACK.latitude
}

fn default_fallback_longitude() -> f64 {
    Coordinate::DEFAULT_FALLBACK.longitude
}

/// Identifier formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifierConfig {
    /// Prefix for vessel-to-vessel transactions
    #[serde(default = "default_transaction_prefix")]
    pub transaction_prefix: String,
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self {
            transaction_prefix: default_transaction_prefix(),
        }
    }
}

fn default_transaction_prefix() -> String {
    "PA".to_string()
}

/// Vessel tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Radius for the "nearby vessels" view
    #[serde(default = "default_nearby_radius_km")]
    pub nearby_radius_km: f64,

    /// Cap on vessels listed; 0 lists all
    #[serde(default)]
    pub max_results: usize,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            nearby_radius_km: default_nearby_radius_km(),
            max_results: 0,
        }
    }
}

fn default_nearby_radius_km() -> f64 {
    50.0
}

/// Logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            show_target: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
