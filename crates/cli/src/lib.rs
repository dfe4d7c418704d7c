//! Terminal output helpers for FleetZone tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Formatting of distances, areas and zone classifications

#![warn(missing_docs)]

pub mod output;
