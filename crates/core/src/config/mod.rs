//! Configuration loading and schema definitions
//!
//! Settings shared by the FleetZone binaries: fallback location, identifier
//! prefixes, tracking radius and logging.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
