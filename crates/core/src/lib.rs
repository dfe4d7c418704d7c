//! Core services for FleetZone
//!
//! This crate provides shared functionality used by the FleetZone binaries:
//!
//! - **Error handling**: Structured errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//! - **Sequence allocation**: Race-free daily counters for identifiers
//! - **Issuance**: Transaction and catch identifiers from vessel positions
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fleetzone_core::{sequence::DailySequence, transaction::TransactionIssuer};
//! use fleetzone_geo::IdentifierKind;
//!
//! let issuer = TransactionIssuer::new(DailySequence::new(), "PA");
//! let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//!
//! let issued = issuer
//!     .issue_transaction(IdentifierKind::Transaction, (10.775, 106.7), (10.8, 106.75), date)
//!     .unwrap();
//! assert_eq!(issued.identifier, "PA6161026001");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod sequence;
pub mod transaction;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::sequence::DailySequence;
    pub use crate::transaction::{IssuedCatch, IssuedTransaction, TransactionIssuer};
}
