//! Human-readable transaction and catch identifiers.
//!
//! An identifier is `prefix + component + ddMMyy + sequence`, e.g.
//! `PA6161026001` for the first transaction on 16 Oct 2026 between vessels
//! about 6 km apart.
//!
//! The daily sequence is supplied by the caller. These strings are for
//! display and scanning only: two concurrent submissions that derive the
//! same sequence produce the same identifier, so storage must key records
//! by a surrogate id and never by this string.

use crate::Ec30Zone;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Known identifier prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Generic vessel-to-vessel transaction
    Transaction,
    /// "2Share" load between two vessels
    TwoShare,
    /// "4Share" load between vessels
    FourShare,
    /// Catch record, numbered by EC30 zone
    Catch,
}

impl IdentifierKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            IdentifierKind::Transaction => "PA",
            IdentifierKind::TwoShare => "SH",
            IdentifierKind::FourShare => "FS",
            IdentifierKind::Catch => "CA",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Structured form of an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionIdentifier {
    pub prefix: String,
    pub component: u64,
    pub date: NaiveDate,
    pub sequence: u32,
}

impl TransactionIdentifier {
    /// Builds the identifier parts. `component` is rounded and floored at
    /// zero; NaN counts as zero.
    pub fn new(prefix: impl Into<String>, component: f64, date: NaiveDate, sequence: u32) -> Self {
        Self {
            prefix: prefix.into(),
            component: normalize_component(component),
            date,
            sequence,
        }
    }
}

impl fmt::Display for TransactionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{:03}",
            self.prefix,
            self.component,
            format_date_component(self.date),
            self.sequence
        )
    }
}

/// Formats a date as `ddMMyy`.
pub fn format_date_component(date: NaiveDate) -> String {
    date.format("%d%m%y").to_string()
}

fn normalize_component(value: f64) -> u64 {
    if value.is_nan() {
        return 0;
    }
    // saturating float-to-int cast caps +inf at u64::MAX
    value.round().max(0.0) as u64
}

/// Builds a transaction identifier string.
///
/// # Arguments
/// * `prefix` - Short alphabetic prefix, see [`IdentifierKind::prefix`]
/// * `component` - Distance in km or zone number; rounded, floored at 0
/// * `date` - Calendar date in the caller's local time zone
/// * `daily_sequence` - Same-type records created that day plus one;
///   zero-padded to three digits
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use fleetzone_geo::build_transaction_identifier;
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
/// assert_eq!(build_transaction_identifier("PA", 5.9, date, 1), "PA6161026001");
/// assert_eq!(build_transaction_identifier("PA", -3.7, date, 12), "PA0161026012");
/// ```
pub fn build_transaction_identifier(
    prefix: &str,
    component: f64,
    date: NaiveDate,
    daily_sequence: u32,
) -> String {
    TransactionIdentifier::new(prefix, component, date, daily_sequence).to_string()
}

/// Builds a catch-record identifier from an EC30 zone; the component is
/// the zone number (0 outside every fishing ground).
pub fn catch_identifier(zone: &Ec30Zone, date: NaiveDate, daily_sequence: u32) -> String {
    build_transaction_identifier(
        IdentifierKind::Catch.prefix(),
        f64::from(zone.zone_number),
        date,
        daily_sequence,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{calculate_ec30_zone, Coordinate};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_basic_identifier() {
        assert_eq!(build_transaction_identifier("PA", 6.0, date(), 1), "PA6161026001");
    }

    #[test]
    fn test_sequence_changes_only_suffix() {
        let first = build_transaction_identifier("PA", 12.4, date(), 1);
        let second = build_transaction_identifier("PA", 12.4, date(), 2);
        assert!(first.ends_with("001"));
        assert!(second.ends_with("002"));
        assert_eq!(&first[..first.len() - 3], &second[..second.len() - 3]);
    }

    #[test]
    fn test_negative_component_floored() {
        assert_eq!(
            build_transaction_identifier("PA", -3.7, date(), 1),
            build_transaction_identifier("PA", 0.0, date(), 1)
        );
    }

    #[test]
    fn test_nan_component_is_zero() {
        assert_eq!(build_transaction_identifier("PA", f64::NAN, date(), 1), "PA0161026001");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(build_transaction_identifier("PA", 2.5, date(), 1), "PA3161026001");
        assert_eq!(build_transaction_identifier("PA", 2.49, date(), 1), "PA2161026001");
    }

    #[test]
    fn test_large_sequence_not_truncated() {
        assert_eq!(build_transaction_identifier("PA", 1.0, date(), 1234), "PA11610261234");
    }

    #[test]
    fn test_date_component_zero_padded() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_date_component(d), "070325");
    }

    #[test]
    fn test_catch_identifier_uses_zone_number() {
        let zone = calculate_ec30_zone(&Coordinate::new(10.25, 106.5));
        assert_eq!(catch_identifier(&zone, date(), 3), "CA13161026003");
    }

    #[test]
    fn test_kind_prefixes() {
        assert_eq!(IdentifierKind::Transaction.prefix(), "PA");
        assert_eq!(IdentifierKind::Catch.to_string(), "CA");
    }
}
