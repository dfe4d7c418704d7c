//! Transaction identifier issuance
//!
//! Combines the geo computations with the daily sequence allocator to
//! produce the descriptive fields stored on a new vessel-to-vessel
//! transaction or catch record. The identifier string is for display and
//! scanning; the record itself is keyed by a surrogate id in storage.

use crate::error::Result;
use crate::sequence::DailySequence;
use chrono::NaiveDate;
use fleetzone_geo::{
    build_transaction_identifier, calculate_ec30_zone, catch_identifier, classify_coastal_region,
    haversine_distance_km, CoastalRegion, Coordinate, Ec30Zone, IdentifierKind,
};
use serde::Serialize;

/// Descriptive fields for a new transaction record
#[derive(Debug, Clone, Serialize)]
pub struct IssuedTransaction {
    /// Formatted identifier, e.g. `PA6161026001`
    pub identifier: String,
    /// Distance between the two vessels
    pub distance_km: f64,
    /// Coastal region of the counterpart vessel
    pub counterpart_region: CoastalRegion,
    /// EC30 zone of the counterpart vessel
    pub counterpart_zone: Ec30Zone,
    /// Allocated daily sequence number
    pub sequence: u32,
}

/// Descriptive fields for a new catch record
#[derive(Debug, Clone, Serialize)]
pub struct IssuedCatch {
    /// Formatted identifier, e.g. `CA13161026001`
    pub identifier: String,
    /// Coastal region of the catch site
    pub region: CoastalRegion,
    /// EC30 zone of the catch site
    pub zone: Ec30Zone,
    /// Allocated daily sequence number
    pub sequence: u32,
}

/// Issues identifiers from a shared [`DailySequence`]
#[derive(Debug, Clone)]
pub struct TransactionIssuer {
    sequence: DailySequence,
    transaction_prefix: String,
}

impl TransactionIssuer {
    /// Create an issuer with the given allocator and transaction prefix
    pub fn new(sequence: DailySequence, transaction_prefix: impl Into<String>) -> Self {
        Self {
            sequence,
            transaction_prefix: transaction_prefix.into(),
        }
    }

    /// Issue a vessel-to-vessel transaction
    ///
    /// `kind` selects the sequence counter; the prefix comes from
    /// configuration for [`IdentifierKind::Transaction`] and from the kind
    /// otherwise. Positions are validated before any number is allocated.
    pub fn issue_transaction(
        &self,
        kind: IdentifierKind,
        own: (f64, f64),
        counterpart: (f64, f64),
        date: NaiveDate,
    ) -> Result<IssuedTransaction> {
        let own = Coordinate::try_new(own.0, own.1)?;
        let counterpart = Coordinate::try_new(counterpart.0, counterpart.1)?;

        let distance_km = haversine_distance_km(&own, &counterpart);
        let sequence = self.sequence.next(kind, date)?;

        let prefix = match kind {
            IdentifierKind::Transaction => self.transaction_prefix.as_str(),
            other => other.prefix(),
        };
        let identifier = build_transaction_identifier(prefix, distance_km, date, sequence);

        tracing::info!(%identifier, distance_km, "issued transaction identifier");

        Ok(IssuedTransaction {
            identifier,
            distance_km,
            counterpart_region: classify_coastal_region(&counterpart),
            counterpart_zone: calculate_ec30_zone(&counterpart),
            sequence,
        })
    }

    /// Issue a catch record identifier for a catch site
    pub fn issue_catch(&self, site: (f64, f64), date: NaiveDate) -> Result<IssuedCatch> {
        let site = Coordinate::try_new(site.0, site.1)?;
        let zone = calculate_ec30_zone(&site);
        let sequence = self.sequence.next(IdentifierKind::Catch, date)?;
        let identifier = catch_identifier(&zone, date, sequence);

        tracing::info!(%identifier, code = %zone.ec30_code, "issued catch identifier");

        Ok(IssuedCatch {
            identifier,
            region: classify_coastal_region(&site),
            zone,
            sequence,
        })
    }

    /// The allocator backing this issuer
    pub fn sequence(&self) -> &DailySequence {
        &self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use fleetzone_geo::CoastalRegionCode;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_first_and_second_transaction() {
        let issuer = TransactionIssuer::new(DailySequence::new(), "PA");

        let first = issuer
            .issue_transaction(IdentifierKind::Transaction, (10.775, 106.7), (10.8, 106.75), today())
            .unwrap();
        assert_eq!(first.identifier, "PA6161026001");
        assert_eq!(first.counterpart_region.code, CoastalRegionCode::B);
        assert_eq!(first.counterpart_zone.ec30_code.chars().next(), Some('D'));

        let second = issuer
            .issue_transaction(IdentifierKind::Transaction, (10.775, 106.7), (10.8, 106.75), today())
            .unwrap();
        assert_eq!(second.identifier, "PA6161026002");
    }

    #[test]
    fn test_share_kinds_use_own_prefix_and_counter() {
        let issuer = TransactionIssuer::new(DailySequence::new(), "PA");
        issuer
            .issue_transaction(IdentifierKind::Transaction, (10.775, 106.7), (10.8, 106.75), today())
            .unwrap();

        let share = issuer
            .issue_transaction(IdentifierKind::TwoShare, (10.775, 106.7), (10.775, 106.7), today())
            .unwrap();
        assert_eq!(share.identifier, "SH0161026001");
    }

    #[test]
    fn test_invalid_position_allocates_nothing() {
        let issuer = TransactionIssuer::new(DailySequence::new(), "PA");
        let err = issuer
            .issue_transaction(IdentifierKind::Transaction, (f64::NAN, 106.7), (10.8, 106.75), today())
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidCoordinate);
        assert_eq!(issuer.sequence().current(IdentifierKind::Transaction, today()), 0);
    }

    #[test]
    fn test_catch_outside_grounds() {
        let issuer = TransactionIssuer::new(DailySequence::new(), "PA");
        let issued = issuer.issue_catch((0.0, 0.0), today()).unwrap();

        assert!(issued.zone.is_outside());
        assert!(issued.region.is_outside());
        assert_eq!(issued.identifier, "CA0161026001");
    }
}
