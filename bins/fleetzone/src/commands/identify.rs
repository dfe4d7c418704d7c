//! Identifier formatting and issuance

use anyhow::Result;
use fleetzone_cli::output::{format_region, format_zone, Status};
use fleetzone_core::config::Config;
use fleetzone_core::sequence::DailySequence;
use fleetzone_core::transaction::TransactionIssuer;
use fleetzone_geo::{Coordinate, IdentifierKind, TransactionIdentifier};
use fleetzone_telemetry::{metrics, names, timed_span};
use owo_colors::OwoColorize;

use super::resolve_date;

pub fn identifier(
    prefix: &str,
    component: f64,
    date: Option<&str>,
    sequence: u32,
    json: bool,
) -> Result<()> {
    let date = resolve_date(date)?;
    let parts = TransactionIdentifier::new(prefix, component, date, sequence);
    let formatted = parts.to_string();

    if json {
        let output = serde_json::json!({
            "identifier": formatted,
            "parts": parts,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", formatted.bold());
    }

    Ok(())
}

/// Issue one transaction against a sequence seeded with `existing` records.
pub fn transaction(
    config: &Config,
    own: Option<Coordinate>,
    other: Coordinate,
    kind: IdentifierKind,
    date: Option<&str>,
    existing: u32,
    json: bool,
) -> Result<()> {
    timed_span!("issue_transaction", %kind);

    let date = resolve_date(date)?;
    let own = own.unwrap_or_else(|| {
        tracing::debug!("no own position given, using configured fallback");
        config.schema.location.fallback()
    });

    let issuer = issuer(config, kind, date, existing);
    let issued = issuer.issue_transaction(
        kind,
        (own.latitude, own.longitude),
        (other.latitude, other.longitude),
        date,
    )?;
    metrics().increment(names::IDENTIFIER_ISSUED);

    if json {
        println!("{}", serde_json::to_string_pretty(&issued)?);
        return Ok(());
    }

    Status::header(&format!("{kind} transaction"));
    Status::field("Identifier", issued.identifier.bold());
    Status::field("Distance", format!("{:.1} km", issued.distance_km));
    Status::field("Region", format_region(&issued.counterpart_region));
    Status::field("Zone", format_zone(&issued.counterpart_zone));
    Status::field("Sequence", issued.sequence);
    Status::success("Identifier issued");

    Ok(())
}

/// Issue one catch identifier against a sequence seeded with `existing` records.
pub fn catch(
    config: &Config,
    site: Coordinate,
    date: Option<&str>,
    existing: u32,
    json: bool,
) -> Result<()> {
    timed_span!("issue_catch");

    let date = resolve_date(date)?;
    let issuer = issuer(config, IdentifierKind::Catch, date, existing);
    let issued = issuer.issue_catch((site.latitude, site.longitude), date)?;
    metrics().increment(names::IDENTIFIER_ISSUED);
    if issued.zone.is_outside() {
        metrics().increment(names::ZONE_OUTSIDE);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&issued)?);
        return Ok(());
    }

    Status::header("Catch record");
    Status::field("Identifier", issued.identifier.bold());
    Status::field("Region", format_region(&issued.region));
    Status::field("Zone", format_zone(&issued.zone));
    Status::field("Sequence", issued.sequence);
    if issued.zone.is_outside() {
        Status::warning("Catch site is outside every fishing ground");
    }

    Ok(())
}

fn issuer(
    config: &Config,
    kind: IdentifierKind,
    date: chrono::NaiveDate,
    existing: u32,
) -> TransactionIssuer {
    let sequence = DailySequence::new();
    sequence.seed(kind, date, existing);
    TransactionIssuer::new(sequence, config.schema.identifiers.transaction_prefix.clone())
}
