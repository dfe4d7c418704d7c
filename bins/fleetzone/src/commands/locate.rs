//! Region, zone and distance lookups

use anyhow::Result;
use fleetzone_cli::output::{format_area_km2, format_distance, Status};
use fleetzone_geo::{
    calculate_zone_with_layout, classify_coastal_region, km_to_meters, Coordinate,
    DistanceReading,
};
use fleetzone_telemetry::{metrics, names};
use serde_json::json;

use super::grid_layout;
use crate::Layout;

pub fn region(position: &Coordinate, json: bool) -> Result<()> {
    let region = classify_coastal_region(position);

    metrics().increment(names::REGION_CLASSIFIED);
    if region.is_outside() {
        metrics().increment(names::REGION_OUTSIDE);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&region)?);
        return Ok(());
    }

    Status::header(&format!("Coastal region at {position}"));
    Status::field("Code", region.code);
    Status::field("Name", region.name);
    Status::field("Description", region.description);
    if region.is_outside() {
        Status::warning("Position is outside the traditional coastal regions");
    }

    Ok(())
}

pub fn zone(position: &Coordinate, layout: Layout, json: bool) -> Result<()> {
    let zone = calculate_zone_with_layout(position, |g| grid_layout(layout, g.sub_zone_count));

    metrics().increment(names::ZONE_CALCULATED);
    if zone.is_outside() {
        metrics().increment(names::ZONE_OUTSIDE);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&zone)?);
        return Ok(());
    }

    Status::header(&format!("EC30 zone at {position}"));
    Status::field("Code", &zone.ec30_code);
    Status::field("Label", &zone.zone_label);
    Status::field("Ground", &zone.ground_name);
    if zone.is_outside() {
        Status::warning("Position is outside every fishing ground");
    } else {
        Status::field("Sub-zone", zone.zone_number);
        Status::field("Ground area", format_area_km2(zone.total_area_km2));
    }

    Ok(())
}

pub fn distance(from: &Coordinate, to: &Coordinate, json: bool) -> Result<()> {
    let reading = DistanceReading::between(from, to);
    if reading.km().is_none() {
        metrics().increment(names::DISTANCE_UNAVAILABLE);
    }

    if json {
        let output = json!({
            "from": from,
            "to": to,
            "distance_km": reading.km(),
            "distance_m": reading.km().map(km_to_meters),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    Status::header("Distance");
    Status::field("From", from);
    Status::field("To", to);
    Status::field("Distance", format_distance(reading));

    Ok(())
}
