//! Fleet views: nearby vessels and the fishing-ground table

use anyhow::Result;
use fleetzone_cli::output::{format_area_km2, format_count, Status};
use fleetzone_core::{Error, ResultExt};
use fleetzone_geo::{
    nearest_vessels, parse_fleet_json, vessels_within_radius, Coordinate, DistanceReading,
    VesselDistance, VesselLocation, FISHING_GROUNDS,
};
use fleetzone_telemetry::{metrics, names, timed_span};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

use super::grid_layout;
use crate::Layout;

pub struct NearbyOptions {
    pub origin: Coordinate,
    pub radius_km: f64,
    /// 0 lists all
    pub max_results: usize,
    pub include_all: bool,
}

pub fn nearby(path: &Path, options: &NearbyOptions, json: bool) -> Result<()> {
    timed_span!("nearby_vessels");

    validate_radius(options.radius_km)?;
    let vessels = load_fleet(path)?;

    let results = select(&options.origin, &vessels, options);
    let unavailable = results.iter().filter(|r| r.distance_km.is_none()).count();
    metrics().increment_by(names::DISTANCE_UNAVAILABLE, unavailable as u64);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    Status::header(&format!(
        "Vessels near {} within {:.1} km",
        options.origin, options.radius_km
    ));
    if results.is_empty() {
        Status::info("No vessels found");
        return Ok(());
    }

    for vessel in &results {
        let reading = vessel.distance_km.map_or(DistanceReading::Unavailable, DistanceReading::Km);
        println!(
            "  {:<16} {:>10}  {}",
            vessel.id.cyan(),
            reading.to_string(),
            vessel.region.dimmed()
        );
    }
    Status::info(&format!(
        "{} of {}",
        format_count(results.len(), "vessel", "vessels"),
        vessels.len()
    ));

    Ok(())
}

/// Same rule as `tracking.nearby_radius_km` in the configuration.
fn validate_radius(radius_km: f64) -> fleetzone_core::Result<()> {
    if radius_km.is_finite() && radius_km > 0.0 {
        Ok(())
    } else {
        Err(Error::validation(format!("--radius must be positive, got {radius_km}"))
            .with_suggestion("Pass a distance in km, e.g. --radius 25"))
    }
}

fn load_fleet(path: &Path) -> fleetzone_core::Result<Vec<VesselLocation>> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Reading fleet file {}", path.display()))?;

    parse_fleet_json(&content)
        .map_err(Error::from)
        .context(format!("Parsing fleet file {}", path.display()))
        .with_suggestion("Expected a JSON array of {\"id\", \"location\"} records")
}

fn select(
    origin: &Coordinate,
    vessels: &[VesselLocation],
    options: &NearbyOptions,
) -> Vec<VesselDistance> {
    let mut results = if options.include_all {
        nearest_vessels(origin, vessels, None)
    } else {
        vessels_within_radius(origin, vessels, options.radius_km)
    };

    if options.max_results > 0 {
        results.truncate(options.max_results);
    }
    results
}

#[derive(Serialize)]
struct GroundSummary {
    name: &'static str,
    prefix: char,
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
    sub_zone_count: u32,
    total_area_km2: f64,
    lat_cells: u32,
    lng_cells: u32,
    reachable_zones: Vec<u32>,
}

pub fn grounds(layout: Layout, json: bool) -> Result<()> {
    let summaries: Vec<GroundSummary> = FISHING_GROUNDS
        .iter()
        .map(|ground| {
            let grid = grid_layout(layout, ground.sub_zone_count);
            GroundSummary {
                name: ground.name,
                prefix: ground.code_prefix,
                min_lat: ground.bounds.min_lat,
                max_lat: ground.bounds.max_lat,
                min_lng: ground.bounds.min_lng,
                max_lng: ground.bounds.max_lng,
                sub_zone_count: ground.sub_zone_count,
                total_area_km2: ground.total_area_km2(),
                lat_cells: grid.lat_cells(),
                lng_cells: grid.lng_cells(),
                reachable_zones: grid
                    .reachable_zone_numbers(ground.sub_zone_count)
                    .into_iter()
                    .collect(),
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    Status::header("Fishing grounds");
    for summary in &summaries {
        println!();
        println!("  {} {}", summary.prefix.bold(), summary.name.bold());
        Status::field(
            "Bounds",
            format!(
                "lat {}–{}, lng {}–{}",
                summary.min_lat, summary.max_lat, summary.min_lng, summary.max_lng
            ),
        );
        Status::field("Area", format_area_km2(summary.total_area_km2));
        Status::field(
            "Grid",
            format!(
                "{}×{} for {} sub-zones",
                summary.lat_cells, summary.lng_cells, summary.sub_zone_count
            ),
        );
        Status::field("Reachable", describe_zones(&summary.reachable_zones));

        let unreachable =
            (summary.sub_zone_count as usize).saturating_sub(summary.reachable_zones.len());
        if unreachable > 0 {
            Status::warning(&format!(
                "{} {} never produced by this grid",
                format_count(unreachable, "sub-zone is", "sub-zones are"),
                summary.prefix
            ));
        }
    }

    Ok(())
}

/// Collapse sorted numbers into ranges, e.g. `1–13`.
fn describe_zones(zones: &[u32]) -> String {
    let mut ranges: Vec<String> = Vec::new();
    let mut iter = zones.iter().copied().peekable();
    while let Some(start) = iter.next() {
        let mut end = start;
        while iter.peek() == Some(&(end + 1)) {
            end += 1;
            iter.next();
        }
        ranges.push(if start == end {
            start.to_string()
        } else {
            format!("{start}–{end}")
        });
    }
    ranges.join(", ")
}
