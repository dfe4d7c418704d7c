//! Vessel-to-vessel transaction: distance, region and identifier together.

use chrono::NaiveDate;
use fleetzone_geo::{
    build_transaction_identifier, calculate_ec30_zone, catch_identifier, checked_distance_km,
    classify_coastal_region, format_date_component, haversine_distance_km,
    parse_record_coordinate, CoastalRegionCode, Coordinate, DistanceReading, IdentifierKind,
    TransactionIdentifier,
};
use serde_json::json;

#[test]
fn first_transaction_of_the_day() {
    let vessel_a = Coordinate::new(10.775, 106.700);
    let vessel_b = Coordinate::new(10.800, 106.750);
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

    let distance = haversine_distance_km(&vessel_a, &vessel_b);
    assert!((distance - 6.1).abs() < 0.2, "distance: {distance}");

    let region = classify_coastal_region(&vessel_b);
    assert_eq!(region.code, CoastalRegionCode::B);

    let id = build_transaction_identifier(IdentifierKind::Transaction.prefix(), distance, today, 1);
    let expected = format!("PA{}{}001", distance.round() as u64, format_date_component(today));
    assert_eq!(id, expected);
    assert_eq!(id, "PA6161026001");

    let structured = TransactionIdentifier::new("PA", distance, today, 1);
    assert_eq!(structured.to_string(), id);
}

#[test]
fn zero_distance_between_same_position() {
    let a = Coordinate::new(10.775, 106.700);
    assert_eq!(haversine_distance_km(&a, &a), 0.0);
}

#[test]
fn stored_record_without_position_has_no_distance() {
    let own = Coordinate::DEFAULT_FALLBACK;
    let row = json!({"latitude": "", "longitude": "106.75"});

    let reading = match parse_record_coordinate(&row) {
        Some(other) => DistanceReading::between(&own, &other),
        None => DistanceReading::Unavailable,
    };
    assert_eq!(reading.to_string(), "N/A");
    assert!(checked_distance_km(&own, &Coordinate::new(f64::NAN, 106.75)).is_none());
}

#[test]
fn catch_record_in_dong_nam_bo() {
    let site = Coordinate::new(10.25, 106.5);
    let zone = calculate_ec30_zone(&site);
    let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

    assert_eq!(zone.ec30_code, "D13");
    assert_eq!(catch_identifier(&zone, date, 7), "CA13050126007");

    let stored = serde_json::to_string(&zone).unwrap();
    let restored: fleetzone_geo::Ec30Zone = serde_json::from_str(&stored).unwrap();
    assert_eq!(restored, zone);
}

#[test]
fn outside_everything() {
    let atlantic = Coordinate::new(0.0, 0.0);
    assert!(classify_coastal_region(&atlantic).is_outside());
    assert_eq!(calculate_ec30_zone(&atlantic).ec30_code, "XX00");
}
