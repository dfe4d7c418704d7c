//! Benchmarks for fleet distance calculations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fleetzone_geo::{haversine_distance_km, vessel_distances, Coordinate, VesselLocation};
use serde_json::json;

fn create_test_fleet(count: usize) -> Vec<VesselLocation> {
    (0..count)
        .map(|i| {
            // Spread vessels over the south-east coast
            let lat = 8.5 + (i as f64 * 0.01) % 3.5;
            let lng = 105.0 + (i as f64 * 0.013) % 3.0;
            VesselLocation {
                id: format!("VN-{i:05}"),
                location: json!({"latitude": lat, "longitude": lng}),
            }
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let a = Coordinate::new(10.775, 106.700);
    let b = Coordinate::new(10.800, 106.750);

    c.bench_function("haversine_single", |bench| {
        bench.iter(|| haversine_distance_km(black_box(&a), black_box(&b)))
    });
}

fn bench_fleet_distances(c: &mut Criterion) {
    let mut group = c.benchmark_group("fleet_distances");
    let origin = Coordinate::DEFAULT_FALLBACK;

    for size in [10, 100, 1000, 10000].iter() {
        let fleet = create_test_fleet(*size);

        group.bench_with_input(BenchmarkId::new("batch", size), size, |b, _| {
            b.iter(|| vessel_distances(black_box(&origin), black_box(&fleet)))
        });
    }

    group.finish();
}

fn bench_record_parsing(c: &mut Criterion) {
    let named = json!({"lat": "10.80", "lng": "106.75"});
    let wkt = json!("POINT(106.75 10.80)");

    let mut group = c.benchmark_group("record_parsing");

    group.bench_function("named_strings", |b| {
        b.iter(|| fleetzone_geo::parse_record_coordinate(black_box(&named)))
    });

    group.bench_function("wkt", |b| {
        b.iter(|| fleetzone_geo::parse_record_coordinate(black_box(&wkt)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_distance,
    bench_fleet_distances,
    bench_record_parsing
);
criterion_main!(benches);
