//! Benchmarks des conversions MGRS

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const POINTS: [(f64, f64); 6] = [
    (48.8584, 2.2945),
    (-33.8688, 151.2093),
    (40.689247, -74.044502),
    (21.3, -157.9),
    (-0.001, 10.0),
    (83.99, 10.0),
];

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("lat_lon_to_mgrs");
    group.throughput(Throughput::Elements(POINTS.len() as u64));

    for precision in [1u8, 5] {
        group.bench_with_input(
            BenchmarkId::from_parameter(precision),
            &precision,
            |b, &precision| {
                b.iter(|| {
                    for &(lat, lon) in &POINTS {
                        black_box(mgrs::lat_lon_to_mgrs(black_box(lat), black_box(lon), precision).unwrap());
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let references: Vec<String> = POINTS
        .iter()
        .map(|&(lat, lon)| mgrs::lat_lon_to_mgrs(lat, lon, 5).unwrap())
        .collect();

    let mut group = c.benchmark_group("mgrs_to_lat_lon");
    group.throughput(Throughput::Elements(references.len() as u64));

    group.bench_function("precision_5", |b| {
        b.iter(|| {
            for reference in &references {
                black_box(mgrs::mgrs_to_lat_lon(black_box(reference)).unwrap());
            }
        })
    });

    group.finish();
}

fn bench_roundtrip_grid(c: &mut Criterion) {
    let points: Vec<(f64, f64)> = (0..=164)
        .flat_map(|i| (0..36).map(move |j| (-80.0 + i as f64, -180.0 + j as f64 * 10.0)))
        .collect();

    let mut group = c.benchmark_group("roundtrip_grid");
    group.throughput(Throughput::Elements(points.len() as u64));
    group.sample_size(20);

    group.bench_function("all_bands", |b| {
        b.iter(|| {
            let mut ok = 0usize;
            for &(lat, lon) in &points {
                if let Ok(m) = mgrs::lat_lon_to_mgrs(lat, lon, 5) {
                    if mgrs::mgrs_to_lat_lon(&m).is_ok() {
                        ok += 1;
                    }
                }
            }
            black_box(ok)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_forward, bench_inverse, bench_roundtrip_grid);
criterion_main!(benches);
