//! Benchmarks for distance ranking and viewport planning.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use streetcats_geo::{haversine_distance, plan, rank_by_distance, Coordinate, LocatedEntity};

fn create_test_cats(count: usize) -> Vec<LocatedEntity<usize>> {
    (0..count)
        .map(|i| {
            // Scatter cats around Madrid, every tenth one without a location
            if i % 10 == 9 {
                return LocatedEntity::unlocated(i);
            }
            let lat = 40.3 + (i as f64 * 0.007) % 0.3;
            let lng = -3.8 + (i as f64 * 0.011) % 0.3;
            LocatedEntity::new(i, lat, lng)
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let madrid = Coordinate::new(40.4168, -3.7038);
    let barcelona = Coordinate::new(41.3851, 2.1734);

    c.bench_function("haversine_single", |b| {
        b.iter(|| haversine_distance(black_box(&madrid), black_box(&barcelona)))
    });
}

fn bench_rank_by_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_by_distance");
    let viewer = Coordinate::new(40.4168, -3.7038);

    for size in [10, 100, 1000, 10000].iter() {
        let cats = create_test_cats(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| rank_by_distance(black_box(&viewer), black_box(&cats)))
        });
    }

    group.finish();
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");
    let viewer = Coordinate::new(40.4168, -3.7038);
    let cats = create_test_cats(200);

    group.bench_function("with_viewer", |b| {
        b.iter(|| plan(black_box(Some(viewer)), black_box(&cats)))
    });

    group.bench_function("without_viewer", |b| {
        b.iter(|| plan(black_box(None), black_box(&cats)))
    });

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_rank_by_distance, bench_plan);
criterion_main!(benches);
