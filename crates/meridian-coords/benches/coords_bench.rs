//! Benchmarks for Meridian coordinate spaces
//!
//! Measures performance of:
//! - Norm evaluation per space
//! - Predicted-RTT computation (subtract + norm)
//! - Random unit-vector generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use meridian_coords::{Coordinate, Euclidean2D, Euclidean3D, HeightVector2D, HeightVector3D};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Benchmark the predicted-RTT computation for each space.
fn bench_predicted_rtt(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicted_rtt");

    let a2 = Euclidean2D::new(13.0, -7.5);
    let b2 = Euclidean2D::new(-2.0, 41.0);
    group.bench_with_input(BenchmarkId::from_parameter("euclidean2d"), &(a2, b2), |b, &(x, y)| {
        b.iter(|| (black_box(x) - black_box(y)).norm())
    });

    let a3 = Euclidean3D::new(13.0, -7.5, 2.0);
    let b3 = Euclidean3D::new(-2.0, 41.0, 9.0);
    group.bench_with_input(BenchmarkId::from_parameter("euclidean3d"), &(a3, b3), |b, &(x, y)| {
        b.iter(|| (black_box(x) - black_box(y)).norm())
    });

    let h2 = HeightVector2D::new(13.0, -7.5, 1.0);
    let g2 = HeightVector2D::new(-2.0, 41.0, 0.5);
    group.bench_with_input(BenchmarkId::from_parameter("height2d"), &(h2, g2), |b, &(x, y)| {
        b.iter(|| (black_box(x) - black_box(y)).norm())
    });

    let h3 = HeightVector3D::new(13.0, -7.5, 2.0, 1.0);
    let g3 = HeightVector3D::new(-2.0, 41.0, 9.0, 0.5);
    group.bench_with_input(BenchmarkId::from_parameter("height3d"), &(h3, g3), |b, &(x, y)| {
        b.iter(|| (black_box(x) - black_box(y)).norm())
    });

    group.finish();
}

/// Benchmark random unit-vector generation.
fn bench_random_unit_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_unit_vector");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    group.bench_function("euclidean2d", |b| {
        b.iter(|| Euclidean2D::random_unit_vector(&mut rng))
    });
    group.bench_function("height3d", |b| {
        b.iter(|| HeightVector3D::random_unit_vector(&mut rng))
    });

    group.finish();
}

criterion_group!(benches, bench_predicted_rtt, bench_random_unit_vector);
criterion_main!(benches);
