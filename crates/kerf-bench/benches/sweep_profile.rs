//! Criterion benchmarks for whole-box sweeps.
//!
//! Run with `--features parallel` to measure the rayon path.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use kerf_bench::{reference_profile_2d, reference_profile_3d, stress_profile_2d};
use kerf_limiter::SlopeLimiter;

/// Benchmark: scales for the 2D reference profile, 4 components.
fn bench_compute_scales_2d(c: &mut Criterion) {
    let p = reference_profile_2d(4, 42);
    let limiter = SlopeLimiter::<2>::builder().build().unwrap();

    c.bench_function("compute_scales_2d_16k_x4", |b| {
        b.iter(|| {
            limiter
                .compute_scales(&p.valid, &p.state, &p.geometry, &p.slopes)
                .unwrap()
        });
    });
}

/// Benchmark: limit the 3D reference profile in place.
fn bench_limit_in_place_3d(c: &mut Criterion) {
    let p = reference_profile_3d(1, 42);
    let limiter = SlopeLimiter::<3>::builder().build().unwrap();

    c.bench_function("limit_in_place_3d_32k", |b| {
        b.iter_batched(
            || p.slopes.clone(),
            |mut slopes| {
                limiter
                    .limit_in_place(&p.valid, &p.state, &p.geometry, &mut slopes)
                    .unwrap()
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: the 512x512 stress profile.
fn bench_stress_2d(c: &mut Criterion) {
    let p = stress_profile_2d(42);
    let limiter = SlopeLimiter::<2>::builder().build().unwrap();

    let mut group = c.benchmark_group("stress");
    group.sample_size(20);
    group.bench_function("compute_scales_2d_262k", |b| {
        b.iter(|| {
            limiter
                .compute_scales(&p.valid, &p.state, &p.geometry, &p.slopes)
                .unwrap()
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_compute_scales_2d,
    bench_limit_in_place_3d,
    bench_stress_2d
);
criterion_main!(benches);
