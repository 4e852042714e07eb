use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use hetero_lattice::coincidence::{find_coincidences, reduce_to_independent_pairs};
use nalgebra::Matrix2;

/// Benchmark the hot 4D grid enumeration and the pair reduction behind it
fn bench_coincidence_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("coincidence_search");

    let square = Matrix2::identity();
    let hexagonal = Matrix2::new(2.46, -1.23, 0.0, 2.130_422);

    group.bench_function("grid_search_square_n8", |b| {
        b.iter(|| {
            find_coincidences(
                black_box(&square),
                black_box(&square),
                black_box(0.1),
                -8,
                8,
                black_box(1e-3),
            )
        });
    });

    group.bench_function("grid_search_hexagonal_n6", |b| {
        b.iter(|| {
            find_coincidences(
                black_box(&hexagonal),
                black_box(&hexagonal),
                black_box(0.0),
                -6,
                6,
                black_box(0.05),
            )
        });
    });

    let coincidences = find_coincidences(&hexagonal, &hexagonal, 0.0, -4, 4, 0.05);
    group.bench_function("pair_reduction_hexagonal", |b| {
        b.iter(|| reduce_to_independent_pairs(black_box(&coincidences)));
    });

    group.finish();
}

criterion_group!(coincidence_benches, bench_coincidence_search);
criterion_main!(coincidence_benches);
