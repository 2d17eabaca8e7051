//! Benchmarks for the backtracking solver.
//!
//! Measures canonical solving of a blank grid (worst case for the ascending
//! candidate order) and randomized solution generation with fixed RNG
//! seeds for reproducibility.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench backtrack
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use ninefold_core::Grid;
use ninefold_solver::{solve_canonical, solve_randomized};
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;

const SEEDS: [u64; 3] = [42, 7_777, 123_456_789];

fn bench_solve_canonical_blank(c: &mut Criterion) {
    c.bench_function("solve_canonical_blank", |b| {
        b.iter_batched(
            || hint::black_box(Grid::new()),
            |mut grid| solve_canonical(&mut grid),
            BatchSize::SmallInput,
        );
    });
}

fn bench_solve_randomized_blank(c: &mut Criterion) {
    for seed in SEEDS {
        c.bench_with_input(
            BenchmarkId::new("solve_randomized_blank", seed),
            &seed,
            |b, &seed| {
                b.iter_batched(
                    || (hint::black_box(Grid::new()), Pcg64Mcg::seed_from_u64(seed)),
                    |(mut grid, mut rng)| solve_randomized(&mut grid, &mut rng),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    benches,
    bench_solve_canonical_blank,
    bench_solve_randomized_blank
);
criterion_main!(benches);
