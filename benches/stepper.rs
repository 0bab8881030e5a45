//! Performance measurement for one-generation updates at varying grid sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use blocklife::engine::step;
use blocklife::seed::{RandomFillSeeder, Seeder};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Measures update cost for both partition offsets as the grid grows
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for size in &[50_usize, 100, 200, 400] {
        let Ok(seeder) = RandomFillSeeder::new(50, 42) else {
            group.finish();
            return;
        };
        let Ok(grid) = seeder.seed(*size, *size) else {
            group.finish();
            return;
        };

        group.bench_with_input(BenchmarkId::new("odd_offset", size), &grid, |b, grid| {
            b.iter(|| step(black_box(grid), 1, false));
        });
        group.bench_with_input(BenchmarkId::new("even_offset", size), &grid, |b, grid| {
            b.iter(|| step(black_box(grid), 2, false));
        });
        group.bench_with_input(
            BenchmarkId::new("even_offset_wrapped", size),
            &grid,
            |b, grid| {
                b.iter(|| step(black_box(grid), 2, true));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
