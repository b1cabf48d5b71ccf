//! Criterion micro-benchmarks for the deformation engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use knead_bench::{reference_grid, reference_request, rigid_request};
use knead_deform::deform;
use knead_lattice::{NeighbourScope, PositionIndex};

/// Benchmark: enumerate full neighbours of every voxel in a 20³ grid.
fn bench_neighbours_8k(c: &mut Criterion) {
    let grid = reference_grid(20);

    c.bench_function("neighbours_cube_8k", |b| {
        b.iter(|| {
            for origin in grid.positions() {
                let n = grid.neighbours(origin, 1.0, NeighbourScope::Full);
                black_box(&n);
            }
        });
    });
}

/// Benchmark: compile the exact-match position index for a 20³ grid.
fn bench_position_index_build_8k(c: &mut Criterion) {
    let grid = reference_grid(20);

    c.bench_function("position_index_build_8k", |b| {
        b.iter(|| {
            let index = PositionIndex::build(&grid).unwrap();
            black_box(&index);
        });
    });
}

/// Benchmark: damped end-to-end deform on a 20³ grid. The wave is
/// absorbed after a few layers, so this measures the common case of a
/// localized deformation in a larger grid.
fn bench_deform_damped_8k(c: &mut Criterion) {
    let grid = reference_grid(20);
    let request = reference_request(20);

    c.bench_function("deform_damped_8k", |b| {
        b.iter(|| {
            let deformed = deform(&request, &grid).unwrap();
            black_box(&deformed);
        });
    });
}

/// Benchmark: rigid end-to-end deform on a 12³ grid. Stiffness 0 visits
/// and moves every voxel — the propagator's worst case.
fn bench_deform_rigid_flood(c: &mut Criterion) {
    let grid = reference_grid(12);
    let request = rigid_request(12);

    c.bench_function("deform_rigid_flood_12", |b| {
        b.iter(|| {
            let deformed = deform(&request, &grid).unwrap();
            black_box(&deformed);
        });
    });
}

criterion_group!(
    benches,
    bench_neighbours_8k,
    bench_position_index_build_8k,
    bench_deform_damped_8k,
    bench_deform_rigid_flood
);
criterion_main!(benches);
