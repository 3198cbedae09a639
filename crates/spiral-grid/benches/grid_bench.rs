//! Benchmarks for Spiral Grid
//!
//! Measures performance of:
//! - Order to coordinate conversion
//! - Coordinate to order conversion
//! - Full traversal iteration and matrix assembly

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use spiral_grid::{GridCoord, RectangularSpiral, Spiral, SpiralTraversal, SquareSpiral};

/// Benchmark order to coordinate conversion at the start, middle and end of
/// large grids
fn bench_coordinates(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinates");

    let square = SquareSpiral::new(100_001).unwrap();
    let rectangular = RectangularSpiral::new(60_000, 170_001).unwrap();

    for (name, grid) in [
        ("square", &square as &dyn SpiralTraversal),
        ("rectangular", &rectangular as &dyn SpiralTraversal),
    ] {
        let cells = grid.cell_count();
        for &order in &[1, cells / 3, cells / 2, cells - 1, cells] {
            group.throughput(Throughput::Elements(1));
            group.bench_with_input(BenchmarkId::new(name, order), &order, |b, &k| {
                b.iter(|| grid.coordinates(black_box(k)))
            });
        }
    }
    group.finish();
}

/// Benchmark coordinate to order conversion across rings
fn bench_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("index");

    let square = SquareSpiral::new(100_001).unwrap();
    let rectangular = RectangularSpiral::new(60_000, 170_001).unwrap();

    let coords = [
        GridCoord::TOP_LEFT,
        GridCoord::new(17, 40_000),
        GridCoord::new(30_000, 2),
        GridCoord::new(30_000, 50_000),
    ];

    for (name, grid) in [
        ("square", &square as &dyn SpiralTraversal),
        ("rectangular", &rectangular as &dyn SpiralTraversal),
    ] {
        for coord in coords {
            let ring = grid.ring_of(coord).unwrap();
            group.throughput(Throughput::Elements(1));
            group.bench_with_input(BenchmarkId::new(name, ring), &coord, |b, &c| {
                b.iter(|| grid.index_of(black_box(c)))
            });
        }
    }
    group.finish();
}

/// Benchmark walking whole grids in spiral order
fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for &size in &[16u32, 64, 256, 1024] {
        let grid = SquareSpiral::new(size).unwrap();
        group.throughput(Throughput::Elements(grid.cell_count()));
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| Spiral::new(black_box(grid)).count())
        });
    }
    group.finish();
}

/// Benchmark assembling the order matrix by round trips
fn bench_order_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_matrix");

    for &(rows, columns) in &[(9u32, 9u32), (32, 48), (128, 96)] {
        let grid = RectangularSpiral::new(rows, columns).unwrap();
        group.throughput(Throughput::Elements(grid.cell_count()));
        group.bench_with_input(
            BenchmarkId::new("cells", grid.cell_count()),
            &grid,
            |b, grid| b.iter(|| black_box(grid).order_matrix().unwrap()),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_coordinates,
    bench_index,
    bench_iteration,
    bench_order_matrix,
);
criterion_main!(benches);
