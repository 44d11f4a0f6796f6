//! Benchmarks for reordering and frame building.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::indexing_slicing)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gridshift::config::GridConfig;
use gridshift::data::{generate_grid, SeededSource};
use gridshift::reorder::ReorderCore;
use gridshift::surface::GridSurface;
use gridshift::types::AxisMode;

/// Move the first row to the end and back, at several grid heights.
/// The way back drops it on the row that took its place.
fn bench_reorder_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder_rows");

    for rows in [10_usize, 100, 1_000, 10_000] {
        let grid = generate_grid(rows, 4, &mut SeededSource::new(1));
        let first = grid.rows[0].id.clone();
        let last = grid.rows[rows - 1].id.clone();
        let mut core = ReorderCore::with_grid(&grid.columns, &grid.rows);

        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::new("first_to_last", rows), &rows, |b, _| {
            b.iter(|| {
                core.reorder(black_box(&first), black_box(&last));
                core.reorder(black_box(&first), black_box(&grid.rows[1].id));
            })
        });
    }

    group.finish();
}

/// Column moves in column mode
fn bench_reorder_columns(c: &mut Criterion) {
    let grid = generate_grid(10, 200, &mut SeededSource::new(2));
    let mut core = ReorderCore::with_grid(&grid.columns, &grid.rows);
    core.set_axis_mode(AxisMode::Column);
    let a = grid.columns[10].id.clone();
    let b = grid.columns[150].id.clone();

    c.bench_function("reorder_columns_200", |bench| {
        bench.iter(|| {
            core.reorder(black_box(&a), black_box(&b));
            core.reorder(black_box(&a), black_box(&grid.columns[11].id));
        })
    });
}

/// Display list for a full 10 × 10 grid (the picker maximum)
fn bench_display_list(c: &mut Criterion) {
    let mut surface = GridSurface::new(GridConfig::default());
    surface.load(generate_grid(10, 10, &mut SeededSource::new(3)));
    surface.on_cell_hover(4, 4);

    c.bench_function("display_list_10x10", |b| {
        b.iter(|| black_box(surface.display_list()))
    });
}

/// Grid generation cost
fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_grid_100x10", |b| {
        b.iter(|| {
            let mut source = SeededSource::new(4);
            black_box(generate_grid(black_box(100), black_box(10), &mut source))
        })
    });
}

criterion_group!(
    benches,
    bench_reorder_rows,
    bench_reorder_columns,
    bench_display_list,
    bench_generate,
);

criterion_main!(benches);
