use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use swipetile::models::{GridSettings, Rect, TilePosition};
use swipetile::services::GridSnapshot;

fn quarter_grid() -> GridSnapshot {
    let visible = Rect::new(0.0, 25.0, 1440.0, 875.0);
    let windows = vec![
        (1, TilePosition::TopLeftQuarter.frame(&visible, 0.0, 4.0).unwrap()),
        (2, TilePosition::TopRightQuarter.frame(&visible, 0.0, 4.0).unwrap()),
        (3, TilePosition::BottomLeftQuarter.frame(&visible, 0.0, 4.0).unwrap()),
        (4, TilePosition::BottomRightQuarter.frame(&visible, 0.0, 4.0).unwrap()),
    ];
    GridSnapshot::new(windows, GridSettings::default())
}

fn benchmark_snapshot_construction(c: &mut Criterion) {
    let visible = Rect::new(0.0, 25.0, 1440.0, 875.0);
    // Eight side-by-side columns, the practical upper bound of a session.
    let windows: Vec<(u64, Rect)> = (0..8)
        .map(|index| {
            (
                index as u64 + 1,
                Rect::new(index as f64 * 180.0, 25.0, 180.0, visible.height()),
            )
        })
        .collect();

    c.bench_function("snapshot_construction", |b| {
        b.iter(|| {
            black_box(GridSnapshot::new(
                black_box(windows.clone()),
                GridSettings::default(),
            ))
        })
    });
}

fn benchmark_corner_propagation(c: &mut Criterion) {
    let grid = quarter_grid();
    let old_frame = grid.window(1).unwrap().frame;
    let new_frame = Rect::new(
        old_frame.min_x(),
        old_frame.min_y(),
        old_frame.width() + 40.0,
        old_frame.height() + 25.0,
    );

    c.bench_function("corner_propagation", |b| {
        b.iter(|| black_box(grid.compute_propagation(1, black_box(&old_frame), black_box(&new_frame))))
    });
}

criterion_group!(
    benches,
    benchmark_snapshot_construction,
    benchmark_corner_propagation
);
criterion_main!(benches);
