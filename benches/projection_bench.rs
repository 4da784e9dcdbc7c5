use criterion::{Criterion, criterion_group, criterion_main};
use linegraph_rs::core::{DataPoint, PlotLayout, ProjectionOptions, project_line_geometry};
use std::hint::black_box;

fn sample_points(count: usize) -> Vec<DataPoint> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            let y = (x * 0.01).sin() * 50.0 + 100.0;
            DataPoint::new(x, y)
        })
        .collect()
}

fn bench_plain_projection_10k(c: &mut Criterion) {
    let points = sample_points(10_000);
    let layout = PlotLayout::new(1920.0, 1080.0)
        .with_x_window(0.0, 10_000.0)
        .with_y_window(50.0, 100.0);

    c.bench_function("plain_projection_10k", |b| {
        b.iter(|| {
            let _ = project_line_geometry(
                black_box(&points),
                black_box(layout),
                black_box(ProjectionOptions::plain(1.5)),
            );
        })
    });
}

fn bench_marker_fill_projection_10k(c: &mut Criterion) {
    let points = sample_points(10_000);
    let layout = PlotLayout::new(1920.0, 1080.0)
        .with_x_window(0.0, 10_000.0)
        .with_y_window(50.0, 100.0);
    let options = ProjectionOptions {
        marker_radius: Some(4.0),
        line_thickness: 1.5,
        build_fill: true,
    };

    c.bench_function("marker_fill_projection_10k", |b| {
        b.iter(|| {
            let _ = project_line_geometry(
                black_box(&points),
                black_box(layout),
                black_box(options),
            );
        })
    });
}

criterion_group!(
    benches,
    bench_plain_projection_10k,
    bench_marker_fill_projection_10k
);
criterion_main!(benches);
