use approx::assert_relative_eq;
use linegraph_rs::api::{LineSeriesRenderer, SeriesRenderConfig, SeriesStyle};
use linegraph_rs::core::{
    DataPoint, PlotLayout, ProjectionOptions, Viewport, project_line_geometry,
};
use linegraph_rs::render::{Color, RenderFrame};

fn fill_options() -> ProjectionOptions {
    ProjectionOptions {
        marker_radius: None,
        line_thickness: 2.0,
        build_fill: true,
    }
}

fn sample_points(count: usize) -> Vec<DataPoint> {
    (0..count)
        .map(|i| DataPoint::new(i as f64, (i % 3) as f64))
        .collect()
}

fn sample_layout() -> PlotLayout {
    PlotLayout::new(300.0, 150.0)
        .with_x_window(0.0, 10.0)
        .with_y_window(0.0, 3.0)
        .with_border(5.0)
}

#[test]
fn fill_polygon_accumulates_both_segment_endpoints() {
    for count in [2usize, 3, 7] {
        let geometry = project_line_geometry(&sample_points(count), sample_layout(), fill_options());
        assert_eq!(
            geometry.fill_polygon.len(),
            2 * (count - 1) + 2,
            "count={count}"
        );
    }
}

#[test]
fn fill_polygon_closes_on_baseline() {
    let geometry = project_line_geometry(&sample_points(4), sample_layout(), fill_options());
    let vertices = &geometry.fill_polygon;
    let baseline_y = sample_layout().baseline_y();

    let closing = &vertices[vertices.len() - 2..];
    assert_relative_eq!(closing[0].y, baseline_y, epsilon = 1e-9);
    assert_relative_eq!(closing[1].y, baseline_y, epsilon = 1e-9);

    // Straight drops: closing x values line up with the last and first path vertices.
    assert_relative_eq!(closing[0].x, vertices[vertices.len() - 3].x, epsilon = 1e-9);
    assert_relative_eq!(closing[1].x, vertices[0].x, epsilon = 1e-9);
}

#[test]
fn fill_polygon_uses_shortened_path_when_markers_enabled() {
    let options = ProjectionOptions {
        marker_radius: Some(10.0),
        line_thickness: 0.0,
        build_fill: true,
    };
    let points = vec![DataPoint::new(0.0, 5.0), DataPoint::new(1.0, 5.0)];
    let layout = PlotLayout::new(100.0, 100.0)
        .with_x_window(0.0, 1.0)
        .with_y_window(0.0, 10.0);

    let geometry = project_line_geometry(&points, layout, options);
    assert_eq!(geometry.fill_polygon.len(), 4);
    assert_relative_eq!(geometry.fill_polygon[0].x, 21.0, epsilon = 1e-9);
    assert_relative_eq!(geometry.fill_polygon[1].x, 81.0, epsilon = 1e-9);
}

#[test]
fn fill_is_empty_without_enough_points() {
    let geometry = project_line_geometry(&sample_points(1), sample_layout(), fill_options());
    assert!(geometry.fill_polygon.is_empty());
}

#[test]
fn disabling_background_suppresses_polygon_on_next_pass() {
    let mut renderer = LineSeriesRenderer::with_config(
        SeriesRenderConfig::new().with_draw_background(true),
    );
    let style = SeriesStyle::new(2.0, Color::rgb(0.2, 0.6, 1.0), Color::rgb(1.0, 1.0, 1.0));
    let points = sample_points(3);

    let mut first_pass = RenderFrame::new(Viewport::new(320, 160));
    renderer.append_series_primitives(&mut first_pass, &points, sample_layout(), style);
    assert_eq!(first_pass.polygons.len(), 1);

    renderer.set_draw_background(false);
    let mut second_pass = RenderFrame::new(Viewport::new(320, 160));
    renderer.append_series_primitives(&mut second_pass, &points, sample_layout(), style);
    assert!(second_pass.polygons.is_empty());
}
