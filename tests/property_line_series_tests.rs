use linegraph_rs::core::{DataPoint, PlotLayout, ProjectionOptions, project_line_geometry};
use proptest::prelude::*;

proptest! {
    #[test]
    fn projected_segment_count_matches_points(
        xs in proptest::collection::vec(-10_000.0f64..10_000.0, 2..64),
        ys in proptest::collection::vec(-1_000.0f64..1_000.0, 2..64)
    ) {
        let len = xs.len().min(ys.len());
        prop_assume!(len >= 2);

        let mut points = Vec::with_capacity(len);
        for i in 0..len {
            points.push(DataPoint::new(xs[i], ys[i]));
        }

        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for point in &points {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }

        if min_x == max_x {
            max_x += 1.0;
        }
        if min_y == max_y {
            max_y += 1.0;
        }

        let layout = PlotLayout::new(1200.0, 700.0)
            .with_x_window(min_x, max_x - min_x)
            .with_y_window(min_y, max_y - min_y);

        let geometry = project_line_geometry(&points, layout, ProjectionOptions::plain(1.5));
        prop_assert_eq!(geometry.segments.len(), len - 1);

        for segment in &geometry.segments {
            prop_assert!(segment.x1.is_finite());
            prop_assert!(segment.y1.is_finite());
            prop_assert!(segment.x2.is_finite());
            prop_assert!(segment.y2.is_finite());
        }
    }

    #[test]
    fn markers_cover_every_point_with_fill_closed(
        ys in proptest::collection::vec(0.0f64..100.0, 2..32)
    ) {
        let points: Vec<DataPoint> = ys
            .iter()
            .enumerate()
            .map(|(i, y)| DataPoint::new(i as f64, *y))
            .collect();

        let layout = PlotLayout::new(960.0, 540.0)
            .with_x_window(0.0, points.len() as f64)
            .with_y_window(0.0, 100.0);
        let options = ProjectionOptions {
            marker_radius: Some(6.0),
            line_thickness: 1.0,
            build_fill: true,
        };

        let geometry = project_line_geometry(&points, layout, options);
        prop_assert_eq!(geometry.markers.len(), points.len());
        prop_assert_eq!(geometry.fill_polygon.len(), 2 * (points.len() - 1) + 2);

        for (i, marker) in geometry.markers.iter().enumerate() {
            prop_assert_eq!(marker.label_index, i + 1);
        }
    }

    #[test]
    fn screen_x_strictly_increases_with_x(
        x in -1_000.0f64..1_000.0,
        delta in 0.5f64..500.0,
        min_x in -1_000.0f64..1_000.0,
        range_x in 1.0f64..5_000.0,
        width in 100.0f64..2_000.0
    ) {
        let layout = PlotLayout::new(width, 500.0).with_x_window(min_x, range_x);
        prop_assert!(layout.screen_x(x + delta) > layout.screen_x(x));
    }

    #[test]
    fn screen_y_strictly_decreases_with_y(
        y in -1_000.0f64..1_000.0,
        delta in 0.5f64..500.0,
        min_y in -1_000.0f64..1_000.0,
        range_y in 1.0f64..5_000.0,
        height in 100.0f64..2_000.0
    ) {
        let layout = PlotLayout::new(800.0, height).with_y_window(min_y, range_y);
        prop_assert!(layout.screen_y(y + delta) < layout.screen_y(y));
    }
}
