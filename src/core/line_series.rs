use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, PlotLayout};

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Marker anchor in pixel coordinates with its 1-based display index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPoint {
    pub x: f64,
    pub y: f64,
    pub label_index: usize,
}

/// Vertex of the baseline fill polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillVertex {
    pub x: f64,
    pub y: f64,
}

/// Geometry knobs for one projection pass.
///
/// `marker_radius` is `Some` when markers are drawn; both the segment
/// shortening and the horizontal plot inset derive from it. `line_thickness`
/// participates only in the inset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionOptions {
    pub marker_radius: Option<f64>,
    pub line_thickness: f64,
    pub build_fill: bool,
}

impl ProjectionOptions {
    /// Options for a bare polyline pass: no markers, no fill.
    #[must_use]
    pub fn plain(line_thickness: f64) -> Self {
        Self {
            marker_radius: None,
            line_thickness,
            build_fill: false,
        }
    }
}

/// Deterministic geometry for one line-series render pass.
///
/// `segments` carries the (possibly marker-shortened) polyline.
/// `fill_polygon` is explicitly closed against the baseline with both segment
/// endpoints accumulated per segment, so consumers can render it without
/// implicit closure rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeriesGeometry {
    pub segments: Vec<LineSegment>,
    pub markers: Vec<MarkerPoint>,
    pub fill_polygon: Vec<FillVertex>,
}

impl LineSeriesGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
            markers: Vec::new(),
            fill_polygon: Vec::new(),
        }
    }
}

/// Projects data points into segments, marker anchors, and fill geometry in a
/// single pass over the input.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests consume the exact same geometry output. Coordinates are unchecked: a
/// zero range in `layout` produces non-finite values that propagate to the
/// backend.
///
/// Fewer than two points produce empty geometry. Markers follow the segment
/// walk: each segment records a marker at its start point, and one trailing
/// marker is recorded at the last segment's unmodified end point with label
/// index `points.len()`. With a single point no segment is walked, so no
/// marker is recorded either.
pub fn project_line_geometry(
    points: &[DataPoint],
    layout: PlotLayout,
    options: ProjectionOptions,
) -> LineSeriesGeometry {
    if points.len() < 2 {
        return LineSeriesGeometry::empty();
    }

    let layout = match options.marker_radius {
        Some(radius) => layout.with_marker_inset(radius, options.line_thickness),
        None => layout,
    };

    let mut segments = Vec::with_capacity(points.len() - 1);
    let mut markers = Vec::new();
    let mut fill_polygon = Vec::new();
    let mut trailing_marker: Option<MarkerPoint> = None;

    let mut last_x = layout.screen_x(points[0].x);
    let mut last_y = layout.screen_y(points[0].y);

    for (i, point) in points.iter().enumerate().skip(1) {
        let mut start_x = last_x;
        let mut start_y = last_y;
        let mut end_x = layout.screen_x(point.x);
        let mut end_y = layout.screen_y(point.y);
        last_x = end_x;
        last_y = end_y;

        if let Some(radius) = options.marker_radius {
            markers.push(MarkerPoint {
                x: start_x,
                y: start_y,
                label_index: i,
            });
            trailing_marker = Some(MarkerPoint {
                x: end_x,
                y: end_y,
                label_index: i + 1,
            });
            // Pull both segment ends back so the stroke stays outside the discs.
            let theta = (end_y - start_y).atan2(end_x - start_x);
            let dx = theta.cos() * radius;
            let dy = theta.sin() * radius;
            start_x += dx;
            start_y += dy;
            end_x -= dx;
            end_y -= dy;
        }

        segments.push(LineSegment {
            x1: start_x,
            y1: start_y,
            x2: end_x,
            y2: end_y,
        });

        if options.build_fill {
            fill_polygon.push(FillVertex {
                x: start_x,
                y: start_y,
            });
            fill_polygon.push(FillVertex { x: end_x, y: end_y });
        }
    }

    if let Some(marker) = trailing_marker {
        markers.push(marker);
    }

    if let (true, Some(first), Some(last)) = (
        options.build_fill,
        fill_polygon.first().copied(),
        fill_polygon.last().copied(),
    ) {
        let baseline_y = layout.baseline_y();
        fill_polygon.push(FillVertex {
            x: last.x,
            y: baseline_y,
        });
        fill_polygon.push(FillVertex {
            x: first.x,
            y: baseline_y,
        });
    }

    LineSeriesGeometry {
        segments,
        markers,
        fill_polygon,
    }
}
