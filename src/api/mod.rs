mod config;

pub use config::SeriesRenderConfig;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{DataPoint, PlotLayout, ProjectionOptions, Viewport, project_line_geometry};
use crate::error::GraphResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

/// Per-call stroke and label styling for one series.
///
/// Passed by value into each render call and never retained, so style changes
/// between passes cannot leak into an in-flight frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub line_thickness: f64,
    pub line_color: Color,
    pub text_color: Color,
}

impl SeriesStyle {
    #[must_use]
    pub fn new(line_thickness: f64, line_color: Color, text_color: Color) -> Self {
        Self {
            line_thickness,
            line_color,
            text_color,
        }
    }
}

/// Line-series renderer facade consumed by the owning graph container.
///
/// The renderer holds only configuration and metadata between passes; point
/// data, layout, and style arrive fresh with every call and are never
/// retained.
#[derive(Debug, Clone, Default)]
pub struct LineSeriesRenderer {
    config: SeriesRenderConfig,
    series_metadata: IndexMap<String, String>,
}

impl LineSeriesRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SeriesRenderConfig::new())
    }

    #[must_use]
    pub fn with_config(config: SeriesRenderConfig) -> Self {
        Self {
            config,
            series_metadata: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> SeriesRenderConfig {
        self.config
    }

    #[must_use]
    pub fn background_color(&self) -> Color {
        self.config.background_color
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.config.background_color = color;
    }

    #[must_use]
    pub fn background_stroke_width(&self) -> f64 {
        self.config.background_stroke_width
    }

    pub fn set_background_stroke_width(&mut self, width: f64) {
        self.config.background_stroke_width = width;
    }

    #[must_use]
    pub fn marker_radius(&self) -> f64 {
        self.config.marker_radius
    }

    pub fn set_marker_radius(&mut self, radius: f64) {
        self.config.marker_radius = radius;
    }

    #[must_use]
    pub fn draw_background(&self) -> bool {
        self.config.draw_background
    }

    pub fn set_draw_background(&mut self, enabled: bool) {
        self.config.draw_background = enabled;
    }

    #[must_use]
    pub fn draw_markers(&self) -> bool {
        self.config.draw_markers
    }

    pub fn set_draw_markers(&mut self, enabled: bool) {
        self.config.draw_markers = enabled;
    }

    #[must_use]
    pub fn draw_marker_labels(&self) -> bool {
        self.config.draw_marker_labels
    }

    pub fn set_draw_marker_labels(&mut self, enabled: bool) {
        self.config.draw_marker_labels = enabled;
    }

    /// Sets or updates deterministic series metadata.
    ///
    /// `IndexMap` is used to preserve insertion order for stable snapshots.
    pub fn set_series_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.series_metadata.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn series_metadata(&self) -> &IndexMap<String, String> {
        &self.series_metadata
    }

    /// Appends this series' primitives for one pass into `frame`.
    ///
    /// The fill polygon lands in its own primitive list; backends draw
    /// polygons beneath lines, circles, and texts.
    pub fn append_series_primitives(
        &self,
        frame: &mut RenderFrame,
        points: &[DataPoint],
        layout: PlotLayout,
        style: SeriesStyle,
    ) {
        let options = ProjectionOptions {
            marker_radius: self.config.draw_markers.then_some(self.config.marker_radius),
            line_thickness: style.line_thickness,
            build_fill: self.config.draw_background,
        };
        let geometry = project_line_geometry(points, layout, options);

        if !geometry.fill_polygon.is_empty() {
            frame.polygons.push(PolygonPrimitive::new(
                geometry
                    .fill_polygon
                    .iter()
                    .map(|vertex| (vertex.x, vertex.y))
                    .collect(),
                self.config.background_color,
                self.config.background_stroke_width,
            ));
        }

        for marker in &geometry.markers {
            frame.circles.push(CirclePrimitive::new(
                marker.x,
                marker.y,
                self.config.marker_radius,
                0.0,
                self.config.background_color,
                true,
            ));
            frame.circles.push(CirclePrimitive::new(
                marker.x,
                marker.y,
                self.config.marker_radius,
                style.line_thickness,
                style.line_color,
                false,
            ));
            if self.config.draw_marker_labels {
                let font_size = self.config.marker_radius;
                frame.texts.push(TextPrimitive::new(
                    marker.label_index.to_string(),
                    marker.x,
                    marker.y - font_size * 0.5,
                    font_size,
                    style.text_color,
                    TextHAlign::Center,
                ));
            }
        }

        for segment in &geometry.segments {
            frame.lines.push(LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                style.line_thickness,
                style.line_color,
            ));
        }

        trace!(
            points = points.len(),
            segments = geometry.segments.len(),
            markers = geometry.markers.len(),
            fill_vertices = geometry.fill_polygon.len(),
            "appended line series primitives"
        );
    }

    /// Renders one series pass through `renderer` on a fresh frame.
    ///
    /// A new `RenderFrame` is built per call, so configuration changes between
    /// passes always take effect on the next pass. Errors only surface from
    /// the backend.
    pub fn render_series<R: Renderer>(
        &self,
        renderer: &mut R,
        viewport: Viewport,
        points: &[DataPoint],
        layout: PlotLayout,
        style: SeriesStyle,
    ) -> GraphResult<()> {
        let mut frame = RenderFrame::new(viewport);
        self.append_series_primitives(&mut frame, points, layout, style);
        renderer.render(&frame)
    }
}
