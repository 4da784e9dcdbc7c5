use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::render::Color;

/// Persistent renderer configuration, read fresh at the start of each pass.
///
/// This type is serializable so host applications can persist/load series
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesRenderConfig {
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_background_stroke_width")]
    pub background_stroke_width: f64,
    #[serde(default)]
    pub draw_background: bool,
    #[serde(default)]
    pub draw_markers: bool,
    #[serde(default)]
    pub draw_marker_labels: bool,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
}

impl SeriesRenderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            background_color: default_background_color(),
            background_stroke_width: default_background_stroke_width(),
            draw_background: false,
            draw_markers: false,
            draw_marker_labels: false,
            marker_radius: default_marker_radius(),
        }
    }

    /// Sets the fill/marker-disc background color.
    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Sets the outline stroke width of the baseline fill polygon.
    #[must_use]
    pub fn with_background_stroke_width(mut self, width: f64) -> Self {
        self.background_stroke_width = width;
        self
    }

    /// Enables or disables the baseline fill polygon.
    #[must_use]
    pub fn with_draw_background(mut self, enabled: bool) -> Self {
        self.draw_background = enabled;
        self
    }

    /// Enables or disables per-point marker discs.
    #[must_use]
    pub fn with_draw_markers(mut self, enabled: bool) -> Self {
        self.draw_markers = enabled;
        self
    }

    /// Enables or disables index labels inside marker discs.
    #[must_use]
    pub fn with_draw_marker_labels(mut self, enabled: bool) -> Self {
        self.draw_marker_labels = enabled;
        self
    }

    /// Sets the marker disc radius, which also sets the label font size.
    #[must_use]
    pub fn with_marker_radius(mut self, radius: f64) -> Self {
        self.marker_radius = radius;
        self
    }

    /// Opt-in diagnostic for hosts; the render path never calls this.
    pub fn validate(self) -> GraphResult<()> {
        if !self.marker_radius.is_finite() || self.marker_radius <= 0.0 {
            return Err(GraphError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.background_stroke_width.is_finite() || self.background_stroke_width < 0.0 {
            return Err(GraphError::InvalidData(
                "background stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.background_color.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> GraphResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidData(format!("failed to parse config: {e}")))
    }
}

impl Default for SeriesRenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_background_color() -> Color {
    // Dark blue-gray at roughly half opacity.
    Color::from_rgba8(20, 40, 60, 128)
}

fn default_background_stroke_width() -> f64 {
    4.0
}

fn default_marker_radius() -> f64 {
    10.0
}
