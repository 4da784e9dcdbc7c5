use serde::{Deserialize, Serialize};

/// Pixel-space plot placement and data-domain window for one render pass.
///
/// The owning graph container computes these values from the full dataset and
/// the widget's measured bounds, then passes them in per call. `range_x` and
/// `range_y` must be non-zero: the mapping divides by them without guarding,
/// so a zero range yields non-finite screen coordinates that flow through to
/// the drawing backend unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub graph_width_px: f64,
    pub graph_height_px: f64,
    pub border_px: f64,
    pub min_x: f64,
    pub min_y: f64,
    pub range_x: f64,
    pub range_y: f64,
    pub horizontal_start_px: f64,
}

impl PlotLayout {
    /// Creates a layout for a plot area of the given size with a unit data
    /// window anchored at the origin.
    #[must_use]
    pub fn new(graph_width_px: f64, graph_height_px: f64) -> Self {
        Self {
            graph_width_px,
            graph_height_px,
            border_px: 0.0,
            min_x: 0.0,
            min_y: 0.0,
            range_x: 1.0,
            range_y: 1.0,
            horizontal_start_px: 0.0,
        }
    }

    /// Sets the top/bottom border thickness in pixels.
    #[must_use]
    pub fn with_border(mut self, border_px: f64) -> Self {
        self.border_px = border_px;
        self
    }

    /// Sets the horizontal data window.
    #[must_use]
    pub fn with_x_window(mut self, min_x: f64, range_x: f64) -> Self {
        self.min_x = min_x;
        self.range_x = range_x;
        self
    }

    /// Sets the vertical data window.
    #[must_use]
    pub fn with_y_window(mut self, min_y: f64, range_y: f64) -> Self {
        self.min_y = min_y;
        self.range_y = range_y;
        self
    }

    /// Sets the left edge of the plot area on the surface.
    #[must_use]
    pub fn with_horizontal_start(mut self, horizontal_start_px: f64) -> Self {
        self.horizontal_start_px = horizontal_start_px;
        self
    }

    /// Screen X for a data x value.
    #[must_use]
    pub fn screen_x(self, x: f64) -> f64 {
        let norm_x = (x - self.min_x) / self.range_x;
        let pixel_x = self.graph_width_px * norm_x;
        pixel_x + self.horizontal_start_px + 1.0
    }

    /// Screen Y for a data y value.
    ///
    /// The screen origin is top-left while the data origin is bottom-left, so
    /// the mapping inverts around the plot's bottom edge.
    #[must_use]
    pub fn screen_y(self, y: f64) -> f64 {
        let norm_y = (y - self.min_y) / self.range_y;
        let pixel_y = self.graph_height_px * norm_y;
        (self.border_px - pixel_y) + self.graph_height_px
    }

    /// Screen Y of the plot's bottom edge, used to close fill geometry.
    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.graph_height_px + self.border_px
    }

    /// Returns a copy with the plot window shrunk so marker discs at the first
    /// and last point stay inside the horizontal bounds.
    #[must_use]
    pub fn with_marker_inset(mut self, marker_radius: f64, line_thickness: f64) -> Self {
        self.horizontal_start_px += marker_radius;
        self.graph_width_px -= 2.0 * marker_radius + line_thickness;
        self
    }
}
