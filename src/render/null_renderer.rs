use crate::error::GraphResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It records per-kind primitive counts without validating the frame: the
/// backend contract is to accept whatever geometry arrives, including
/// non-finite coordinates from degenerate layout ranges.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_circle_count: usize,
    pub last_polygon_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        self.last_line_count = frame.lines.len();
        self.last_circle_count = frame.circles.len();
        self.last_polygon_count = frame.polygons.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
