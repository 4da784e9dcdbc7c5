use crate::core::Viewport;
use crate::error::{GraphError, GraphResult};
use crate::render::{CirclePrimitive, LinePrimitive, PolygonPrimitive, TextPrimitive};

/// Backend-agnostic scene for one series draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            circles: Vec::new(),
            polygons: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.polygons.push(polygon);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    /// Opt-in diagnostic for hosts and tests.
    ///
    /// The render path never calls this: malformed coordinates are the drawing
    /// backend's to clip or ignore.
    pub fn validate(&self) -> GraphResult<()> {
        if !self.viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.circles.is_empty()
            && self.polygons.is_empty()
            && self.texts.is_empty()
    }
}
