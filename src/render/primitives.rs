use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channel values.
    #[must_use]
    pub const fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha as f64 / 255.0,
        )
    }

    pub fn validate(self) -> GraphResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GraphError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn ensure_finite(label: &str, values: &[f64]) -> GraphResult<()> {
    if values.iter().any(|value| !value.is_finite()) {
        return Err(GraphError::InvalidData(format!(
            "{label} coordinates must be finite"
        )));
    }
    Ok(())
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> GraphResult<()> {
        ensure_finite("line", &[self.x1, self.y1, self.x2, self.y2])?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(GraphError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one circle in pixel space, filled as a disc or stroked as
/// a ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub filled: bool,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(
        cx: f64,
        cy: f64,
        radius: f64,
        stroke_width: f64,
        color: Color,
        filled: bool,
    ) -> Self {
        Self {
            cx,
            cy,
            radius,
            stroke_width,
            color,
            filled,
        }
    }

    pub fn validate(self) -> GraphResult<()> {
        ensure_finite("circle", &[self.cx, self.cy])?;
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GraphError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.filled && (!self.stroke_width.is_finite() || self.stroke_width <= 0.0) {
            return Err(GraphError::InvalidData(
                "circle ring stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one filled polygon in pixel space.
///
/// The vertex list is treated as already closed; backends fill it as given and
/// additionally stroke the outline when `stroke_width` is positive.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub vertices: Vec<(f64, f64)>,
    pub fill_color: Color,
    pub stroke_width: f64,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(vertices: Vec<(f64, f64)>, fill_color: Color, stroke_width: f64) -> Self {
        Self {
            vertices,
            fill_color,
            stroke_width,
        }
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.vertices.len() < 3 {
            return Err(GraphError::InvalidData(
                "polygon requires at least 3 vertices".to_owned(),
            ));
        }
        for (x, y) in &self.vertices {
            ensure_finite("polygon", &[*x, *y])?;
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(GraphError::InvalidData(
                "polygon stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
///
/// `y` is the top edge of the laid-out text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.text.is_empty() {
            return Err(GraphError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        ensure_finite("text", &[self.x, self.y])?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
