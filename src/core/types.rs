use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{GraphError, GraphResult};

/// Full drawing-surface size in pixels, carried by each render frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One sample of a series. Ordering is caller-defined; ascending x is assumed
/// for sensible visuals but never enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point from a sampled timestamp/value pair.
    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> GraphResult<Self> {
        Ok(Self {
            x: datetime_to_unix_seconds(time),
            y: decimal_to_f64(value, "value")?,
        })
    }
}

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> GraphResult<f64> {
    value.to_f64().ok_or_else(|| {
        GraphError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}
