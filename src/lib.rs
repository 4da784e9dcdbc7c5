//! linegraph-rs: line-series chart rendering engine.
//!
//! This crate splits deterministic series geometry (`core`), backend-agnostic
//! draw primitives (`render`), and the host-facing renderer facade (`api`) so
//! any 2D drawing backend can consume the exact same projected output.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{LineSeriesRenderer, SeriesRenderConfig, SeriesStyle};
pub use error::{GraphError, GraphResult};
