pub mod layout;
pub mod line_series;
pub mod types;

pub use layout::PlotLayout;
pub use line_series::{
    FillVertex, LineSegment, LineSeriesGeometry, MarkerPoint, ProjectionOptions,
    project_line_geometry,
};
pub use types::{DataPoint, Viewport};
