//! threshold-chart: threshold-relative series geometry for dashboard charts.
//!
//! Given a series with optional gaps, a reference rule (running mean or a
//! fixed baseline) and a pixel viewport, the crate produces colored line
//! segments split at every crossing of the reference, closed above/below fill
//! polygons cut at the same interpolated points, and summary statistics.
//! Painting is left to a [`render::Renderer`] backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{SeriesCatalog, ThresholdChart, ThresholdChartConfig};
pub use crate::core::{
    ReferenceRule, Series, Side, ThresholdGeometry, Viewport, project_threshold_geometry,
};
pub use error::{ChartError, ChartResult};
