pub mod axis_ticks;
pub mod batch;
pub mod primitives;
pub mod reference;
pub mod scale;
pub mod segmentation;
pub mod stats;
pub mod types;

pub use axis_ticks::{AxisTick, AxisTickConfig, index_axis_ticks, value_axis_ticks};
pub use batch::{ProjectionRequest, project_batch};
pub use hit_test::{nearest_sample, nearest_sample_within};
pub use reference::{ReferenceRule, Side};
pub use scale::SeriesScale;
pub use segmentation::{
    FillPolygon, ProjectedSample, SideSegment, ThresholdGeometry, project_threshold_geometry,
};
pub use stats::SeriesStats;
pub use types::{PixelPoint, Series, Viewport};
