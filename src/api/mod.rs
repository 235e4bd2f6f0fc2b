mod chart;
mod engine_config;
mod frame_builder;
mod json_contract;
mod series_catalog;

pub use chart::ThresholdChart;
pub use engine_config::{ReferenceLineStyle, ThresholdChartConfig};
pub use frame_builder::build_threshold_frame;
pub use json_contract::{THRESHOLD_GEOMETRY_JSON_SCHEMA_V1, ThresholdGeometryJsonContractV1};
pub use series_catalog::SeriesCatalog;
