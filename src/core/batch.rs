use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::reference::ReferenceRule;
use crate::core::segmentation::{ThresholdGeometry, project_threshold_geometry};
use crate::core::types::{Series, Viewport};

/// Inputs of one independent chart projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub series: Series,
    #[serde(default)]
    pub rule: ReferenceRule,
    pub viewport: Viewport,
}

impl ProjectionRequest {
    #[must_use]
    pub fn new(series: Series, rule: ReferenceRule, viewport: Viewport) -> Self {
        Self {
            series,
            rule,
            viewport,
        }
    }

    #[must_use]
    pub fn project(&self) -> ThresholdGeometry {
        project_threshold_geometry(&self.series, self.rule, self.viewport)
    }
}

/// Projects every request; output order matches input order.
///
/// Requests share nothing, so with the `parallel-projection` feature they are
/// fanned out over the rayon pool.
#[must_use]
pub fn project_batch(requests: &[ProjectionRequest]) -> Vec<ThresholdGeometry> {
    debug!(charts = requests.len(), "projecting chart batch");

    #[cfg(feature = "parallel-projection")]
    {
        use rayon::prelude::*;
        requests.par_iter().map(ProjectionRequest::project).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        requests.iter().map(ProjectionRequest::project).collect()
    }
}
