use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::stats::SeriesStats;
use crate::core::types::Series;

/// Rule deriving the single reference value of one projection pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReferenceRule {
    /// Arithmetic mean of all present values.
    #[default]
    Mean,
    /// Caller-supplied constant, commonly the first present value.
    FixedBaseline(f64),
}

impl ReferenceRule {
    /// Baseline anchored at the first present sample, `None` for an all-absent series.
    #[must_use]
    pub fn first_present(series: &Series) -> Option<Self> {
        series.first_present().map(Self::FixedBaseline)
    }

    /// Resolves the reference value for a series with the given stats.
    ///
    /// A non-finite fixed baseline cannot classify anything, so the mean is
    /// used instead.
    #[must_use]
    pub fn resolve(self, stats: &SeriesStats) -> f64 {
        match self {
            Self::Mean => stats.mean,
            Self::FixedBaseline(value) if value.is_finite() => value,
            Self::FixedBaseline(value) => {
                warn!(
                    baseline = value,
                    mean = stats.mean,
                    "non-finite fixed baseline, falling back to mean"
                );
                stats.mean
            }
        }
    }
}

/// Which side of the reference value a sample or stroke lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Above,
    Below,
}

impl Side {
    /// Classifies a value against the reference. Equality is `Above`.
    #[must_use]
    pub fn classify(value: f64, reference: f64) -> Self {
        if value >= reference {
            Self::Above
        } else {
            Self::Below
        }
    }
}
