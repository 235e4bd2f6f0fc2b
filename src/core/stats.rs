use serde::{Deserialize, Serialize};

use crate::core::types::Series;

/// Summary statistics over the present samples of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Value of the last present sample, not necessarily the last index.
    pub last: f64,
    /// Number of present samples.
    pub count: usize,
}

impl SeriesStats {
    /// Returns `None` when the series has no present sample.
    #[must_use]
    pub fn from_series(series: &Series) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut last = None;
        let mut count = 0usize;

        for (_, value) in series.present() {
            min = min.min(value);
            max = max.max(value);
            sum += value;
            last = Some(value);
            count += 1;
        }

        let last = last?;
        let mut mean = sum / count as f64;
        if !mean.is_finite() {
            // Sum overflowed; fall back to an incremental mean.
            mean = series
                .present()
                .enumerate()
                .fold(0.0, |acc, (i, (_, value))| acc + (value - acc) / (i + 1) as f64);
        }

        Some(Self {
            min,
            max,
            mean,
            last,
            count,
        })
    }
}
