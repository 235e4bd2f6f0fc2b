use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::primitives::decimal_to_f64;
use crate::error::ChartResult;

/// Pixel area a chart is projected into.
///
/// `padding` is a uniform margin reserved for axes and labels on every side,
/// so the plot area spans `width - 2 * padding` by `height - 2 * padding`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub padding: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Width of the plot area. Negative when padding eats the whole viewport.
    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.width - 2.0 * self.padding
    }

    /// Height of the plot area. Negative when padding eats the whole viewport.
    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// `true` when padding leaves no positive plot area on either axis.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.plot_width() <= 0.0 || self.plot_height() <= 0.0
    }

    /// `true` when every field is finite and width/height are positive.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.padding.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && self.padding >= 0.0
    }

    /// Replaces non-finite or negative fields with `0`.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            width: non_negative_or_zero(self.width),
            height: non_negative_or_zero(self.height),
            padding: non_negative_or_zero(self.padding),
        }
    }
}

fn non_negative_or_zero(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Vertex in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ordered sequence of samples where position is time.
///
/// Absent samples (`None`) are kept in place so they never shift the
/// index-to-pixel mapping of their neighbours. Non-finite inputs are stored as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Option<f64>>", into = "Vec<Option<f64>>")]
pub struct Series {
    values: Vec<Option<f64>>,
}

impl Series {
    #[must_use]
    pub fn new(values: Vec<Option<f64>>) -> Self {
        let mut dropped = 0usize;
        let values = values
            .into_iter()
            .map(|value| match value {
                Some(v) if !v.is_finite() => {
                    dropped += 1;
                    None
                }
                other => other,
            })
            .collect::<Vec<_>>();
        if dropped > 0 {
            warn!(
                dropped,
                len = values.len(),
                "non-finite samples stored as absent"
            );
        }
        Self { values }
    }

    /// Builds a gap-free series.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        Self::new(values.iter().copied().map(Some).collect())
    }

    /// Builds a series from backend decimal values, `None` marking a missing sample.
    pub fn from_decimals(values: &[Option<Decimal>]) -> ChartResult<Self> {
        let mut converted = Vec::with_capacity(values.len());
        for value in values {
            let value = match value {
                Some(decimal) => Some(decimal_to_f64(*decimal, "series value")?),
                None => None,
            };
            converted.push(value);
        }
        Ok(Self::new(converted))
    }

    /// Number of index slots, including absent ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Iterates `(index, value)` over present samples only.
    pub fn present(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(index, value)| value.map(|v| (index, v)))
    }

    #[must_use]
    pub fn first_present(&self) -> Option<f64> {
        self.values.iter().find_map(|value| *value)
    }

    #[must_use]
    pub fn last_present(&self) -> Option<f64> {
        self.values.iter().rev().find_map(|value| *value)
    }
}

impl From<Vec<Option<f64>>> for Series {
    fn from(values: Vec<Option<f64>>) -> Self {
        Self::new(values)
    }
}

impl From<Series> for Vec<Option<f64>> {
    fn from(series: Series) -> Self {
        series.values
    }
}

impl FromIterator<Option<f64>> for Series {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
