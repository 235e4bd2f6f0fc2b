use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;

/// How many plot heights above or below the plot area a projected value may land.
pub const OFFSCREEN_LIMIT: f64 = 1.0e6;

/// Affine mapping from `(index, value)` to pixel space for one series.
///
/// Values map top-down (`max` at `padding`, `min` at `height - padding`) and
/// indices map left-to-right with a constant step. Construction is total:
/// a flat value range is replaced by `1` and the index step denominator never
/// drops below `1`.
///
/// Value arithmetic runs on halved operands so spans wider than `f64::MAX`
/// (e.g. `[-1e308, 1e308]`) stay finite. Values far outside the domain are
/// pinned to [`OFFSCREEN_LIMIT`] plot heights beyond the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesScale {
    viewport: Viewport,
    min: f64,
    max: f64,
    /// Half of the value range, `0.5` for flat series.
    half_range: f64,
    x_step: f64,
}

impl SeriesScale {
    /// `len` is the number of index slots in the series, absent samples included.
    #[must_use]
    pub fn new(len: usize, min: f64, max: f64, viewport: Viewport) -> Self {
        let viewport = viewport.sanitized();
        let (min, max) = if min <= max { (min, max) } else { (max, min) };

        let raw_half_range = half_difference(max, min);
        let half_range = if raw_half_range.is_finite() && raw_half_range > 0.0 {
            raw_half_range
        } else {
            0.5
        };

        let step_denominator = len.saturating_sub(1).max(1) as f64;
        let x_step = viewport.plot_width() / step_denominator;

        Self {
            viewport,
            min,
            max,
            half_range,
            x_step,
        }
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Range used as the value divisor; `1` for flat series, saturating at
    /// `f64::MAX` when the span is not representable.
    #[must_use]
    pub fn value_range(self) -> f64 {
        (self.half_range * 2.0).min(f64::MAX)
    }

    #[must_use]
    pub fn x_step(self) -> f64 {
        self.x_step
    }

    #[must_use]
    pub fn index_to_pixel(self, index: usize) -> f64 {
        self.viewport.padding + index as f64 * self.x_step
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        let t = (half_difference(self.max, value) / self.half_range)
            .clamp(-OFFSCREEN_LIMIT, OFFSCREEN_LIMIT + 1.0);
        (self.viewport.padding + t * self.viewport.plot_height()).clamp(-f64::MAX, f64::MAX)
    }

    /// Inverse of [`Self::value_to_pixel`]. Returns `max` when the plot height is zero.
    #[must_use]
    pub fn pixel_to_value(self, y: f64) -> f64 {
        let plot_height = self.viewport.plot_height();
        if plot_height == 0.0 {
            return self.max;
        }
        let t = (y - self.viewport.padding) / plot_height;
        (self.max * 0.5 - t * self.half_range) * 2.0
    }
}

/// `(a - b) / 2` without overflowing for operands of opposite sign.
///
/// Halving is exact for normal floats, so results match `a - b` scaled by one half.
pub(crate) fn half_difference(a: f64, b: f64) -> f64 {
    a * 0.5 - b * 0.5
}
