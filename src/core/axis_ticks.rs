use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{format_fixed, format_timestamp};
use crate::core::scale::{SeriesScale, half_difference};

pub const VALUE_AXIS_TARGET_SPACING_PX: f64 = 40.0;
pub const VALUE_AXIS_MIN_SPACING_PX: f64 = 22.0;
pub const INDEX_AXIS_TARGET_SPACING_PX: f64 = 80.0;
pub const INDEX_AXIS_MIN_SPACING_PX: f64 = 56.0;

/// Tick density and label settings for one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisTickConfig {
    pub target_spacing_px: f64,
    pub min_spacing_px: f64,
    pub min_ticks: usize,
    pub max_ticks: usize,
    /// Decimals used by value labels.
    pub precision: usize,
    /// `chrono` format string used by timestamp labels.
    pub time_format: String,
}

impl AxisTickConfig {
    #[must_use]
    pub fn value_axis() -> Self {
        Self {
            target_spacing_px: VALUE_AXIS_TARGET_SPACING_PX,
            min_spacing_px: VALUE_AXIS_MIN_SPACING_PX,
            min_ticks: 2,
            max_ticks: 8,
            precision: 2,
            time_format: default_time_format(),
        }
    }

    #[must_use]
    pub fn index_axis() -> Self {
        Self {
            target_spacing_px: INDEX_AXIS_TARGET_SPACING_PX,
            min_spacing_px: INDEX_AXIS_MIN_SPACING_PX,
            min_ticks: 2,
            max_ticks: 10,
            precision: 0,
            time_format: default_time_format(),
        }
    }
}

impl Default for AxisTickConfig {
    fn default() -> Self {
        Self::value_axis()
    }
}

fn default_time_format() -> String {
    "%b %d".to_owned()
}

/// One labelled axis position in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position_px: f64,
    pub label: String,
}

/// Evenly spaced value ticks from `min` to `max`, positioned on the y axis.
///
/// A flat series yields a single tick.
#[must_use]
pub fn value_axis_ticks(scale: SeriesScale, config: &AxisTickConfig) -> Vec<AxisTick> {
    let (min, max) = scale.domain();
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return vec![AxisTick {
            value: min,
            position_px: scale.value_to_pixel(min),
            label: format_fixed(min, config.precision),
        }];
    }

    let span_px = scale.viewport().plot_height();
    let count = axis_tick_target_count(
        span_px,
        config.target_spacing_px,
        config.min_ticks,
        config.max_ticks,
    )
    .max(2);
    let candidates = (0..count)
        .map(|i| {
            let t = i as f64 / (count - 1) as f64;
            let value = (max * 0.5 - t * half_difference(max, min)) * 2.0;
            (value, scale.value_to_pixel(value))
        })
        .collect();

    select_ticks_with_min_spacing(candidates, config.min_spacing_px)
        .into_iter()
        .map(|(value, position_px)| AxisTick {
            value,
            position_px,
            label: format_fixed(value, config.precision),
        })
        .collect()
}

/// Index ticks along the x axis for a series with `len` slots.
///
/// When `times` covers an index the label is its formatted timestamp,
/// otherwise the index itself.
#[must_use]
pub fn index_axis_ticks(
    scale: SeriesScale,
    len: usize,
    times: Option<&[DateTime<Utc>]>,
    config: &AxisTickConfig,
) -> Vec<AxisTick> {
    if len == 0 {
        return Vec::new();
    }

    let span_px = scale.viewport().plot_width();
    let count = axis_tick_target_count(
        span_px,
        config.target_spacing_px,
        config.min_ticks,
        config.max_ticks,
    )
    .min(len);

    let mut indices: Vec<usize> = if count <= 1 {
        vec![0]
    } else {
        (0..count)
            .map(|i| ((i * (len - 1)) as f64 / (count - 1) as f64).round() as usize)
            .collect()
    };
    indices.dedup();

    let candidates = indices
        .into_iter()
        .map(|index| (index as f64, scale.index_to_pixel(index)))
        .collect();

    select_ticks_with_min_spacing(candidates, config.min_spacing_px)
        .into_iter()
        .map(|(value, position_px)| {
            let index = value as usize;
            let label = match times.and_then(|times| times.get(index)) {
                Some(time) => format_timestamp(*time, &config.time_format),
                None => index.to_string(),
            };
            AxisTick {
                value,
                position_px,
                label,
            }
        })
        .collect()
}

pub(crate) fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    let max_ticks = max_ticks.max(min_ticks);
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Keeps ticks at least `min_spacing_px` apart, preferring to keep the last
/// tick over its crowded predecessor.
pub(crate) fn select_ticks_with_min_spacing(
    mut ticks: Vec<(f64, f64)>,
    min_spacing_px: f64,
) -> Vec<(f64, f64)> {
    if ticks.is_empty() {
        return ticks;
    }

    ticks.sort_by(|left, right| left.1.total_cmp(&right.1));
    if ticks.len() == 1 || !min_spacing_px.is_finite() || min_spacing_px <= 0.0 {
        return ticks;
    }

    let mut selected: Vec<(f64, f64)> = Vec::with_capacity(ticks.len());
    for tick in ticks.iter().copied() {
        match selected.last() {
            Some(last) if tick.1 - last.1 < min_spacing_px => {}
            _ => selected.push(tick),
        }
    }

    let last_tick = ticks[ticks.len() - 1];
    let selected_len = selected.len();
    if selected[selected_len - 1] != last_tick {
        if selected_len == 1 {
            // On very narrow axes a single label is clearer than overlapping pairs.
            selected[0] = last_tick;
        } else if last_tick.1 - selected[selected_len - 2].1 >= min_spacing_px {
            selected[selected_len - 1] = last_tick;
        }
    }

    selected
}
