use serde::{Deserialize, Serialize};

use crate::core::primitives::is_valid_time_format;
use crate::core::{AxisTickConfig, ReferenceRule, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, SidePalette};

/// Style of the horizontal line drawn at the reference value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceLineStyle {
    pub visible: bool,
    pub color: Color,
    pub stroke_width_px: f64,
    /// Dash/gap lengths in pixels, `None` for a solid line.
    pub dash: Option<(f64, f64)>,
}

impl Default for ReferenceLineStyle {
    fn default() -> Self {
        Self {
            visible: true,
            color: Color::rgba(0.47, 0.49, 0.55, 0.9),
            stroke_width_px: 1.0,
            dash: Some((4.0, 4.0)),
        }
    }
}

/// Public chart configuration.
///
/// This type is serializable so the dashboard can persist/load chart setup
/// per view without inventing its own ad-hoc format. Every field except the
/// viewport has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub reference_rule: ReferenceRule,
    #[serde(default)]
    pub palette: SidePalette,
    #[serde(default = "default_stroke_width_px")]
    pub stroke_width_px: f64,
    #[serde(default)]
    pub reference_line: ReferenceLineStyle,
    #[serde(default = "default_show_axis_labels")]
    pub show_axis_labels: bool,
    #[serde(default = "AxisTickConfig::value_axis")]
    pub value_axis: AxisTickConfig,
    #[serde(default = "AxisTickConfig::index_axis")]
    pub index_axis: AxisTickConfig,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
}

impl ThresholdChartConfig {
    /// Creates a config with default styling and a mean reference.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            reference_rule: ReferenceRule::default(),
            palette: SidePalette::default(),
            stroke_width_px: default_stroke_width_px(),
            reference_line: ReferenceLineStyle::default(),
            show_axis_labels: default_show_axis_labels(),
            value_axis: AxisTickConfig::value_axis(),
            index_axis: AxisTickConfig::index_axis(),
            label_font_size_px: default_label_font_size_px(),
            label_color: default_label_color(),
        }
    }

    #[must_use]
    pub fn with_reference_rule(mut self, rule: ReferenceRule) -> Self {
        self.reference_rule = rule;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: SidePalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width_px: f64) -> Self {
        self.stroke_width_px = stroke_width_px;
        self
    }

    #[must_use]
    pub fn with_reference_line(mut self, style: ReferenceLineStyle) -> Self {
        self.reference_line = style;
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, show: bool) -> Self {
        self.show_axis_labels = show;
        self
    }

    #[must_use]
    pub fn with_value_axis(mut self, axis: AxisTickConfig) -> Self {
        self.value_axis = axis;
        self
    }

    #[must_use]
    pub fn with_index_axis(mut self, axis: AxisTickConfig) -> Self {
        self.index_axis = axis;
        self
    }

    /// Checks everything a renderer would reject later.
    ///
    /// Projection itself accepts any viewport; this is only about drawable output.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
                padding: self.viewport.padding,
            });
        }
        if !self.stroke_width_px.is_finite() || self.stroke_width_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.reference_line.stroke_width_px.is_finite()
            || self.reference_line.stroke_width_px <= 0.0
        {
            return Err(ChartError::InvalidData(
                "reference line width must be finite and > 0".to_owned(),
            ));
        }
        if let ReferenceRule::FixedBaseline(value) = self.reference_rule {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "fixed baseline must be finite".to_owned(),
                ));
            }
        }
        for axis in [&self.value_axis, &self.index_axis] {
            if axis.max_ticks < axis.min_ticks {
                return Err(ChartError::InvalidData(
                    "axis max_ticks must be >= min_ticks".to_owned(),
                ));
            }
            if !is_valid_time_format(&axis.time_format) {
                return Err(ChartError::InvalidData(format!(
                    "invalid axis time format `{}`",
                    axis.time_format
                )));
            }
        }

        for color in [
            self.palette.above.stroke,
            self.palette.above.fill,
            self.palette.below.stroke,
            self.palette.below.fill,
            self.reference_line.color,
            self.label_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    /// Parses and validates a config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_stroke_width_px() -> f64 {
    2.0
}

fn default_show_axis_labels() -> bool {
    true
}

fn default_label_font_size_px() -> f64 {
    11.0
}

fn default_label_color() -> Color {
    Color::rgb(0.36, 0.38, 0.44)
}
