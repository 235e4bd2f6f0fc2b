use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::render::Color;

/// Stroke and fill colors for one side of the reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideStyle {
    pub stroke: Color,
    pub fill: Color,
}

impl SideStyle {
    /// Fill derived from the stroke at the given alpha.
    #[must_use]
    pub const fn from_stroke(stroke: Color, fill_alpha: f64) -> Self {
        Self {
            stroke,
            fill: stroke.with_alpha(fill_alpha),
        }
    }
}

/// Two-entry color lookup keyed by [`Side`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SidePalette {
    pub above: SideStyle,
    pub below: SideStyle,
}

impl SidePalette {
    #[must_use]
    pub const fn new(above: SideStyle, below: SideStyle) -> Self {
        Self { above, below }
    }

    #[must_use]
    pub fn style(&self, side: Side) -> SideStyle {
        match side {
            Side::Above => self.above,
            Side::Below => self.below,
        }
    }

    #[must_use]
    pub fn stroke(&self, side: Side) -> Color {
        self.style(side).stroke
    }

    #[must_use]
    pub fn fill(&self, side: Side) -> Color {
        self.style(side).fill
    }
}

impl Default for SidePalette {
    /// Green above, red below.
    fn default() -> Self {
        Self {
            above: SideStyle::from_stroke(Color::rgb(0.149, 0.651, 0.604), 0.28),
            below: SideStyle::from_stroke(Color::rgb(0.937, 0.325, 0.314), 0.28),
        }
    }
}
