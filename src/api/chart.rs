use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::core::{ReferenceRule, Series, ThresholdGeometry, Viewport, project_threshold_geometry};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::{SeriesCatalog, ThresholdChartConfig, build_threshold_frame};

/// One threshold-relative chart bound to a rendering backend.
///
/// The chart keeps only its renderer and configuration. Every call derives
/// geometry from the series passed in, so the same chart can draw any number
/// of series without carrying state between them.
pub struct ThresholdChart<R: Renderer> {
    renderer: R,
    config: ThresholdChartConfig,
}

impl<R: Renderer> ThresholdChart<R> {
    pub fn new(renderer: R, config: ThresholdChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> &ThresholdChartConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Replaces the whole configuration after validating it.
    pub fn set_config(&mut self, config: ThresholdChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Resizes the chart, e.g. when the hosting panel changes size.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let mut config = self.config.clone();
        config.viewport = viewport;
        self.set_config(config)?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            padding = viewport.padding,
            "chart viewport updated"
        );
        Ok(())
    }

    pub fn set_reference_rule(&mut self, rule: ReferenceRule) -> ChartResult<()> {
        let config = self.config.clone().with_reference_rule(rule);
        self.set_config(config)
    }

    /// Projects a series with the configured rule and viewport.
    #[must_use]
    pub fn project(&self, series: &Series) -> ThresholdGeometry {
        project_threshold_geometry(series, self.config.reference_rule, self.config.viewport)
    }

    /// Projects a series and materializes the draw frame without rendering it.
    #[must_use]
    pub fn build_frame(
        &self,
        series: &Series,
        times: Option<&[DateTime<Utc>]>,
    ) -> (ThresholdGeometry, RenderFrame) {
        let geometry = self.project(series);
        let frame = build_threshold_frame(&geometry, series, times, &self.config);
        (geometry, frame)
    }

    /// Projects, builds and hands one frame to the renderer.
    pub fn render(&mut self, series: &Series) -> ChartResult<ThresholdGeometry> {
        self.render_with_times(series, None)
    }

    /// Like [`Self::render`] with timestamps labelling the index axis.
    pub fn render_with_times(
        &mut self,
        series: &Series,
        times: Option<&[DateTime<Utc>]>,
    ) -> ChartResult<ThresholdGeometry> {
        let (geometry, frame) = self.build_frame(series, times);
        trace!(
            polygons = frame.polygons.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "rendering threshold frame"
        );
        self.renderer.render(&frame)?;
        Ok(geometry)
    }

    /// Renders the catalog entry selected by `key`.
    pub fn render_selected(
        &mut self,
        catalog: &SeriesCatalog,
        key: &str,
    ) -> ChartResult<ThresholdGeometry> {
        let series = catalog.require(key)?;
        self.render(series)
    }
}
