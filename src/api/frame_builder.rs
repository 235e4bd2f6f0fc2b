use chrono::{DateTime, Utc};

use crate::core::{
    Series, SeriesScale, ThresholdGeometry, Viewport, index_axis_ticks, value_axis_ticks,
};
use crate::render::{LinePrimitive, PolygonPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::ThresholdChartConfig;

const VALUE_LABEL_GAP_PX: f64 = 4.0;
const INDEX_LABEL_GAP_PX: f64 = 2.0;

/// Materializes projected geometry into a backend-agnostic frame.
///
/// Paint order is fills, reference line, colored strokes, axis labels.
#[must_use]
pub fn build_threshold_frame(
    geometry: &ThresholdGeometry,
    series: &Series,
    times: Option<&[DateTime<Utc>]>,
    config: &ThresholdChartConfig,
) -> RenderFrame {
    let viewport = config.viewport;
    let mut frame = RenderFrame::new(viewport);

    for area in geometry.areas_in_order() {
        frame.polygons.push(PolygonPrimitive::new(
            area.vertices.clone(),
            config.palette.fill(area.side),
        ));
    }

    if config.reference_line.visible {
        if let Some(reference_y) = geometry.reference_y {
            frame.lines.push(reference_line(viewport, reference_y, config));
        }
    }

    frame.lines.extend(geometry.segments.iter().map(|segment| {
        LinePrimitive::new(
            segment.x1,
            segment.y1,
            segment.x2,
            segment.y2,
            config.stroke_width_px,
            config.palette.stroke(segment.side),
        )
    }));

    if config.show_axis_labels {
        if let Some(stats) = geometry.stats {
            let scale = SeriesScale::new(series.len(), stats.min, stats.max, viewport);
            push_axis_labels(&mut frame, scale, series.len(), times, config);
        }
    }

    frame
}

fn reference_line(
    viewport: Viewport,
    reference_y: f64,
    config: &ThresholdChartConfig,
) -> LinePrimitive {
    let viewport = viewport.sanitized();
    let style = config.reference_line;
    let line = LinePrimitive::new(
        viewport.padding,
        reference_y,
        viewport.width - viewport.padding,
        reference_y,
        style.stroke_width_px,
        style.color,
    );
    match style.dash {
        Some((dash, gap)) => line.dashed(dash, gap),
        None => line,
    }
}

fn push_axis_labels(
    frame: &mut RenderFrame,
    scale: SeriesScale,
    len: usize,
    times: Option<&[DateTime<Utc>]>,
    config: &ThresholdChartConfig,
) {
    let viewport = scale.viewport();
    let font_size = config.label_font_size_px;

    for tick in value_axis_ticks(scale, &config.value_axis)
        .into_iter()
        .filter(|tick| !tick.label.is_empty())
    {
        frame.texts.push(TextPrimitive::new(
            tick.label,
            viewport.padding - VALUE_LABEL_GAP_PX,
            tick.position_px,
            font_size,
            config.label_color,
            TextHAlign::Right,
        ));
    }

    let label_y = viewport.height - viewport.padding + font_size + INDEX_LABEL_GAP_PX;
    for tick in index_axis_ticks(scale, len, times, &config.index_axis)
        .into_iter()
        .filter(|tick| !tick.label.is_empty())
    {
        frame.texts.push(TextPrimitive::new(
            tick.label,
            tick.position_px,
            label_y,
            font_size,
            config.label_color,
            TextHAlign::Center,
        ));
    }
}
