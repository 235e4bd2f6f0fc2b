use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace};

use crate::core::reference::{ReferenceRule, Side};
use crate::core::scale::{SeriesScale, half_difference};
use crate::core::stats::SeriesStats;
use crate::core::types::{PixelPoint, Series, Viewport};

/// One present sample mapped to pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedSample {
    pub index: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub side: Side,
}

impl ProjectedSample {
    #[must_use]
    pub fn point(self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }
}

/// One stroke of the polyline, colored by the side it lies on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub side: Side,
}

impl SideSegment {
    #[must_use]
    pub fn new(start: PixelPoint, end: PixelPoint, side: Side) -> Self {
        Self {
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
            side,
        }
    }

    #[must_use]
    pub fn start(self) -> PixelPoint {
        PixelPoint::new(self.x1, self.y1)
    }

    #[must_use]
    pub fn end(self) -> PixelPoint {
        PixelPoint::new(self.x2, self.y2)
    }
}

/// Closed fill polygon for one contiguous same-side run.
///
/// `vertices` is `[(p0.x, ref_y), p0, .., pk, (pk.x, ref_y)]`: the run itself
/// framed by its projection onto the reference line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillPolygon {
    pub side: Side,
    pub vertices: Vec<PixelPoint>,
}

impl FillPolygon {
    fn close_run(side: Side, run: Vec<PixelPoint>, reference_y: f64) -> Self {
        let mut vertices = Vec::with_capacity(run.len() + 2);
        if let (Some(first), Some(last)) = (run.first().copied(), run.last().copied()) {
            vertices.push(PixelPoint::new(first.x, reference_y));
            vertices.extend(run);
            vertices.push(PixelPoint::new(last.x, reference_y));
        }
        Self { side, vertices }
    }

    /// The run points without the two reference-line closing vertices.
    #[must_use]
    pub fn run(&self) -> &[PixelPoint] {
        if self.vertices.len() < 2 {
            return &[];
        }
        &self.vertices[1..self.vertices.len() - 1]
    }
}

/// Everything a renderer needs to draw one threshold-relative chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdGeometry {
    pub pixel_points: Vec<ProjectedSample>,
    pub reference_value: Option<f64>,
    pub reference_y: Option<f64>,
    pub segments: Vec<SideSegment>,
    pub above_areas: Vec<FillPolygon>,
    pub below_areas: Vec<FillPolygon>,
    pub stats: Option<SeriesStats>,
}

impl ThresholdGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            pixel_points: Vec::new(),
            reference_value: None,
            reference_y: None,
            segments: Vec::new(),
            above_areas: Vec::new(),
            below_areas: Vec::new(),
            stats: None,
        }
    }

    /// `true` when the series had no present sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixel_points.is_empty()
    }

    /// Above and below polygons merged back into series order.
    #[must_use]
    pub fn areas_in_order(&self) -> Vec<&FillPolygon> {
        let mut areas: Vec<&FillPolygon> =
            self.above_areas.iter().chain(&self.below_areas).collect();
        areas.sort_by(|lhs, rhs| {
            let lhs_x = lhs.vertices.first().map_or(f64::NAN, |v| v.x);
            let rhs_x = rhs.vertices.first().map_or(f64::NAN, |v| v.x);
            lhs_x.total_cmp(&rhs_x)
        });
        areas
    }
}

/// Projects a series into threshold-relative line and fill geometry.
///
/// Total over all inputs: an all-absent series yields [`ThresholdGeometry::empty`],
/// flat series and degenerate viewports still yield finite coordinates.
#[must_use]
pub fn project_threshold_geometry(
    series: &Series,
    rule: ReferenceRule,
    viewport: Viewport,
) -> ThresholdGeometry {
    let Some(stats) = SeriesStats::from_series(series) else {
        debug!(len = series.len(), "series has no present samples");
        return ThresholdGeometry::empty();
    };

    if viewport.sanitized().is_degenerate() {
        debug!(
            width = viewport.width,
            height = viewport.height,
            padding = viewport.padding,
            "padding leaves no plot area, projecting anyway"
        );
    }
    if stats.min == stats.max {
        debug!(value = stats.min, "flat series, substituting unit value range");
    }

    let scale = SeriesScale::new(series.len(), stats.min, stats.max, viewport);
    let reference_value = rule.resolve(&stats);
    let reference_y = scale.value_to_pixel(reference_value);

    let mut pixel_points = Vec::with_capacity(stats.count);
    let mut segments = Vec::with_capacity(stats.count.saturating_sub(1) * 2);
    let mut runs = RunAccumulator::new(reference_y);
    let mut previous: Option<ProjectedSample> = None;

    for (index, value) in series.values().iter().enumerate() {
        let Some(value) = *value else {
            if previous.take().is_some() {
                runs.break_at_gap();
            }
            continue;
        };

        let sample = ProjectedSample {
            index,
            value,
            x: scale.index_to_pixel(index),
            y: scale.value_to_pixel(value),
            side: Side::classify(value, reference_value),
        };

        match previous {
            None => runs.start(sample.side, sample.point()),
            Some(prev) if prev.side == sample.side => {
                segments.push(SideSegment::new(prev.point(), sample.point(), sample.side));
                runs.extend(sample.point());
            }
            Some(prev) => {
                let crossing = crossing_point(prev, sample, reference_value, reference_y);
                segments.extend(split_at_crossing(prev, sample, crossing));
                runs.cross(crossing, sample.side, sample.point());
            }
        }

        pixel_points.push(sample);
        previous = Some(sample);
    }

    let (above_areas, below_areas) = runs.finish();

    trace!(
        len = series.len(),
        present = stats.count,
        segments = segments.len(),
        above = above_areas.len(),
        below = below_areas.len(),
        "projected threshold geometry"
    );

    ThresholdGeometry {
        pixel_points,
        reference_value: Some(reference_value),
        reference_y: Some(reference_y),
        segments,
        above_areas,
        below_areas,
        stats: Some(stats),
    }
}

/// Interpolates where the series meets the reference between two samples on
/// different sides.
///
/// `t` is computed in value space on halved operands, so opposite extremes do
/// not overflow; `y` is the shared `reference_y` so the point sits exactly on
/// the reference line.
fn crossing_point(
    from: ProjectedSample,
    to: ProjectedSample,
    reference_value: f64,
    reference_y: f64,
) -> PixelPoint {
    let t = half_difference(reference_value, from.value) / half_difference(to.value, from.value);
    let t = if t.is_finite() {
        t.clamp(0.0, 1.0)
    } else {
        0.5
    };
    PixelPoint::new(from.x + t * (to.x - from.x), reference_y)
}

fn split_at_crossing(
    from: ProjectedSample,
    to: ProjectedSample,
    crossing: PixelPoint,
) -> SmallVec<[SideSegment; 2]> {
    smallvec![
        SideSegment::new(from.point(), crossing, from.side),
        SideSegment::new(crossing, to.point(), to.side),
    ]
}

/// Collects same-side runs and turns finished ones into fill polygons.
struct RunAccumulator {
    reference_y: f64,
    current: Option<(Side, Vec<PixelPoint>)>,
    above: Vec<FillPolygon>,
    below: Vec<FillPolygon>,
}

impl RunAccumulator {
    fn new(reference_y: f64) -> Self {
        Self {
            reference_y,
            current: None,
            above: Vec::new(),
            below: Vec::new(),
        }
    }

    fn start(&mut self, side: Side, point: PixelPoint) {
        self.close();
        self.current = Some((side, vec![point]));
    }

    fn extend(&mut self, point: PixelPoint) {
        if let Some((_, points)) = self.current.as_mut() {
            points.push(point);
        }
    }

    /// Ends the active run at `crossing` and seeds the next one with the
    /// same point, so both polygons share the exact vertex.
    fn cross(&mut self, crossing: PixelPoint, next_side: Side, next: PixelPoint) {
        self.extend(crossing);
        self.close();
        self.current = Some((next_side, vec![crossing, next]));
    }

    fn break_at_gap(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        let Some((side, points)) = self.current.take() else {
            return;
        };
        // A lone point encloses no area.
        if points.len() < 2 {
            return;
        }
        let polygon = FillPolygon::close_run(side, points, self.reference_y);
        match side {
            Side::Above => self.above.push(polygon),
            Side::Below => self.below.push(polygon),
        }
    }

    fn finish(mut self) -> (Vec<FillPolygon>, Vec<FillPolygon>) {
        self.close();
        (self.above, self.below)
    }
}
