use proptest::prelude::*;
use threshold_chart::core::{
    PixelPoint, ReferenceRule, Series, SeriesScale, Side, Viewport, project_threshold_geometry,
};

fn series_strategy() -> impl Strategy<Value = Vec<Option<f64>>> {
    proptest::collection::vec(proptest::option::weighted(0.85, -1_000.0f64..1_000.0), 1..64)
}

fn rule_strategy() -> impl Strategy<Value = ReferenceRule> {
    prop_oneof![
        Just(ReferenceRule::Mean),
        (-1_200.0f64..1_200.0).prop_map(ReferenceRule::FixedBaseline),
    ]
}

fn extreme_series_strategy() -> impl Strategy<Value = Vec<Option<f64>>> {
    let value = proptest::num::f64::NORMAL | proptest::num::f64::ZERO;
    proptest::collection::vec(proptest::option::weighted(0.9, value), 1..32)
}

fn extreme_rule_strategy() -> impl Strategy<Value = ReferenceRule> {
    prop_oneof![
        Just(ReferenceRule::Mean),
        (proptest::num::f64::NORMAL | proptest::num::f64::ZERO)
            .prop_map(ReferenceRule::FixedBaseline),
    ]
}

proptest! {
    #[test]
    fn segments_follow_present_pairs_and_share_crossings(
        values in series_strategy(),
        rule in rule_strategy(),
    ) {
        let series = Series::new(values);
        let viewport = Viewport::new(1200.0, 700.0, 32.0);
        let geometry = project_threshold_geometry(&series, rule, viewport);

        let present = series.present().count();
        prop_assert_eq!(geometry.pixel_points.len(), present);
        if present == 0 {
            prop_assert!(geometry.is_empty());
            prop_assert!(geometry.segments.is_empty());
            return Ok(());
        }

        let reference = geometry.reference_value.expect("reference value");
        let reference_y = geometry.reference_y.expect("reference y");

        let mut cursor = 0usize;
        for pair in geometry.pixel_points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if b.index != a.index + 1 {
                continue;
            }
            if a.side == b.side {
                let segment = geometry.segments[cursor];
                prop_assert_eq!(segment.start(), a.point());
                prop_assert_eq!(segment.end(), b.point());
                prop_assert_eq!(segment.side, a.side);
                cursor += 1;
            } else {
                let (first, second) = (geometry.segments[cursor], geometry.segments[cursor + 1]);
                prop_assert_eq!(first.start(), a.point());
                prop_assert_eq!(first.side, a.side);
                prop_assert_eq!(second.side, b.side);
                prop_assert_eq!(first.x2.to_bits(), second.x1.to_bits());
                prop_assert_eq!(first.y2.to_bits(), second.y1.to_bits());
                prop_assert_eq!(first.y2.to_bits(), reference_y.to_bits());
                prop_assert_eq!(second.end(), b.point());
                let (lo, hi) = (a.x.min(b.x), a.x.max(b.x));
                prop_assert!(first.x2 >= lo - 1e-9 && first.x2 <= hi + 1e-9);
                cursor += 2;
            }
        }
        prop_assert_eq!(cursor, geometry.segments.len());

        for sample in &geometry.pixel_points {
            prop_assert_eq!(sample.side, Side::classify(sample.value, reference));
            prop_assert!(sample.x.is_finite() && sample.y.is_finite());
        }
    }

    #[test]
    fn polygons_close_on_the_reference_line_and_stay_on_their_side(
        values in series_strategy(),
        rule in rule_strategy(),
    ) {
        let series = Series::new(values);
        let viewport = Viewport::new(900.0, 500.0, 16.0);
        let geometry = project_threshold_geometry(&series, rule, viewport);
        let Some(reference_y) = geometry.reference_y else {
            prop_assert!(geometry.above_areas.is_empty() && geometry.below_areas.is_empty());
            return Ok(());
        };

        let sides = [
            (&geometry.above_areas, Side::Above),
            (&geometry.below_areas, Side::Below),
        ];
        for (areas, side) in sides {
            for area in areas {
                prop_assert_eq!(area.side, side);
                prop_assert!(area.vertices.len() >= 4);
                let first = area.vertices[0];
                let last = area.vertices[area.vertices.len() - 1];
                prop_assert_eq!(first.y.to_bits(), reference_y.to_bits());
                prop_assert_eq!(last.y.to_bits(), reference_y.to_bits());
                prop_assert_eq!(first.x, area.vertices[1].x);
                prop_assert_eq!(last.x, area.vertices[area.vertices.len() - 2].x);
                for vertex in area.run() {
                    match side {
                        Side::Above => prop_assert!(vertex.y <= reference_y),
                        Side::Below => prop_assert!(vertex.y >= reference_y),
                    }
                }
            }
        }
    }

    #[test]
    fn nothing_spans_an_absent_sample(
        values in series_strategy(),
        rule in rule_strategy(),
    ) {
        let series = Series::new(values);
        let viewport = Viewport::new(1000.0, 400.0, 20.0);
        let geometry = project_threshold_geometry(&series, rule, viewport);
        let Some(stats) = geometry.stats else {
            return Ok(());
        };
        let scale = SeriesScale::new(series.len(), stats.min, stats.max, viewport);

        let gap_xs: Vec<f64> = series
            .values()
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_none())
            .map(|(index, _)| scale.index_to_pixel(index))
            .collect();

        // Every stroke discontinuity sits on an absent block between two
        // present runs that each have something to draw.
        let drawable_runs = series
            .values()
            .split(|value| value.is_none())
            .filter(|run| run.len() >= 2)
            .count();
        let breaks = geometry
            .segments
            .windows(2)
            .filter(|pair| pair[0].end() != pair[1].start())
            .count();
        prop_assert_eq!(breaks, drawable_runs.saturating_sub(1));

        let spans = |lo: f64, hi: f64| gap_xs.iter().any(|x| lo < *x && *x < hi);
        for segment in &geometry.segments {
            prop_assert!(!spans(segment.x1.min(segment.x2), segment.x1.max(segment.x2)));
        }
        for area in geometry.above_areas.iter().chain(&geometry.below_areas) {
            let run: &[PixelPoint] = area.run();
            for pair in run.windows(2) {
                prop_assert!(!spans(pair[0].x.min(pair[1].x), pair[0].x.max(pair[1].x)));
            }
        }
    }

    #[test]
    fn projection_is_deterministic(
        values in series_strategy(),
        rule in rule_strategy(),
        padding in 0.0f64..400.0,
    ) {
        let series = Series::new(values);
        let viewport = Viewport::new(640.0, 360.0, padding);
        let first = project_threshold_geometry(&series, rule, viewport);
        let second = project_threshold_geometry(&series, rule, viewport);
        prop_assert_eq!(&first, &second);

        for sample in &first.pixel_points {
            prop_assert!(sample.x.is_finite() && sample.y.is_finite());
        }
        for area in first.above_areas.iter().chain(&first.below_areas) {
            prop_assert!(area.vertices.iter().all(|v| v.x.is_finite() && v.y.is_finite()));
        }
    }

    #[test]
    fn any_finite_magnitude_projects_to_finite_geometry(
        values in extreme_series_strategy(),
        rule in extreme_rule_strategy(),
    ) {
        let series = Series::new(values);
        let viewport = Viewport::new(800.0, 400.0, 16.0);
        let geometry = project_threshold_geometry(&series, rule, viewport);

        if let Some(reference_y) = geometry.reference_y {
            prop_assert!(reference_y.is_finite());
        }
        for sample in &geometry.pixel_points {
            prop_assert!(sample.x.is_finite() && sample.y.is_finite());
            prop_assert!(sample.y >= 16.0 - 1e-6 && sample.y <= 384.0 + 1e-6);
        }
        for segment in &geometry.segments {
            prop_assert!(segment.x1.is_finite() && segment.y1.is_finite());
            prop_assert!(segment.x2.is_finite() && segment.y2.is_finite());
        }
        for area in geometry.above_areas.iter().chain(&geometry.below_areas) {
            prop_assert!(area.vertices.iter().all(|v| v.x.is_finite() && v.y.is_finite()));
        }
    }
}
