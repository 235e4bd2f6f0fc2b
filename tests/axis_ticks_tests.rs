use approx::assert_abs_diff_eq;
use chrono::{Duration, TimeZone, Utc};
use threshold_chart::core::{
    AxisTickConfig, SeriesScale, Viewport, index_axis_ticks, value_axis_ticks,
};

fn scale() -> SeriesScale {
    SeriesScale::new(5, 1.0, 5.0, Viewport::new(440.0, 240.0, 20.0))
}

#[test]
fn value_ticks_span_min_to_max_top_down() {
    let ticks = value_axis_ticks(scale(), &AxisTickConfig::value_axis());

    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, vec!["5.00", "4.20", "3.40", "2.60", "1.80", "1.00"]);

    assert_eq!(ticks[0].position_px, 20.0);
    assert_abs_diff_eq!(ticks[1].position_px, 60.0, epsilon = 1e-9);
    assert_eq!(ticks[5].position_px, 220.0);
}

#[test]
fn value_ticks_respect_min_spacing() {
    let config = AxisTickConfig {
        target_spacing_px: 10.0,
        min_spacing_px: 70.0,
        max_ticks: 20,
        ..AxisTickConfig::value_axis()
    };
    let ticks = value_axis_ticks(scale(), &config);

    for pair in ticks.windows(2) {
        assert!(pair[1].position_px - pair[0].position_px >= 70.0 - 1e-9);
    }
    assert_eq!(ticks.last().expect("last tick").label, "1.00");
}

#[test]
fn flat_series_has_a_single_value_tick() {
    let scale = SeriesScale::new(3, 7.5, 7.5, Viewport::new(440.0, 240.0, 20.0));
    let ticks = value_axis_ticks(scale, &AxisTickConfig::value_axis());

    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].label, "7.50");
    assert_eq!(ticks[0].position_px, 20.0);
}

#[test]
fn index_ticks_fall_back_to_index_labels() {
    let ticks = index_axis_ticks(scale(), 5, None, &AxisTickConfig::index_axis());

    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, vec!["0", "1", "2", "3", "4"]);
    let positions: Vec<f64> = ticks.iter().map(|tick| tick.position_px).collect();
    assert_eq!(positions, vec![20.0, 120.0, 220.0, 320.0, 420.0]);
}

#[test]
fn index_ticks_use_timestamps_when_available() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let times: Vec<_> = (0..5).map(|day| start + Duration::days(day)).collect();
    let ticks = index_axis_ticks(
        scale(),
        5,
        Some(times.as_slice()),
        &AxisTickConfig::index_axis(),
    );

    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, vec!["Jan 01", "Jan 02", "Jan 03", "Jan 04", "Jan 05"]);
}

#[test]
fn long_series_is_thinned_to_the_tick_budget() {
    let scale = SeriesScale::new(250, 0.0, 1.0, Viewport::new(440.0, 240.0, 20.0));
    let ticks = index_axis_ticks(scale, 250, None, &AxisTickConfig::index_axis());

    // 400px plot / 80px target spacing.
    assert_eq!(ticks.len(), 6);
    assert_eq!(ticks[0].label, "0");
    assert_eq!(ticks[ticks.len() - 1].label, "249");
}

#[test]
fn empty_series_has_no_index_ticks() {
    let ticks = index_axis_ticks(scale(), 0, None, &AxisTickConfig::index_axis());
    assert!(ticks.is_empty());
}
