use approx::assert_abs_diff_eq;
use threshold_chart::core::{SeriesScale, Viewport};

#[test]
fn values_map_top_down_inside_the_padding() {
    let scale = SeriesScale::new(5, 10.0, 110.0, Viewport::new(540.0, 300.0, 20.0));

    assert_eq!(scale.value_to_pixel(110.0), 20.0);
    assert_eq!(scale.value_to_pixel(10.0), 280.0);
    assert_abs_diff_eq!(scale.value_to_pixel(60.0), 150.0, epsilon = 1e-9);
}

#[test]
fn indices_use_a_constant_step() {
    let scale = SeriesScale::new(6, 0.0, 1.0, Viewport::new(540.0, 300.0, 20.0));

    assert_eq!(scale.x_step(), 100.0);
    assert_eq!(scale.index_to_pixel(0), 20.0);
    assert_eq!(scale.index_to_pixel(5), 520.0);
}

#[test]
fn value_round_trip_within_tolerance() {
    let scale = SeriesScale::new(2, -3.5, 12.25, Viewport::new(800.0, 600.0, 40.0));

    let original = 4.125;
    let px = scale.value_to_pixel(original);
    assert_abs_diff_eq!(scale.pixel_to_value(px), original, epsilon = 1e-9);
}

#[test]
fn flat_range_is_replaced_by_unit_range() {
    let scale = SeriesScale::new(3, 7.0, 7.0, Viewport::new(200.0, 100.0, 10.0));

    assert_eq!(scale.value_range(), 1.0);
    assert_eq!(scale.value_to_pixel(7.0), 10.0);
    assert_eq!(scale.value_to_pixel(6.0), 90.0);
}

#[test]
fn single_slot_series_uses_the_full_plot_width_as_step() {
    let scale = SeriesScale::new(1, 0.0, 1.0, Viewport::new(200.0, 100.0, 10.0));
    assert_eq!(scale.x_step(), 180.0);
    assert_eq!(scale.index_to_pixel(0), 10.0);

    let empty = SeriesScale::new(0, 0.0, 1.0, Viewport::new(200.0, 100.0, 10.0));
    assert_eq!(empty.x_step(), 180.0);
}

#[test]
fn degenerate_viewport_produces_finite_inverted_geometry() {
    let scale = SeriesScale::new(3, 0.0, 10.0, Viewport::new(100.0, 100.0, 60.0));

    assert_eq!(scale.x_step(), -10.0);
    assert_eq!(scale.index_to_pixel(2), 40.0);
    assert_eq!(scale.value_to_pixel(10.0), 60.0);
    assert_eq!(scale.value_to_pixel(0.0), 40.0);
}
