use graphview::core::{
    AxisBounds, HORIZONTAL_LABEL_TARGET_WIDTH, LabelFormatter, VERTICAL_LABEL_TARGET_HEIGHT,
    horizontal_labels, label_count, vertical_labels,
};

#[test]
fn label_count_floors_to_the_target_spacing() {
    assert_eq!(label_count(500.0, HORIZONTAL_LABEL_TARGET_WIDTH), 5);
    assert_eq!(label_count(199.0, HORIZONTAL_LABEL_TARGET_WIDTH), 1);
    assert_eq!(label_count(240.0, VERTICAL_LABEL_TARGET_HEIGHT), 3);
}

#[test]
fn label_count_never_drops_below_one() {
    assert_eq!(label_count(10.0, HORIZONTAL_LABEL_TARGET_WIDTH), 1);
    assert_eq!(label_count(0.0, HORIZONTAL_LABEL_TARGET_WIDTH), 1);
}

#[test]
fn fraction_digits_adapt_to_range_span() {
    assert_eq!(LabelFormatter::for_range(0.0, 0.05).max_fraction_digits(), 6);
    assert_eq!(LabelFormatter::for_range(0.0, 0.5).max_fraction_digits(), 4);
    assert_eq!(LabelFormatter::for_range(0.0, 10.0).max_fraction_digits(), 3);
    assert_eq!(LabelFormatter::for_range(0.0, 50.0).max_fraction_digits(), 1);
    assert_eq!(LabelFormatter::for_range(0.0, 1000.0).max_fraction_digits(), 0);
}

#[test]
fn format_trims_trailing_zeros() {
    let formatter = LabelFormatter::for_range(0.0, 10.0);
    assert_eq!(formatter.format(2.5), "2.5");
    assert_eq!(formatter.format(3.0), "3");
    assert_eq!(formatter.format(0.125), "0.125");
}

#[test]
fn format_normalizes_negative_zero() {
    let formatter = LabelFormatter::for_range(0.0, 1000.0);
    assert_eq!(formatter.format(-0.4), "0");
}

#[test]
fn format_keeps_integers_terse_on_wide_ranges() {
    let formatter = LabelFormatter::for_range(0.0, 1000.0);
    assert_eq!(formatter.format(1234.0), "1234");
    assert_eq!(formatter.format(-250.0), "-250");
}

#[test]
fn wide_plot_gets_six_labels_at_default_spacing() {
    let bounds = AxisBounds::new(0.0, 10.0);
    let formatter = LabelFormatter::for_range(bounds.min, bounds.max);
    let labels = horizontal_labels(bounds, 500.0, formatter);
    assert_eq!(labels.len(), 6);
    assert_eq!(labels, vec!["0", "2", "4", "6", "8", "10"]);
}

#[test]
fn horizontal_labels_run_left_to_right() {
    let bounds = AxisBounds::new(0.0, 10.0);
    let formatter = LabelFormatter::for_range(bounds.min, bounds.max);
    let labels = horizontal_labels(bounds, 200.0, formatter);
    assert_eq!(labels, vec!["0", "5", "10"]);
}

#[test]
fn vertical_labels_store_the_maximum_first() {
    let bounds = AxisBounds::new(0.0, 10.0);
    let formatter = LabelFormatter::for_range(bounds.min, bounds.max);
    let labels = vertical_labels(bounds, 160.0, formatter);
    assert_eq!(labels, vec!["10", "5", "0"]);
}

#[test]
fn tiny_plot_still_labels_both_range_endpoints() {
    let bounds = AxisBounds::new(2.0, 4.0);
    let formatter = LabelFormatter::for_range(bounds.min, bounds.max);
    let labels = horizontal_labels(bounds, 30.0, formatter);
    assert_eq!(labels, vec!["2", "4"]);
}
