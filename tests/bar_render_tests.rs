use approx::assert_relative_eq;
use graphview::core::{AxisBounds, PlotRect, Point, SeriesStyle};
use graphview::render::{BarSeriesOptions, Color, project_bar_series};

fn plot() -> PlotRect {
    PlotRect::new(90.0, 100.0).expect("valid plot")
}

fn style() -> SeriesStyle {
    SeriesStyle::new(Color::WHITE, 2.0)
}

fn y_bounds() -> AxisBounds {
    AxisBounds::new(0.0, 10.0)
}

#[test]
fn empty_series_projects_no_bars() {
    let bars = project_bar_series(
        &[],
        y_bounds(),
        plot(),
        &style(),
        &BarSeriesOptions::default(),
        &[],
    )
    .expect("empty projection");
    assert!(bars.is_empty());
}

#[test]
fn bars_are_centered_in_equal_columns() {
    let points = [
        Point::new(0.0, 10.0),
        Point::new(1.0, 10.0),
        Point::new(2.0, 10.0),
    ];
    let bars = project_bar_series(
        &points,
        y_bounds(),
        plot(),
        &style(),
        &BarSeriesOptions::default(),
        &[],
    )
    .expect("valid projection");

    assert_eq!(bars.len(), 3);
    // 90px plot, 3 points: 30px columns, 29px bars with a 1px gap
    for (i, bar) in bars.iter().enumerate() {
        assert_relative_eq!(bar.x, i as f64 * 30.0 + 0.5);
        assert_relative_eq!(bar.width, 29.0);
    }
}

#[test]
fn full_value_bars_span_the_plot_height() {
    let points = [Point::new(0.0, 10.0)];
    let bars = project_bar_series(
        &points,
        y_bounds(),
        plot(),
        &style(),
        &BarSeriesOptions::default(),
        &[],
    )
    .expect("valid projection");

    // border 20: the bar top sits at the top border, bottom at 120
    assert_relative_eq!(bars[0].y, 20.0);
    assert_relative_eq!(bars[0].height, 100.0);
}

#[test]
fn max_bar_width_caps_the_column() {
    let points = [Point::new(0.0, 10.0)];
    let options = BarSeriesOptions {
        max_bar_width: 10.0,
        ..BarSeriesOptions::default()
    };
    let bars = project_bar_series(&points, y_bounds(), plot(), &style(), &options, &[])
        .expect("valid projection");

    assert_relative_eq!(bars[0].width, 9.0);
    assert_relative_eq!(bars[0].x, 0.5);
}

#[test]
fn explicit_bar_width_overrides_the_column_gap() {
    let points = [Point::new(0.0, 10.0), Point::new(1.0, 10.0)];
    let options = BarSeriesOptions {
        explicit_bar_width: Some(12.0),
        ..BarSeriesOptions::default()
    };
    let bars = project_bar_series(&points, y_bounds(), plot(), &style(), &options, &[])
        .expect("valid projection");

    for (i, bar) in bars.iter().enumerate() {
        assert_relative_eq!(bar.width, 12.0);
        // 45px columns, bar centered: i*45 + 22.5 - 6
        assert_relative_eq!(bar.x, i as f64 * 45.0 + 16.5);
    }
}

#[test]
fn horstart_shifts_every_bar_right() {
    let points = [Point::new(0.0, 10.0)];
    let shifted = PlotRect::new(90.0, 100.0)
        .and_then(|p| p.with_horstart(50.0))
        .expect("valid plot");
    let bars = project_bar_series(
        &points,
        y_bounds(),
        shifted,
        &style(),
        &BarSeriesOptions::default(),
        &[],
    )
    .expect("valid projection");

    assert_relative_eq!(bars[0].x, 50.5);
}

#[test]
fn growth_scales_shorten_bars_from_the_bottom() {
    let points = [Point::new(0.0, 10.0)];
    let bars = project_bar_series(
        &points,
        y_bounds(),
        plot(),
        &style(),
        &BarSeriesOptions::default(),
        &[0.5],
    )
    .expect("valid projection");

    assert_relative_eq!(bars[0].y, 70.0);
    assert_relative_eq!(bars[0].height, 50.0);
}

#[test]
fn missing_scales_render_full_height() {
    let points = [Point::new(0.0, 10.0), Point::new(1.0, 10.0)];
    let bars = project_bar_series(
        &points,
        y_bounds(),
        plot(),
        &style(),
        &BarSeriesOptions::default(),
        &[0.25],
    )
    .expect("valid projection");

    assert_relative_eq!(bars[0].height, 25.0);
    assert_relative_eq!(bars[1].height, 100.0);
}

#[test]
fn value_dependent_colors_are_applied_per_bar() {
    fn by_sign(point: Point) -> Color {
        if point.y < 0.0 {
            Color::rgb(1.0, 0.0, 0.0)
        } else {
            Color::rgb(0.0, 1.0, 0.0)
        }
    }

    let points = [Point::new(0.0, 5.0), Point::new(1.0, -5.0)];
    let style = SeriesStyle::new(Color::WHITE, 2.0).with_value_dependent_color(by_sign);
    let bars = project_bar_series(
        &points,
        AxisBounds::new(-10.0, 10.0),
        plot(),
        &style,
        &BarSeriesOptions::default(),
        &[],
    )
    .expect("valid projection");

    assert_eq!(bars[0].color, Color::rgb(0.0, 1.0, 0.0));
    assert_eq!(bars[1].color, Color::rgb(1.0, 0.0, 0.0));
}

#[test]
fn options_validation_rejects_bad_widths() {
    assert!(
        BarSeriesOptions {
            max_bar_width: 0.0,
            ..BarSeriesOptions::default()
        }
        .validate()
        .is_err()
    );
    assert!(
        BarSeriesOptions {
            explicit_bar_width: Some(-1.0),
            ..BarSeriesOptions::default()
        }
        .validate()
        .is_err()
    );
}
