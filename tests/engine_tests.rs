use graphview::api::{ChartEngineConfig, SeriesKind};
use graphview::core::{DataSeries, Point};
use graphview::render::{
    BarSeriesOptions, FrameSize, LineSeriesOptions, NullRenderer, TextHAlign,
};
use graphview::{ChartEngine, GraphError};

fn engine() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(FrameSize::new(400, 300));
    ChartEngine::new(NullRenderer::default(), config).expect("valid config")
}

fn line_series(raw: &[(f64, f64)]) -> DataSeries {
    let points = raw.iter().map(|&(x, y)| Point::new(x, y)).collect();
    DataSeries::new(points).expect("valid series data")
}

#[test]
fn empty_chart_renders_a_blank_frame() {
    let mut engine = engine();
    let frame = engine.build_frame().expect("blank frame");
    assert!(frame.is_empty());
}

#[test]
fn empty_chart_with_title_renders_only_the_title() {
    let config = ChartEngineConfig::new(FrameSize::new(400, 300)).with_title("throughput");
    let mut engine =
        ChartEngine::new(NullRenderer::default(), config).expect("valid config");
    let frame = engine.build_frame().expect("blank frame");

    assert_eq!(frame.texts.len(), 1);
    assert_eq!(frame.texts[0].text, "throughput");
    assert_eq!(frame.texts[0].h_align, TextHAlign::Center);
    assert!(frame.lines.is_empty());
}

#[test]
fn line_chart_frame_has_grid_labels_and_segments() {
    let mut engine = engine();
    engine
        .add_series(
            line_series(&[(0.0, 0.0), (1.0, 5.0), (2.0, 10.0)]),
            SeriesKind::Line(LineSeriesOptions::default()),
        )
        .expect("series added");

    let frame = engine.build_frame().expect("valid frame");

    // 349x238 plot: 4 horizontal labels, 3 vertical labels
    assert_eq!(frame.texts.len(), 7);
    // 7 grid lines plus 2 line segments
    assert_eq!(frame.lines.len(), 9);
    assert!(frame.rects.is_empty());
}

#[test]
fn render_reports_counts_through_the_backend() {
    let mut engine = engine();
    engine
        .add_series(
            line_series(&[(0.0, 0.0), (1.0, 5.0), (2.0, 10.0)]),
            SeriesKind::Line(LineSeriesOptions::default()),
        )
        .expect("series added");

    engine.render().expect("render succeeds");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_line_count, 9);
    assert_eq!(renderer.last_text_count, 7);
}

#[test]
fn bar_chart_frame_projects_one_rect_per_point() {
    let mut engine = engine();
    engine
        .add_series(
            line_series(&[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0), (3.0, 4.0)]),
            SeriesKind::Bar(BarSeriesOptions::default()),
        )
        .expect("series added");

    let frame = engine.build_frame().expect("valid frame");
    assert_eq!(frame.rects.len(), 4);
}

#[test]
fn series_without_style_get_rotating_palette_colors() {
    let mut engine = engine();
    let first = engine
        .add_series(
            line_series(&[(0.0, 0.0)]),
            SeriesKind::Line(LineSeriesOptions::default()),
        )
        .expect("series added");
    let second = engine
        .add_series(
            line_series(&[(0.0, 0.0)]),
            SeriesKind::Line(LineSeriesOptions::default()),
        )
        .expect("series added");

    let palette = engine.config().palette.clone();
    let first_color = engine.series(first).expect("series").style().expect("style").color;
    let second_color = engine.series(second).expect("series").style().expect("style").color;
    assert_eq!(first_color, palette[0]);
    assert_eq!(second_color, palette[1]);
}

#[test]
fn remove_series_out_of_bounds_is_an_error() {
    let mut engine = engine();
    let err = engine.remove_series(3).expect_err("no series exist");
    assert!(matches!(
        err,
        GraphError::SeriesIndexOutOfBounds { index: 3, len: 0 }
    ));
}

#[test]
fn scroll_to_end_requires_an_active_viewport() {
    let mut engine = engine();
    engine
        .add_series(
            line_series(&[(0.0, 0.0), (9.0, 1.0)]),
            SeriesKind::Line(LineSeriesOptions::default()),
        )
        .expect("series added");

    let err = engine.scroll_to_end().expect_err("viewport is unset");
    assert!(matches!(err, GraphError::InvalidState(_)));
}

#[test]
fn scroll_to_end_follows_the_newest_data() {
    let mut engine = engine();
    engine
        .add_series(
            line_series(&[(0.0, 0.0), (9.0, 1.0)]),
            SeriesKind::Line(LineSeriesOptions::default()),
        )
        .expect("series added");
    engine.set_viewport(0.0, 2.0).expect("valid viewport");

    engine.scroll_to_end().expect("data exists");
    assert_eq!(engine.viewport().start, 7.0);
    assert_eq!(engine.viewport().end(), 9.0);
}

#[test]
fn append_point_with_follow_updates_the_viewport() {
    let mut engine = engine();
    let index = engine
        .add_series(
            line_series(&[(0.0, 0.0), (9.0, 1.0)]),
            SeriesKind::Line(LineSeriesOptions::default()),
        )
        .expect("series added");
    engine.set_viewport(0.0, 2.0).expect("valid viewport");

    engine
        .append_point(index, Point::new(12.0, 2.0), true)
        .expect("monotonic append");
    assert_eq!(engine.viewport().end(), 12.0);
}

#[test]
fn fixed_labels_override_generated_ones() {
    let mut engine = engine();
    engine
        .add_series(
            line_series(&[(0.0, 0.0), (2.0, 10.0)]),
            SeriesKind::Line(LineSeriesOptions::default()),
        )
        .expect("series added");
    engine.set_horizontal_labels(Some(vec!["mon".to_owned(), "tue".to_owned()]));

    let frame = engine.build_frame().expect("valid frame");
    let texts: Vec<&str> = frame.texts.iter().map(|t| t.text.as_str()).collect();
    assert!(texts.contains(&"mon"));
    assert!(texts.contains(&"tue"));
}

#[test]
fn manual_y_bounds_validate_ordering() {
    let mut engine = engine();
    assert!(engine.set_manual_y_bounds(0.0, 10.0).is_err());
    engine.set_manual_y_bounds(10.0, 0.0).expect("max >= min");
    assert_eq!(engine.manual_y_bounds(), Some((0.0, 10.0)));

    engine.clear_manual_y_bounds();
    assert_eq!(engine.manual_y_bounds(), None);
}

#[test]
fn legend_renders_a_box_swatches_and_labels() {
    let mut engine = engine();
    let series = line_series(&[(0.0, 0.0), (1.0, 1.0)]).with_label("cpu");
    engine
        .add_series(series, SeriesKind::Line(LineSeriesOptions::default()))
        .expect("series added");
    engine.set_legend_visible(true);

    let frame = engine.build_frame().expect("valid frame");
    assert_eq!(frame.round_rects.len(), 1);
    assert!(frame.rects.iter().any(|r| r.width == 15.0 && r.height == 15.0));
    assert!(frame.texts.iter().any(|t| t.text == "cpu"));
}

#[test]
fn set_size_rejects_zero_dimensions() {
    let mut engine = engine();
    assert!(engine.set_size(FrameSize::new(0, 300)).is_err());
    engine.set_size(FrameSize::new(800, 600)).expect("valid size");
    assert_eq!(engine.config().size, FrameSize::new(800, 600));
}

#[test]
fn gestures_are_ignored_until_scrolling_is_enabled() {
    use graphview::interaction::GestureEvent;

    let mut engine = engine();
    engine
        .add_series(
            line_series(&[(0.0, 0.0), (9.0, 1.0)]),
            SeriesKind::Line(LineSeriesOptions::default()),
        )
        .expect("series added");
    engine.set_viewport(2.0, 2.0).expect("valid viewport");

    assert!(!engine.handle_gesture(GestureEvent::pan(10.0)).expect("gesture ok"));

    engine.set_scrollable(true);
    assert!(engine.handle_gesture(GestureEvent::pan(10.0)).expect("gesture ok"));
    assert!(engine.viewport().start < 2.0);
}

#[test]
fn bar_growth_animation_scales_frame_heights() {
    use graphview::animation::GrowthMode;

    let mut engine = engine();
    engine
        .add_series(
            line_series(&[(0.0, 10.0), (1.0, 10.0)]),
            SeriesKind::Bar(BarSeriesOptions::default()),
        )
        .expect("series added");
    engine.set_manual_y_bounds(10.0, 0.0).expect("valid bounds");
    engine
        .set_growth_animation(GrowthMode::Whole, 1000.0)
        .expect("valid animation");

    engine.animation_started();
    engine.animation_tick(0.5).expect("finite progress");
    assert!(engine.is_animating());

    let half = engine.build_frame().expect("valid frame");
    engine.animation_tick(1.0).expect("finite progress");
    let full = engine.build_frame().expect("valid frame");

    assert_eq!(half.rects.len(), 2);
    for (half_bar, full_bar) in half.rects.iter().zip(&full.rects) {
        assert!(half_bar.height < full_bar.height);
        // bars always grow up from the bottom border
        assert_eq!(half_bar.y + half_bar.height, full_bar.y + full_bar.height);
    }
    assert!(!engine.is_animating());
}

#[test]
fn cancelling_one_point_leaves_the_rest_animating() {
    use graphview::animation::GrowthMode;

    let mut engine = engine();
    engine
        .add_series(
            line_series(&[(0.0, 10.0), (1.0, 10.0)]),
            SeriesKind::Bar(BarSeriesOptions::default()),
        )
        .expect("series added");
    engine
        .set_growth_animation(GrowthMode::PerPoint { stagger_ms: 200.0 }, 1000.0)
        .expect("valid animation");

    engine.animation_started();
    engine.animation_tick(0.1).expect("finite progress");

    assert!(engine.cancel_point_animation(0, 1));
    assert_eq!(engine.growth_scale(0, 1), 1.0);
    assert!(engine.growth_scale(0, 0) < 1.0);
    assert!(engine.is_animating());
}

#[test]
fn enabling_scaling_forces_scrolling() {
    let mut engine = engine();
    engine.set_scalable(true);
    assert!(engine.is_scalable());
    assert!(engine.is_scrollable());
}
