use crate::core::{
    AxisBounds, LabelFormatter, PlotRect, SeriesStyle, horizontal_labels, range, vertical_labels,
};
use crate::error::{GraphError, GraphResult};
use crate::render::{
    LinePrimitive, MarkerPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    project_bar_series, project_line_series,
};

use super::engine::{ChartEngine, SeriesKind};
use super::legend;

impl<R: Renderer> ChartEngine<R> {
    /// Computes the drawable content rectangle from the frame size,
    /// reserving space for the border and enabled label areas.
    pub fn plot_rect(&self) -> GraphResult<PlotRect> {
        let text_height = if self.config.show_horizontal_labels {
            self.config.label_text_size + self.config.label_padding
        } else {
            0.0
        };
        let horstart = if self.config.show_vertical_labels {
            self.config.vertical_label_area_width
        } else {
            0.0
        };

        PlotRect {
            width: f64::from(self.config.size.width) - 1.0 - horstart,
            height: f64::from(self.config.size.height) - 2.0 * self.config.border - text_height,
            border: self.config.border,
            horstart,
        }
        .validate()
    }

    /// Materializes one full draw pass into a backend-agnostic frame.
    ///
    /// Axis ranges are recomputed from live viewport-filtered data, stale
    /// labels are regenerated, and every series is projected with its
    /// renderer kind. An empty chart produces a valid frame holding only
    /// the title.
    pub fn build_frame(&mut self) -> GraphResult<RenderFrame> {
        let plot = self.plot_rect()?;
        let mut frame = RenderFrame::new(self.config.size);

        self.push_title(&mut frame, plot);

        let min_x = range::min_x(self.data_series(), self.viewport, false);
        let max_x = range::max_x(self.data_series(), self.viewport, false);
        let y = range::y_bounds(self.data_series(), self.viewport, self.manual_y_bounds);

        let (Some(min_x), Some(max_x), Some(y)) = (min_x, max_x, y) else {
            return Ok(frame);
        };

        let x_bounds = AxisBounds::new(min_x, max_x).corrected();
        let y_bounds = y.corrected();

        self.refresh_labels(x_bounds, y_bounds, plot);
        self.push_grid_and_labels(&mut frame, plot);
        self.push_series(&mut frame, x_bounds, y_bounds, plot)?;

        if self.config.legend.visible {
            let entries: Vec<_> = self
                .series
                .iter()
                .map(|s| {
                    let color = s.data.style().map(|style| style.color);
                    (color, s.data.label().map(str::to_owned))
                })
                .collect();
            legend::build_legend(&entries, &self.config, &mut frame);
        }

        Ok(frame)
    }

    fn refresh_labels(&mut self, x_bounds: AxisBounds, y_bounds: AxisBounds, plot: PlotRect) {
        if self.x_formatter.is_none() {
            self.x_formatter = Some(LabelFormatter::for_range(x_bounds.min, x_bounds.max));
        }
        if self.y_formatter.is_none() {
            self.y_formatter = Some(LabelFormatter::for_range(y_bounds.min, y_bounds.max));
        }

        if self.horizontal_labels.resolve().is_none() {
            if let Some(formatter) = self.x_formatter {
                self.horizontal_labels
                    .store_generated(horizontal_labels(x_bounds, plot.width, formatter));
            }
        }
        if self.vertical_labels.resolve().is_none() {
            if let Some(formatter) = self.y_formatter {
                self.vertical_labels
                    .store_generated(vertical_labels(y_bounds, plot.height, formatter));
            }
        }
    }

    fn push_title(&self, frame: &mut RenderFrame, plot: PlotRect) {
        if let Some(title) = &self.config.title {
            frame.texts.push(TextPrimitive::new(
                title.clone(),
                plot.width / 2.0 + plot.horstart,
                plot.border - 4.0,
                self.config.label_text_size,
                self.config.horizontal_label_color,
                TextHAlign::Center,
            ));
        }
    }

    fn push_grid_and_labels(&self, frame: &mut RenderFrame, plot: PlotRect) {
        let height = f64::from(self.config.size.height);
        let text_height = if self.config.show_horizontal_labels {
            self.config.label_text_size + self.config.label_padding
        } else {
            0.0
        };

        if let Some(verticals) = self.vertical_labels.resolve() {
            let intervals = (verticals.len().saturating_sub(1)).max(1) as f64;

            if self.config.draw_grid {
                for i in 0..verticals.len() {
                    let y = (plot.height / intervals) * i as f64 + plot.border;
                    frame.lines.push(LinePrimitive::new(
                        plot.horstart,
                        y,
                        plot.horstart + plot.width,
                        y,
                        1.0,
                        self.config.grid_color,
                    ));
                }
            }

            if self.config.show_vertical_labels {
                for (i, label) in verticals.iter().enumerate() {
                    if label.is_empty() {
                        continue;
                    }
                    let y = (plot.height / intervals) * i as f64
                        + plot.border
                        + self.config.label_text_size / 2.0;
                    frame.texts.push(TextPrimitive::new(
                        label.clone(),
                        plot.horstart - self.config.label_padding,
                        y,
                        self.config.label_text_size,
                        self.config.vertical_label_color,
                        TextHAlign::Right,
                    ));
                }
            }
        }

        if let Some(horizontals) = self.horizontal_labels.resolve() {
            let intervals = (horizontals.len().saturating_sub(1)).max(1) as f64;

            for (i, label) in horizontals.iter().enumerate() {
                let x = (plot.width / intervals) * i as f64 + plot.horstart;

                if self.config.draw_grid {
                    frame.lines.push(LinePrimitive::new(
                        x,
                        height - plot.border - text_height / 2.0,
                        x,
                        plot.border,
                        1.0,
                        self.config.grid_color,
                    ));
                }

                if self.config.show_horizontal_labels && !label.is_empty() {
                    let align = if i == 0 {
                        TextHAlign::Left
                    } else if i == horizontals.len() - 1 {
                        TextHAlign::Right
                    } else {
                        TextHAlign::Center
                    };
                    frame.texts.push(TextPrimitive::new(
                        label.clone(),
                        x,
                        height - self.config.label_text_size / 2.0,
                        self.config.label_text_size,
                        self.config.horizontal_label_color,
                        align,
                    ));
                }
            }
        }
    }

    fn push_series(
        &self,
        frame: &mut RenderFrame,
        x_bounds: AxisBounds,
        y_bounds: AxisBounds,
        plot: PlotRect,
    ) -> GraphResult<()> {
        for (series_index, chart_series) in self.series.iter().enumerate() {
            let points = chart_series.data.visible_points(self.viewport);
            let style: SeriesStyle =
                *chart_series
                    .data
                    .style()
                    .ok_or_else(|| GraphError::InvalidState(
                        "series has no resolved style".to_owned(),
                    ))?;

            match &chart_series.kind {
                SeriesKind::Line(options) => {
                    let projection =
                        project_line_series(&points, x_bounds, y_bounds, plot, &style, options)?;

                    if options.draw_background {
                        frame.lines.extend(projection.background);
                    }
                    if options.smooth {
                        if !projection.path.is_empty() {
                            frame.paths.push(projection.path);
                        }
                    } else {
                        frame.lines.extend(projection.segments);
                    }
                    for marker in projection.markers {
                        match marker {
                            MarkerPrimitive::Circle(circle) => frame.circles.push(circle),
                            MarkerPrimitive::Triangle(path) => frame.paths.push(path),
                            MarkerPrimitive::Square(rect) => frame.rects.push(rect),
                        }
                    }
                }
                SeriesKind::Bar(options) => {
                    let scales = self.animator.series_scales(series_index, points.len());
                    let bars =
                        project_bar_series(&points, y_bounds, plot, &style, options, &scales)?;
                    frame.rects.extend(bars);
                }
            }
        }
        Ok(())
    }
}
