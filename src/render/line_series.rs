use crate::core::{AxisBounds, PlotRect, Point, SeriesStyle, flip_y, map_x, map_y};
use crate::error::{GraphError, GraphResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, RectPrimitive,
};

/// Marker drawn at each data point when point drawing is enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointMarker {
    Circle { radius: f64 },
    Triangle { size: f64 },
    Square { size: f64 },
}

impl Default for PointMarker {
    fn default() -> Self {
        Self::Circle { radius: 10.0 }
    }
}

impl PointMarker {
    fn size_parameter(self) -> f64 {
        match self {
            Self::Circle { radius } => radius,
            Self::Triangle { size } | Self::Square { size } => size,
        }
    }

    fn draw(self, x: f64, y: f64, color: Color) -> MarkerPrimitive {
        match self {
            Self::Circle { radius } => MarkerPrimitive::Circle(CirclePrimitive {
                cx: x,
                cy: y,
                radius,
                color,
            }),
            Self::Triangle { size } => {
                let mut path = PathPrimitive::filled(color);
                path.move_to(x, y - size);
                path.line_to(x + size, y + size);
                path.line_to(x - size, y + size);
                path.close();
                MarkerPrimitive::Triangle(path)
            }
            Self::Square { size } => {
                let half = size / 2.0;
                MarkerPrimitive::Square(RectPrimitive::new(x - half, y - half, size, size, color))
            }
        }
    }
}

/// One projected point marker, ready for the frame.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerPrimitive {
    Circle(CirclePrimitive),
    Triangle(PathPrimitive),
    Square(RectPrimitive),
}

/// Rendering options for one line series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSeriesOptions {
    /// Stroke the smoothed midpoint path instead of straight segments.
    pub smooth: bool,
    pub draw_points: bool,
    pub point_marker: PointMarker,
    /// Fill the area under the line with interpolated vertical lines.
    pub draw_background: bool,
    pub background_color: Color,
    pub background_stroke_width: f64,
}

impl Default for LineSeriesOptions {
    fn default() -> Self {
        Self {
            smooth: false,
            draw_points: false,
            point_marker: PointMarker::default(),
            draw_background: false,
            background_color: Color::rgb(20.0 / 255.0, 40.0 / 255.0, 60.0 / 255.0),
            background_stroke_width: 4.0,
        }
    }
}

impl LineSeriesOptions {
    pub fn validate(self) -> GraphResult<Self> {
        if !self.background_stroke_width.is_finite() || self.background_stroke_width <= 0.0 {
            return Err(GraphError::InvalidData(
                "background stroke width must be finite and > 0".to_owned(),
            ));
        }
        let marker_size = self.point_marker.size_parameter();
        if !marker_size.is_finite() || marker_size <= 0.0 {
            return Err(GraphError::InvalidData(
                "point marker size must be finite and > 0".to_owned(),
            ));
        }
        self.background_color.validate()?;
        Ok(self)
    }
}

/// Projected geometry for one line series.
///
/// Both the smoothed path and the straight segments are materialized; the
/// engine strokes exactly one of them depending on the smoothing flag.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeriesProjection {
    pub background: Vec<LinePrimitive>,
    pub segments: Vec<LinePrimitive>,
    pub path: PathPrimitive,
    pub markers: Vec<MarkerPrimitive>,
}

/// Projects a line series into pixel-space primitives.
///
/// The path bends toward each consecutive midpoint with the previous data
/// point as quadratic control, producing a smoothed line through the actual
/// samples without explicit spline fitting. Ranges must already be
/// degenerate-corrected.
pub fn project_line_series(
    points: &[Point],
    x_bounds: AxisBounds,
    y_bounds: AxisBounds,
    plot: PlotRect,
    style: &SeriesStyle,
    options: &LineSeriesOptions,
) -> GraphResult<LineSeriesProjection> {
    let plot = plot.validate()?;
    let style = style.validate()?;
    let options = options.validate()?;

    let mut projection = LineSeriesProjection {
        background: Vec::new(),
        segments: Vec::new(),
        path: PathPrimitive::stroked(style.thickness, style.color),
        markers: Vec::new(),
    };

    if points.is_empty() {
        return Ok(projection);
    }

    if options.draw_background {
        fill_background(points, x_bounds, y_bounds, plot, &options, &mut projection);
    }

    let mut last_x = 0.0_f64;
    let mut last_y = 0.0_f64;

    for (i, point) in points.iter().enumerate() {
        let y = map_y(point.y, y_bounds, plot.height);
        let x = map_x(point.x, x_bounds, plot.width);

        if i > 0 {
            let start_x = last_x + plot.horstart + 1.0;
            let start_y = flip_y(last_y, plot);
            let end_x = x + plot.horstart + 1.0;
            let end_y = flip_y(y, plot);

            let mid_x = (start_x + end_x) / 2.0;
            let mid_y = (start_y + end_y) / 2.0;

            if i == 1 {
                projection.path.line_to(mid_x, mid_y);
            } else {
                projection.path.quad_to(start_x, start_y, mid_x, mid_y);
            }

            projection.segments.push(LinePrimitive::new(
                start_x,
                start_y,
                end_x,
                end_y,
                style.thickness,
                style.color,
            ));

            if options.draw_points {
                projection
                    .markers
                    .push(options.point_marker.draw(end_x, end_y, style.color));
            }
        } else {
            let x_pos = x + plot.horstart + 1.0;
            let y_pos = flip_y(y, plot);

            if options.draw_points {
                projection
                    .markers
                    .push(options.point_marker.draw(x_pos, y_pos, style.color));
            }

            projection.path.move_to(x_pos, y_pos);
        }

        last_x = x;
        last_y = y;
    }

    Ok(projection)
}

/// Emits interpolated vertical fill lines from the bottom border up to the
/// line, skipping the column adjacent to the left edge so the axis is not
/// overdrawn.
fn fill_background(
    points: &[Point],
    x_bounds: AxisBounds,
    y_bounds: AxisBounds,
    plot: PlotRect,
    options: &LineSeriesOptions,
    projection: &mut LineSeriesProjection,
) {
    let bottom_y = plot.bottom();
    let mut last_x = 0.0_f64;
    let mut last_y = 0.0_f64;

    for (i, point) in points.iter().enumerate() {
        let y = map_y(point.y, y_bounds, plot.height);
        let x = map_x(point.x, x_bounds, plot.width);

        let end_x = x + plot.horstart + 1.0;
        let end_y = flip_y(y, plot) + 2.0;

        if i > 0 {
            let spans = ((end_x - last_x) / 3.0).floor().max(1.0);
            let columns = spans as usize + 1;
            for xi in 0..columns {
                let t = xi as f64 / spans;
                let space_x = last_x + (end_x - last_x) * t;
                let space_y = last_y + (end_y - last_y) * t;

                if space_x - plot.horstart > 1.0 {
                    projection.background.push(LinePrimitive::new(
                        space_x,
                        bottom_y,
                        space_x,
                        space_y,
                        options.background_stroke_width,
                        options.background_color,
                    ));
                }
            }
        }

        last_x = end_x;
        last_y = end_y;
    }
}
