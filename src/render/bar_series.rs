use crate::core::{AxisBounds, PlotRect, Point, SeriesStyle, flip_y, map_y};
use crate::error::{GraphError, GraphResult};
use crate::render::RectPrimitive;

/// Layout options for one bar series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSeriesOptions {
    /// Upper bound on the per-bar column width.
    pub max_bar_width: f64,
    /// Fixed visible bar width; `None` uses `column_width - 1`.
    pub explicit_bar_width: Option<f64>,
}

impl Default for BarSeriesOptions {
    fn default() -> Self {
        Self {
            max_bar_width: f64::INFINITY,
            explicit_bar_width: None,
        }
    }
}

impl BarSeriesOptions {
    pub fn validate(self) -> GraphResult<Self> {
        if self.max_bar_width.is_nan() || self.max_bar_width <= 0.0 {
            return Err(GraphError::InvalidData(
                "max bar width must be > 0".to_owned(),
            ));
        }
        if let Some(width) = self.explicit_bar_width
            && (!width.is_finite() || width <= 0.0)
        {
            return Err(GraphError::InvalidData(
                "explicit bar width must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Projects a bar series into filled rectangles.
///
/// Bar i occupies the center of its column; `scales` supplies the per-point
/// animated growth factor in [0, 1] (pass an empty slice when not
/// animating). Per-point colors come from the style's value-dependent
/// strategy when set. The y range must already be degenerate-corrected.
pub fn project_bar_series(
    points: &[Point],
    y_bounds: AxisBounds,
    plot: PlotRect,
    style: &SeriesStyle,
    options: &BarSeriesOptions,
    scales: &[f64],
) -> GraphResult<Vec<RectPrimitive>> {
    let plot = plot.validate()?;
    let style = style.validate()?;
    let options = options.validate()?;

    if points.is_empty() {
        return Ok(Vec::new());
    }

    let column_width = (plot.width / points.len() as f64).min(options.max_bar_width);
    let bar_width = options
        .explicit_bar_width
        .unwrap_or(column_width - 1.0)
        .max(0.0);

    let mut bars = Vec::with_capacity(points.len());
    for (i, point) in points.iter().enumerate() {
        let scale = scales.get(i).copied().unwrap_or(1.0).clamp(0.0, 1.0);
        let y = map_y(point.y, y_bounds, plot.height) * scale;

        let left = (i as f64) * column_width + plot.horstart + column_width / 2.0 - bar_width / 2.0;
        let top = flip_y(y, plot);
        let bottom = plot.bottom();

        bars.push(RectPrimitive::new(
            left,
            top,
            bar_width,
            (bottom - top).max(0.0),
            style.color_for(*point),
        ));
    }

    Ok(bars)
}
