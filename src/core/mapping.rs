use crate::core::{AxisBounds, PlotRect};

/// Maps a data x value to a pixel offset inside the plot width.
///
/// Callers must apply degenerate-range correction first; a zero span is an
/// invariant violation, not a runtime condition.
#[must_use]
pub fn map_x(value: f64, bounds: AxisBounds, plot_width: f64) -> f64 {
    debug_assert!(
        bounds.span() != 0.0,
        "x range must be corrected before mapping"
    );
    plot_width * (value - bounds.min) / bounds.span()
}

/// Maps a data y value to a pixel offset inside the plot height.
///
/// The result grows upward; use [`flip_y`] to place it in the downward
/// pixel-y convention.
#[must_use]
pub fn map_y(value: f64, bounds: AxisBounds, plot_height: f64) -> f64 {
    debug_assert!(
        bounds.span() != 0.0,
        "y range must be corrected before mapping"
    );
    plot_height * (value - bounds.min) / bounds.span()
}

/// Converts an upward-growing mapped y into a frame pixel y relative to the
/// bottom border.
#[must_use]
pub fn flip_y(mapped_y: f64, plot: PlotRect) -> f64 {
    (plot.border - mapped_y) + plot.height
}
