use serde::{Deserialize, Serialize};

use crate::core::AxisBounds;

/// Target horizontal spacing between x-axis labels, in pixels.
pub const HORIZONTAL_LABEL_TARGET_WIDTH: f64 = 100.0;
/// Target vertical spacing between y-axis labels, in pixels.
pub const VERTICAL_LABEL_TARGET_HEIGHT: f64 = 80.0;

/// Number of label intervals that fit into `extent_px` at `target_px` spacing.
///
/// Always at least 1 so a tiny plot still gets its range endpoints labeled.
#[must_use]
pub fn label_count(extent_px: f64, target_px: f64) -> usize {
    let count = (extent_px / target_px).floor();
    if count.is_finite() && count >= 1.0 {
        count as usize
    } else {
        1
    }
}

/// Axis label formatter with adaptive fractional precision.
///
/// The number of fraction digits is chosen from the magnitude of the range
/// span, so a microscopic range still produces distinguishable labels while
/// a wide range stays terse. Instances are cached per axis by the engine and
/// rebuilt whenever the underlying range could have changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelFormatter {
    max_fraction_digits: usize,
}

impl LabelFormatter {
    #[must_use]
    pub fn for_range(min: f64, max: f64) -> Self {
        let span = max - min;
        let max_fraction_digits = if span < 0.1 {
            6
        } else if span < 1.0 {
            4
        } else if span < 20.0 {
            3
        } else if span < 100.0 {
            1
        } else {
            0
        };
        Self {
            max_fraction_digits,
        }
    }

    #[must_use]
    pub fn max_fraction_digits(self) -> usize {
        self.max_fraction_digits
    }

    /// Formats a value with at most the configured fraction digits,
    /// trimming trailing zeros.
    #[must_use]
    pub fn format(self, value: f64) -> String {
        let mut text = format!("{value:.prec$}", prec = self.max_fraction_digits);
        if text.contains('.') {
            while text.ends_with('0') {
                text.pop();
            }
            if text.ends_with('.') {
                text.pop();
            }
        }
        if text == "-0" {
            text = "0".to_owned();
        }
        text
    }
}

/// Generates evenly spaced x-axis labels from left to right.
#[must_use]
pub fn horizontal_labels(
    bounds: AxisBounds,
    plot_width: f64,
    formatter: LabelFormatter,
) -> Vec<String> {
    let intervals = label_count(plot_width, HORIZONTAL_LABEL_TARGET_WIDTH);
    let mut labels = Vec::with_capacity(intervals + 1);
    for i in 0..=intervals {
        let value = bounds.min + bounds.span() * (i as f64) / (intervals as f64);
        labels.push(formatter.format(value));
    }
    labels
}

/// Generates evenly spaced y-axis labels stored top to bottom.
///
/// Index 0 holds the maximum value because pixel y grows downward.
#[must_use]
pub fn vertical_labels(
    bounds: AxisBounds,
    plot_height: f64,
    formatter: LabelFormatter,
) -> Vec<String> {
    let intervals = label_count(plot_height, VERTICAL_LABEL_TARGET_HEIGHT);
    let mut labels = vec![String::new(); intervals + 1];
    for i in 0..=intervals {
        let value = bounds.min + bounds.span() * (i as f64) / (intervals as f64);
        labels[intervals - i] = formatter.format(value);
    }
    labels
}
