use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Visible x-axis window over a potentially larger dataset.
///
/// `size == 0.0` is the "unset" sentinel: the chart shows all data and
/// ignores pan/zoom until a window is explicitly set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Viewport {
    pub start: f64,
    pub size: f64,
}

impl Viewport {
    pub fn new(start: f64, size: f64) -> GraphResult<Self> {
        if !start.is_finite() || !size.is_finite() || size < 0.0 {
            return Err(GraphError::InvalidData(
                "viewport start must be finite and size finite and >= 0".to_owned(),
            ));
        }
        Ok(Self { start, size })
    }

    /// Unset viewport showing all data.
    #[must_use]
    pub fn unset() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.size != 0.0
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.start + self.size
    }

    /// Shifts the window by a pan gesture measured in pixels.
    ///
    /// `delta_px` follows pointer movement: a positive delta (drag right)
    /// moves the window toward smaller x. The start is clamped into
    /// `[min_x, max_x - size]` against the full data extent. Returns whether
    /// the window changed so callers can invalidate cached labels.
    pub fn pan(
        &mut self,
        delta_px: f64,
        plot_width: f64,
        full_extent: (f64, f64),
    ) -> GraphResult<bool> {
        if !delta_px.is_finite() {
            return Err(GraphError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }
        if !plot_width.is_finite() || plot_width <= 0.0 {
            return Err(GraphError::InvalidData(
                "pan plot width must be finite and > 0".to_owned(),
            ));
        }

        if !self.is_active() {
            return Ok(false);
        }

        let previous = self.start;
        self.start -= delta_px * self.size / plot_width;
        self.clamp_start(full_extent);
        Ok(self.start != previous)
    }

    /// Rescales the window around its current center.
    ///
    /// `factor > 1.0` zooms in, `0.0 < factor < 1.0` zooms out. When zooming
    /// out past the full data extent the window saturates at exactly the
    /// extent (`start == min_x`, `start + size == max_x`).
    pub fn zoom(&mut self, factor: f64, full_extent: (f64, f64)) -> GraphResult<bool> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(GraphError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }

        if !self.is_active() {
            return Ok(false);
        }

        let (min_x, max_x) = ordered_extent(full_extent);
        let center = self.start + self.size / 2.0;
        self.size /= factor;
        self.start = center - self.size / 2.0;

        if self.start < min_x {
            self.start = min_x;
        }

        let overlap = self.start + self.size - max_x;
        if overlap > 0.0 {
            if self.start - overlap > min_x {
                self.start -= overlap;
            } else {
                // Maximal zoom-out: saturate at the full data extent.
                self.start = min_x;
                self.size = max_x - min_x;
            }
        }

        Ok(true)
    }

    /// Moves the window so its right edge sits at `max_x`.
    pub fn scroll_to_end(&mut self, max_x: f64) {
        self.start = max_x - self.size;
    }

    fn clamp_start(&mut self, full_extent: (f64, f64)) {
        let (min_x, max_x) = ordered_extent(full_extent);
        if self.start < min_x {
            self.start = min_x;
        } else if self.start + self.size > max_x {
            self.start = max_x - self.size;
        }
    }
}

fn ordered_extent(extent: (f64, f64)) -> (f64, f64) {
    if extent.0 <= extent.1 {
        extent
    } else {
        (extent.1, extent.0)
    }
}
