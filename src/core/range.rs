use serde::{Deserialize, Serialize};

use crate::core::{DataSeries, Viewport};

/// Inclusive numeric span of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.max == self.min
    }

    /// Widens a degenerate range so a flat line still has visible extent.
    ///
    /// `max` grows by 5% and `min` shrinks by 5%; for negative values the
    /// multiplied pair is reordered so the range stays valid. A flat range
    /// at exactly zero falls back to `[-1, 1]`.
    #[must_use]
    pub fn corrected(self) -> Self {
        if !self.is_degenerate() {
            return self;
        }
        if self.max == 0.0 {
            return Self::new(-1.0, 1.0);
        }

        let a = self.max * 1.05;
        let b = self.min * 0.95;
        Self::new(a.min(b), a.max(b))
    }
}

/// Full x extent over all series, ignoring any viewport.
///
/// Empty series contribute nothing; an all-empty chart has no extent.
pub fn x_extent<'a, I>(series: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a DataSeries>,
{
    let mut extent: Option<(f64, f64)> = None;
    for s in series {
        let (Some(first), Some(last)) = (s.points().first(), s.points().last()) else {
            continue;
        };
        extent = Some(match extent {
            Some((min, max)) => (min.min(first.x), max.max(last.x)),
            None => (first.x, last.x),
        });
    }
    extent
}

/// Maximal x of the current viewport, or of all data when the viewport is
/// unset or explicitly ignored.
pub fn max_x<'a, I>(series: I, viewport: Viewport, ignore_viewport: bool) -> Option<f64>
where
    I: IntoIterator<Item = &'a DataSeries>,
{
    if !ignore_viewport && viewport.is_active() {
        return Some(viewport.end());
    }
    x_extent(series).map(|(_, max)| max)
}

/// Minimal x of the current viewport, or of all data when the viewport is
/// unset or explicitly ignored.
pub fn min_x<'a, I>(series: I, viewport: Viewport, ignore_viewport: bool) -> Option<f64>
where
    I: IntoIterator<Item = &'a DataSeries>,
{
    if !ignore_viewport && viewport.is_active() {
        return Some(viewport.start);
    }
    x_extent(series).map(|(min, _)| min)
}

/// Y bounds over every viewport-visible point of every series.
///
/// Manual bounds are returned verbatim when pinned. Scanning an all-empty
/// dataset yields `None`; callers render a blank frame instead of
/// propagating a sentinel.
pub fn y_bounds<'a, I>(
    series: I,
    viewport: Viewport,
    manual: Option<(f64, f64)>,
) -> Option<AxisBounds>
where
    I: IntoIterator<Item = &'a DataSeries>,
{
    if let Some((min, max)) = manual {
        return Some(AxisBounds::new(min, max));
    }

    let mut bounds: Option<AxisBounds> = None;
    for s in series {
        for point in s.visible_points(viewport) {
            bounds = Some(match bounds {
                Some(b) => AxisBounds::new(b.min.min(point.y), b.max.max(point.y)),
                None => AxisBounds::new(point.y, point.y),
            });
        }
    }
    bounds
}
