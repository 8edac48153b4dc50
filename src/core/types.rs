use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// One data sample. Immutable once created; x is the horizontal domain value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point whose x domain is unix seconds derived from wall-clock time.
    #[must_use]
    pub fn from_timestamp(time: DateTime<Utc>, y: f64) -> Self {
        Self {
            x: time.timestamp_millis() as f64 / 1000.0,
            y,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Drawable plot rectangle in pixel space.
///
/// `width`/`height` describe the content area only. `border` is the top and
/// bottom padding outside the content, `horstart` the left offset where x
/// pixel coordinates begin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub width: f64,
    pub height: f64,
    pub border: f64,
    pub horstart: f64,
}

/// Default top/bottom border around the content area.
pub const DEFAULT_BORDER: f64 = 20.0;

impl PlotRect {
    pub fn new(width: f64, height: f64) -> GraphResult<Self> {
        Self {
            width,
            height,
            border: DEFAULT_BORDER,
            horstart: 0.0,
        }
        .validate()
    }

    pub fn with_border(mut self, border: f64) -> GraphResult<Self> {
        self.border = border;
        self.validate()
    }

    pub fn with_horstart(mut self, horstart: f64) -> GraphResult<Self> {
        self.horstart = horstart;
        self.validate()
    }

    pub fn validate(self) -> GraphResult<Self> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(GraphError::InvalidPlotRect {
                width: self.width,
                height: self.height,
            });
        }
        if !self.border.is_finite() || self.border < 0.0 {
            return Err(GraphError::InvalidData(
                "plot border must be finite and >= 0".to_owned(),
            ));
        }
        if !self.horstart.is_finite() || self.horstart < 0.0 {
            return Err(GraphError::InvalidData(
                "plot horstart must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Pixel y of the bottom border line.
    #[must_use]
    pub fn bottom(self) -> f64 {
        self.height + self.border
    }
}
