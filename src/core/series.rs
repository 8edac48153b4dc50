use std::fmt;

use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::core::{Point, Viewport};
use crate::error::{GraphError, GraphResult};
use crate::render::Color;

/// Per-point color strategy. Absent means "use the series base color".
pub type ValueDependentColor = fn(Point) -> Color;

/// Visual style of one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub color: Color,
    pub thickness: f64,
    pub value_dependent_color: Option<ValueDependentColor>,
}

impl SeriesStyle {
    #[must_use]
    pub fn new(color: Color, thickness: f64) -> Self {
        Self {
            color,
            thickness,
            value_dependent_color: None,
        }
    }

    #[must_use]
    pub fn with_value_dependent_color(mut self, strategy: ValueDependentColor) -> Self {
        self.value_dependent_color = Some(strategy);
        self
    }

    /// Resolves the color used for a given point.
    #[must_use]
    pub fn color_for(&self, point: Point) -> Color {
        match self.value_dependent_color {
            Some(strategy) => strategy(point),
            None => self.color,
        }
    }

    pub fn validate(self) -> GraphResult<Self> {
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(GraphError::InvalidData(
                "series stroke thickness must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()?;
        Ok(self)
    }
}

/// Data-change notification delivered to registered observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesEvent {
    /// One point was appended. `scroll_to_end` asks observing charts to
    /// follow the newest data.
    Appended { scroll_to_end: bool },
    /// The whole dataset was replaced.
    Reset,
}

/// Opaque handle for a registered redraw observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

type ObserverCallback = Box<dyn FnMut(SeriesEvent)>;

/// One ordered, x-sorted data series plus its style and optional legend label.
///
/// Observers are opaque redraw callbacks, never chart objects, so a series
/// shared between several charts cannot form an ownership cycle.
pub struct DataSeries {
    points: Vec<Point>,
    style: Option<SeriesStyle>,
    label: Option<String>,
    observers: Vec<(ObserverHandle, ObserverCallback)>,
    next_observer: u64,
}

impl fmt::Debug for DataSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSeries")
            .field("points", &self.points.len())
            .field("style", &self.style)
            .field("label", &self.label)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl DataSeries {
    /// Creates a series from raw samples, canonicalizing their x order.
    pub fn new(points: Vec<Point>) -> GraphResult<Self> {
        Ok(Self {
            points: canonicalize_points(points)?,
            style: None,
            label: None,
            observers: Vec::new(),
            next_observer: 0,
        })
    }

    pub fn with_style(mut self, style: SeriesStyle) -> GraphResult<Self> {
        self.style = Some(style.validate()?);
        Ok(self)
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn style(&self) -> Option<&SeriesStyle> {
        self.style.as_ref()
    }

    pub fn set_style(&mut self, style: SeriesStyle) -> GraphResult<()> {
        self.style = Some(style.validate()?);
        Ok(())
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// Registers a redraw observer and returns its handle.
    pub fn register_observer(&mut self, callback: ObserverCallback) -> ObserverHandle {
        let handle = ObserverHandle(self.next_observer);
        self.next_observer += 1;
        self.observers.push((handle, callback));
        handle
    }

    /// Removes an observer. Returns whether the handle was registered.
    pub fn unregister_observer(&mut self, handle: ObserverHandle) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != handle);
        self.observers.len() != before
    }

    /// Appends one sample, keeping the non-decreasing-x invariant.
    pub fn append(&mut self, point: Point, scroll_to_end: bool) -> GraphResult<()> {
        if !point.is_finite() {
            return Err(GraphError::InvalidData(
                "appended point must be finite".to_owned(),
            ));
        }
        if let Some(last) = self.points.last()
            && point.x < last.x
        {
            return Err(GraphError::InvalidData(
                "appended point x must be >= the latest point x".to_owned(),
            ));
        }

        self.points.push(point);
        trace!(count = self.points.len(), "append series point");
        self.notify(SeriesEvent::Appended { scroll_to_end });
        Ok(())
    }

    /// Replaces the dataset and notifies observers.
    pub fn reset(&mut self, points: Vec<Point>) -> GraphResult<()> {
        let original_count = points.len();
        self.points = canonicalize_points(points)?;
        debug!(
            original_count,
            canonical_count = self.points.len(),
            "reset series data"
        );
        self.notify(SeriesEvent::Reset);
        Ok(())
    }

    /// Returns the points visible under `viewport`.
    ///
    /// An unset viewport returns all data. An active viewport keeps every
    /// in-window point plus the one point just before and just after the
    /// window, so lines reach the plot edges while scrolling.
    #[must_use]
    pub fn visible_points(&self, viewport: Viewport) -> Vec<Point> {
        if !viewport.is_active() {
            return self.points.clone();
        }

        let mut visible = Vec::new();
        for point in &self.points {
            if point.x >= viewport.start {
                visible.push(*point);
                if point.x > viewport.end() {
                    break;
                }
            } else if visible.is_empty() {
                visible.push(*point);
            } else {
                visible[0] = *point;
            }
        }
        visible
    }

    fn notify(&mut self, event: SeriesEvent) {
        for (_, callback) in &mut self.observers {
            callback(event);
        }
    }
}

/// Validates finiteness, sorts by x, and collapses x duplicates keeping the
/// most recently supplied sample.
pub fn canonicalize_points(mut points: Vec<Point>) -> GraphResult<Vec<Point>> {
    for point in &points {
        if !point.is_finite() {
            return Err(GraphError::InvalidData(
                "series points must be finite".to_owned(),
            ));
        }
    }

    points.sort_by_key(|point| OrderedFloat(point.x));
    points.reverse();
    points.dedup_by_key(|point| OrderedFloat(point.x));
    points.reverse();
    Ok(points)
}
