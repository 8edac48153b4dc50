use tracing::{debug, trace};

use crate::core::{DataSeries, ObserverHandle, Point, SeriesEvent, SeriesStyle};
use crate::error::{GraphError, GraphResult};
use crate::render::Renderer;

use super::engine::{ChartEngine, ChartSeries, SeriesKind};

impl<R: Renderer> ChartEngine<R> {
    /// Adds a series and returns its index.
    ///
    /// A series arriving without an explicit style receives the next color
    /// from the rotating palette with the default stroke thickness.
    pub fn add_series(&mut self, mut series: DataSeries, kind: SeriesKind) -> GraphResult<usize> {
        if series.style().is_none() {
            let color = self.config.palette[self.next_color % self.config.palette.len()];
            self.next_color += 1;
            series.set_style(SeriesStyle::new(color, 3.0))?;
        }

        debug!(points = series.len(), "add series");
        self.series.push(ChartSeries { data: series, kind });
        self.invalidate_labels();
        Ok(self.series.len() - 1)
    }

    /// Removes a series by index.
    pub fn remove_series(&mut self, index: usize) -> GraphResult<DataSeries> {
        if index >= self.series.len() {
            return Err(GraphError::SeriesIndexOutOfBounds {
                index,
                len: self.series.len(),
            });
        }
        let removed = self.series.remove(index);
        self.invalidate_labels();
        Ok(removed.data)
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn series(&self, index: usize) -> GraphResult<&DataSeries> {
        self.series
            .get(index)
            .map(|s| &s.data)
            .ok_or(GraphError::SeriesIndexOutOfBounds {
                index,
                len: self.series.len(),
            })
    }

    pub fn series_mut(&mut self, index: usize) -> GraphResult<&mut DataSeries> {
        let len = self.series.len();
        self.series
            .get_mut(index)
            .map(|s| &mut s.data)
            .ok_or(GraphError::SeriesIndexOutOfBounds { index, len })
    }

    /// Points of one series visible under the current viewport.
    pub fn visible_points(&self, index: usize) -> GraphResult<Vec<Point>> {
        Ok(self.series(index)?.visible_points(self.viewport))
    }

    /// Appends one sample to a series.
    ///
    /// With `scroll_to_end` the viewport follows the newest data, which
    /// requires an active viewport.
    pub fn append_point(
        &mut self,
        index: usize,
        point: Point,
        scroll_to_end: bool,
    ) -> GraphResult<()> {
        self.series_mut(index)?.append(point, scroll_to_end)?;
        trace!(series = index, scroll_to_end, "append point");

        if scroll_to_end {
            self.scroll_to_end()?;
        } else {
            self.invalidate_labels();
        }
        Ok(())
    }

    /// Replaces one series' dataset and drops every cache.
    pub fn reset_series(&mut self, index: usize, points: Vec<Point>) -> GraphResult<()> {
        self.series_mut(index)?.reset(points)?;
        self.redraw_all();
        Ok(())
    }

    /// Registers an external redraw observer on one series.
    pub fn observe_series(
        &mut self,
        index: usize,
        callback: Box<dyn FnMut(SeriesEvent)>,
    ) -> GraphResult<ObserverHandle> {
        Ok(self.series_mut(index)?.register_observer(callback))
    }

    /// Removes a previously registered series observer.
    pub fn unobserve_series(&mut self, index: usize, handle: ObserverHandle) -> GraphResult<bool> {
        Ok(self.series_mut(index)?.unregister_observer(handle))
    }
}
