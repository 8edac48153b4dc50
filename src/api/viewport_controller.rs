use tracing::trace;

use crate::core::{Viewport, range};
use crate::error::{GraphError, GraphResult};
use crate::interaction::{GestureAction, GestureEvent};
use crate::render::Renderer;

use super::engine::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Activates an explicit x window. Invalidates cached labels.
    pub fn set_viewport(&mut self, start: f64, size: f64) -> GraphResult<()> {
        self.viewport = Viewport::new(start, size)?;
        self.invalidate_labels();
        Ok(())
    }

    /// Returns to the unset "show all data" state.
    pub fn clear_viewport(&mut self) {
        self.viewport = Viewport::unset();
        self.invalidate_labels();
    }

    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.scrollable
    }

    pub fn set_scrollable(&mut self, scrollable: bool) {
        self.scrollable = scrollable;
    }

    #[must_use]
    pub fn is_scalable(&self) -> bool {
        self.scalable
    }

    /// Enabling scaling forces scrollability.
    pub fn set_scalable(&mut self, scalable: bool) {
        self.scalable = scalable;
        if scalable {
            self.scrollable = true;
        }
    }

    /// Moves the viewport so its right edge sits at the newest data.
    pub fn scroll_to_end(&mut self) -> GraphResult<()> {
        if !self.viewport.is_active() {
            return Err(GraphError::InvalidState(
                "cannot scroll to end without a viewport".to_owned(),
            ));
        }
        let Some(max_x) = range::max_x(self.data_series(), self.viewport, true) else {
            return Err(GraphError::InvalidState(
                "cannot scroll to end of an empty chart".to_owned(),
            ));
        };
        self.viewport.scroll_to_end(max_x);
        self.redraw_all();
        Ok(())
    }

    /// Pans the viewport by a pixel delta against the full data extent.
    pub fn pan(&mut self, delta_px: f64) -> GraphResult<bool> {
        let Some(extent) = range::x_extent(self.data_series()) else {
            return Ok(false);
        };
        let plot = self.plot_rect()?;
        let changed = self.viewport.pan(delta_px, plot.width, extent)?;
        if changed {
            self.invalidate_labels();
            trace!(start = self.viewport.start, "viewport panned");
        }
        Ok(changed)
    }

    /// Zooms the viewport by an incremental pinch factor.
    pub fn zoom(&mut self, factor: f64) -> GraphResult<bool> {
        let Some(extent) = range::x_extent(self.data_series()) else {
            return Ok(false);
        };
        let changed = self.viewport.zoom(factor, extent)?;
        if changed {
            self.redraw_all();
            trace!(
                start = self.viewport.start,
                size = self.viewport.size,
                "viewport zoomed"
            );
        }
        Ok(changed)
    }

    /// Feeds one normalized gesture event through the classifier and
    /// applies the resulting viewport command.
    ///
    /// Returns whether the event was handled; a non-scrollable chart
    /// reports `false` for every event.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> GraphResult<bool> {
        let action = self
            .gesture
            .classify(event, self.scrollable, self.scalable);
        match action {
            Some(GestureAction::Pan(delta)) => {
                self.pan(delta)?;
                Ok(true)
            }
            Some(GestureAction::Zoom(factor)) => {
                self.zoom(factor)?;
                Ok(true)
            }
            None => Ok(self.scrollable),
        }
    }

    pub(super) fn data_series(&self) -> impl Iterator<Item = &crate::core::DataSeries> {
        self.series.iter().map(|s| &s.data)
    }
}
