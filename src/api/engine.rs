use tracing::debug;

use crate::animation::{GrowthAnimator, GrowthMode};
use crate::core::{DataSeries, LabelFormatter, Viewport};
use crate::error::{GraphError, GraphResult};
use crate::interaction::GestureClassifier;
use crate::render::{BarSeriesOptions, FrameSize, LineSeriesOptions, Renderer};

use super::ChartEngineConfig;
use super::label_cache::LabelCache;

/// Rendering algorithm used for one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesKind {
    Line(LineSeriesOptions),
    Bar(BarSeriesOptions),
}

pub(super) struct ChartSeries {
    pub(super) data: DataSeries,
    pub(super) kind: SeriesKind,
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` coordinates series data, viewport state, axis ranges,
/// label caches, gesture classification, growth animation, and renderer
/// calls.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) series: Vec<ChartSeries>,
    pub(super) viewport: Viewport,
    pub(super) scrollable: bool,
    pub(super) scalable: bool,
    pub(super) manual_y_bounds: Option<(f64, f64)>,
    pub(super) horizontal_labels: LabelCache,
    pub(super) vertical_labels: LabelCache,
    pub(super) x_formatter: Option<LabelFormatter>,
    pub(super) y_formatter: Option<LabelFormatter>,
    pub(super) gesture: GestureClassifier,
    pub(super) animator: GrowthAnimator,
    pub(super) next_color: usize,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            series: Vec::new(),
            viewport: Viewport::unset(),
            scrollable: false,
            scalable: false,
            manual_y_bounds: None,
            horizontal_labels: LabelCache::default(),
            vertical_labels: LabelCache::default(),
            x_formatter: None,
            y_formatter: None,
            gesture: GestureClassifier::new(),
            animator: GrowthAnimator::default(),
            next_color: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    /// Builds the current frame and hands it to the renderer backend.
    pub fn render(&mut self) -> GraphResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Resizes the render target, dropping stale label geometry.
    pub fn set_size(&mut self, size: FrameSize) -> GraphResult<()> {
        if !size.is_valid() {
            return Err(GraphError::InvalidPlotRect {
                width: f64::from(size.width),
                height: f64::from(size.height),
            });
        }
        self.config.size = size;
        self.invalidate_labels();
        Ok(())
    }

    /// Drops every label and formatter cache; the next frame regenerates
    /// them from current data.
    pub fn redraw_all(&mut self) {
        self.horizontal_labels.invalidate();
        self.vertical_labels.invalidate();
        self.x_formatter = None;
        self.y_formatter = None;
        debug!("label and formatter caches dropped");
    }

    pub(super) fn invalidate_labels(&mut self) {
        self.horizontal_labels.invalidate();
        self.vertical_labels.invalidate();
    }

    /// Pins the y axis to explicit bounds instead of scanning data.
    pub fn set_manual_y_bounds(&mut self, max: f64, min: f64) -> GraphResult<()> {
        if !max.is_finite() || !min.is_finite() || max < min {
            return Err(GraphError::InvalidData(
                "manual y bounds must be finite with max >= min".to_owned(),
            ));
        }
        self.manual_y_bounds = Some((min, max));
        self.redraw_all();
        Ok(())
    }

    /// Returns the y axis to data-driven bounds.
    pub fn clear_manual_y_bounds(&mut self) {
        self.manual_y_bounds = None;
        self.redraw_all();
    }

    #[must_use]
    pub fn manual_y_bounds(&self) -> Option<(f64, f64)> {
        self.manual_y_bounds
    }

    /// Replaces static x-axis labels; `None` re-enables generation.
    pub fn set_horizontal_labels(&mut self, labels: Option<Vec<String>>) {
        self.horizontal_labels.set_fixed(labels);
    }

    /// Replaces static y-axis labels (top to bottom); `None` re-enables
    /// generation.
    pub fn set_vertical_labels(&mut self, labels: Option<Vec<String>>) {
        self.vertical_labels.set_fixed(labels);
    }

    pub fn set_legend_visible(&mut self, visible: bool) {
        self.config.legend.visible = visible;
    }

    pub fn set_legend_align(&mut self, align: super::LegendAlign) {
        self.config.legend.align = align;
    }

    pub fn set_legend_width(&mut self, width: f64) -> GraphResult<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(GraphError::InvalidData(
                "legend width must be finite and > 0".to_owned(),
            ));
        }
        self.config.legend.width = width;
        Ok(())
    }

    /// Replaces the growth animator configuration.
    pub fn set_growth_animation(&mut self, mode: GrowthMode, duration_ms: f64) -> GraphResult<()> {
        self.animator = GrowthAnimator::new(mode, duration_ms)?;
        Ok(())
    }

    /// Driver start callback: seeds zero growth for every tracked point.
    pub fn animation_started(&mut self) {
        let lens: Vec<usize> = self.series.iter().map(|s| s.data.len()).collect();
        self.animator.on_start(&lens);
    }

    /// Driver tick callback: applies the latest progress to the whole
    /// growth table before the host requests a redraw.
    pub fn animation_tick(&mut self, progress: f64) -> GraphResult<()> {
        self.animator.on_tick(progress)
    }

    /// Cancels one point's growth without affecting the others.
    pub fn cancel_point_animation(&mut self, series_index: usize, point_index: usize) -> bool {
        self.animator.cancel(series_index, point_index)
    }

    #[must_use]
    pub fn growth_scale(&self, series_index: usize, point_index: usize) -> f64 {
        self.animator.scale(series_index, point_index)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }
}
