use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{GraphError, GraphResult};

/// How bar growth is distributed across the points of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum GrowthMode {
    /// Every bar shares one scale equal to the driver progress.
    #[default]
    Whole,
    /// Each point runs its own growth, starting `point_index * stagger_ms`
    /// after the previous one. Completion and cancellation of one point
    /// never affect the others.
    PerPoint { stagger_ms: f64 },
}

/// Per-(series, point) animated growth scales driven by an external timer.
///
/// The external animation driver delivers a monotonically increasing
/// progress value in [0, 1]; `on_tick` updates the whole table before the
/// host requests a redraw, so render-time reads are always consistent with
/// the latest delivered progress. Entries absent from the table read as a
/// full-height 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthAnimator {
    mode: GrowthMode,
    duration_ms: f64,
    scales: IndexMap<(usize, usize), f64>,
}

/// Duration of one point's growth, matching the original 1s entrance.
pub const DEFAULT_GROWTH_DURATION_MS: f64 = 1000.0;

impl Default for GrowthAnimator {
    fn default() -> Self {
        Self {
            mode: GrowthMode::Whole,
            duration_ms: DEFAULT_GROWTH_DURATION_MS,
            scales: IndexMap::new(),
        }
    }
}

impl GrowthAnimator {
    pub fn new(mode: GrowthMode, duration_ms: f64) -> GraphResult<Self> {
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(GraphError::InvalidData(
                "animation duration must be finite and > 0".to_owned(),
            ));
        }
        if let GrowthMode::PerPoint { stagger_ms } = mode
            && (!stagger_ms.is_finite() || stagger_ms < 0.0)
        {
            return Err(GraphError::InvalidData(
                "animation stagger must be finite and >= 0".to_owned(),
            ));
        }
        Ok(Self {
            mode,
            duration_ms,
            scales: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn mode(&self) -> GrowthMode {
        self.mode
    }

    /// Seeds one zero-scale entry per point of each series.
    ///
    /// `series_lens[i]` is the point count of series i. Called from the
    /// driver's start callback.
    pub fn on_start(&mut self, series_lens: &[usize]) {
        self.scales.clear();
        for (series_index, len) in series_lens.iter().enumerate() {
            for point_index in 0..*len {
                self.scales.insert((series_index, point_index), 0.0);
            }
        }
        trace!(entries = self.scales.len(), "growth animation started");
    }

    /// Applies one driver tick, updating every tracked entry.
    pub fn on_tick(&mut self, progress: f64) -> GraphResult<()> {
        if !progress.is_finite() {
            return Err(GraphError::InvalidData(
                "animation progress must be finite".to_owned(),
            ));
        }
        let progress = progress.clamp(0.0, 1.0);

        match self.mode {
            GrowthMode::Whole => {
                for scale in self.scales.values_mut() {
                    *scale = progress;
                }
            }
            GrowthMode::PerPoint { stagger_ms } => {
                let max_delay = self
                    .scales
                    .keys()
                    .map(|(_, point_index)| *point_index as f64 * stagger_ms)
                    .fold(0.0_f64, f64::max);
                let elapsed = progress * (self.duration_ms + max_delay);

                for ((_, point_index), scale) in &mut self.scales {
                    let delay = *point_index as f64 * stagger_ms;
                    *scale = ((elapsed - delay) / self.duration_ms).clamp(0.0, 1.0);
                }
            }
        }
        Ok(())
    }

    /// Cancels one point's growth; it renders at full height afterwards.
    /// Other entries keep animating.
    pub fn cancel(&mut self, series_index: usize, point_index: usize) -> bool {
        self.scales
            .shift_remove(&(series_index, point_index))
            .is_some()
    }

    /// Current growth scale for one point. Untracked points are full height.
    #[must_use]
    pub fn scale(&self, series_index: usize, point_index: usize) -> f64 {
        self.scales
            .get(&(series_index, point_index))
            .copied()
            .unwrap_or(1.0)
    }

    /// Materializes the scales for one series as a dense slice-friendly vec.
    #[must_use]
    pub fn series_scales(&self, series_index: usize, len: usize) -> Vec<f64> {
        (0..len)
            .map(|point_index| self.scale(series_index, point_index))
            .collect()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scales.values().any(|scale| *scale < 1.0)
    }

    /// Drops every tracked entry, ending the animation at full height.
    pub fn finish(&mut self) {
        self.scales.clear();
    }
}
