mod bar_series;
mod frame;
mod line_series;
mod null_renderer;
mod primitives;

pub use bar_series::{BarSeriesOptions, project_bar_series};
pub use frame::{FrameSize, RenderFrame};
pub use line_series::{
    LineSeriesOptions, LineSeriesProjection, MarkerPrimitive, PointMarker, project_line_series,
};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PathOp, PathPrimitive, RectPrimitive,
    RoundRectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::GraphResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()>;
}
