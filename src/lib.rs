//! graphview: chart geometry and viewport engine.
//!
//! This crate computes everything a host needs to draw a zoomable,
//! scrollable 2D chart (axis ranges, tick labels, and pixel-space
//! primitives for line and bar series) while leaving actual pixel
//! output to a pluggable [`render::Renderer`] backend.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{GraphError, GraphResult};
