mod config;
mod data_controller;
mod engine;
mod frame_builder;
mod label_cache;
mod legend;
mod viewport_controller;

pub use config::{ChartEngineConfig, LegendAlign, LegendConfig};
pub use engine::{ChartEngine, SeriesKind};
