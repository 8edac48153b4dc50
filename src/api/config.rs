use crate::core::types::DEFAULT_BORDER;
use crate::error::{GraphError, GraphResult};
use crate::render::{Color, FrameSize};

/// Vertical placement of the legend box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Fixed-geometry legend box settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendConfig {
    pub visible: bool,
    pub width: f64,
    pub align: LegendAlign,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            visible: false,
            width: 120.0,
            align: LegendAlign::default(),
        }
    }
}

/// Static presentation settings of one chart engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEngineConfig {
    pub size: FrameSize,
    pub border: f64,
    pub title: Option<String>,
    pub draw_grid: bool,
    pub grid_color: Color,
    pub show_horizontal_labels: bool,
    pub show_vertical_labels: bool,
    pub horizontal_label_color: Color,
    pub vertical_label_color: Color,
    pub label_text_size: f64,
    pub label_padding: f64,
    /// Width reserved left of the plot for right-aligned vertical labels.
    pub vertical_label_area_width: f64,
    pub legend: LegendConfig,
    /// Rotating default colors assigned to series added without a style.
    pub palette: Vec<Color>,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(size: FrameSize) -> Self {
        Self {
            size,
            border: DEFAULT_BORDER,
            title: None,
            draw_grid: true,
            grid_color: Color::GRAY,
            show_horizontal_labels: true,
            show_vertical_labels: true,
            horizontal_label_color: Color::DARK_GRAY,
            vertical_label_color: Color::DARK_GRAY,
            label_text_size: 14.0,
            label_padding: 8.0,
            vertical_label_area_width: 50.0,
            legend: LegendConfig::default(),
            palette: default_palette(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn validate(&self) -> GraphResult<()> {
        if !self.size.is_valid() {
            return Err(GraphError::InvalidPlotRect {
                width: f64::from(self.size.width),
                height: f64::from(self.size.height),
            });
        }
        if !self.border.is_finite() || self.border < 0.0 {
            return Err(GraphError::InvalidData(
                "border must be finite and >= 0".to_owned(),
            ));
        }
        if !self.label_text_size.is_finite() || self.label_text_size <= 0.0 {
            return Err(GraphError::InvalidData(
                "label text size must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_padding.is_finite() || self.label_padding < 0.0 {
            return Err(GraphError::InvalidData(
                "label padding must be finite and >= 0".to_owned(),
            ));
        }
        if !self.vertical_label_area_width.is_finite() || self.vertical_label_area_width < 0.0 {
            return Err(GraphError::InvalidData(
                "vertical label area width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.legend.width.is_finite() || self.legend.width <= 0.0 {
            return Err(GraphError::InvalidData(
                "legend width must be finite and > 0".to_owned(),
            ));
        }
        if self.palette.is_empty() {
            return Err(GraphError::InvalidData(
                "palette must not be empty".to_owned(),
            ));
        }
        self.grid_color.validate()?;
        self.horizontal_label_color.validate()?;
        self.vertical_label_color.validate()?;
        for color in &self.palette {
            color.validate()?;
        }
        Ok(())
    }
}

/// Default rotating series palette (holo blue/purple/green/orange/red).
#[must_use]
pub fn default_palette() -> Vec<Color> {
    vec![
        Color::rgb(0x33 as f64 / 255.0, 0xB5 as f64 / 255.0, 0xE5 as f64 / 255.0),
        Color::rgb(0xAA as f64 / 255.0, 0x66 as f64 / 255.0, 0xCC as f64 / 255.0),
        Color::rgb(0x99 as f64 / 255.0, 0xCC as f64 / 255.0, 0x00 as f64 / 255.0),
        Color::rgb(0xFF as f64 / 255.0, 0xBB as f64 / 255.0, 0x33 as f64 / 255.0),
        Color::rgb(0xFF as f64 / 255.0, 0x44 as f64 / 255.0, 0x44 as f64 / 255.0),
    ]
}
