use crate::error::{GraphError, GraphResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, RoundRectPrimitive,
    TextPrimitive,
};

/// Pixel dimensions of the frame being rendered into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub size: FrameSize,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub round_rects: Vec<RoundRectPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(size: FrameSize) -> Self {
        Self {
            size,
            lines: Vec::new(),
            rects: Vec::new(),
            round_rects: Vec::new(),
            circles: Vec::new(),
            paths: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> GraphResult<()> {
        if !self.size.is_valid() {
            return Err(GraphError::InvalidPlotRect {
                width: f64::from(self.size.width),
                height: f64::from(self.size.height),
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for round_rect in &self.round_rects {
            round_rect.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for path in &self.paths {
            path.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.round_rects.is_empty()
            && self.circles.is_empty()
            && self.paths.is_empty()
            && self.texts.is_empty()
    }
}
