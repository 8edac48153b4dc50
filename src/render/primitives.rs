use smallvec::SmallVec;

use crate::error::{GraphError, GraphResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::rgb(0.53, 0.53, 0.53);
    pub const DARK_GRAY: Self = Self::rgb(0.27, 0.27, 0.27);

    pub fn validate(self) -> GraphResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GraphError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> GraphResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(GraphError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(GraphError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one filled axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
        }
    }

    pub fn validate(self) -> GraphResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(GraphError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(GraphError::InvalidData(
                "rect extents must be >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one filled rounded rectangle (legend box).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub color: Color,
}

impl RoundRectPrimitive {
    pub fn validate(self) -> GraphResult<()> {
        RectPrimitive::new(self.x, self.y, self.width, self.height, self.color).validate()?;
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(GraphError::InvalidData(
                "corner radius must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one filled circle (point marker).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: Color,
}

impl CirclePrimitive {
    pub fn validate(self) -> GraphResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(GraphError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GraphError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Single path construction step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    /// Quadratic Bezier toward `(x, y)` bending through the control point.
    QuadTo { cx: f64, cy: f64, x: f64, y: f64 },
    Close,
}

impl PathOp {
    fn is_finite(self) -> bool {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => x.is_finite() && y.is_finite(),
            Self::QuadTo { cx, cy, x, y } => {
                cx.is_finite() && cy.is_finite() && x.is_finite() && y.is_finite()
            }
            Self::Close => true,
        }
    }
}

/// Draw command for one stroked or filled path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub ops: SmallVec<[PathOp; 8]>,
    pub stroke_width: f64,
    pub color: Color,
    pub filled: bool,
}

impl PathPrimitive {
    #[must_use]
    pub fn stroked(stroke_width: f64, color: Color) -> Self {
        Self {
            ops: SmallVec::new(),
            stroke_width,
            color,
            filled: false,
        }
    }

    #[must_use]
    pub fn filled(color: Color) -> Self {
        Self {
            ops: SmallVec::new(),
            stroke_width: 1.0,
            color,
            filled: true,
        }
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(PathOp::MoveTo { x, y });
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(PathOp::LineTo { x, y });
    }

    pub fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.ops.push(PathOp::QuadTo { cx, cy, x, y });
    }

    pub fn close(&mut self) {
        self.ops.push(PathOp::Close);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.ops.is_empty() {
            return Err(GraphError::InvalidData(
                "path primitive must not be empty".to_owned(),
            ));
        }
        if !matches!(self.ops[0], PathOp::MoveTo { .. }) {
            return Err(GraphError::InvalidData(
                "path must start with a move".to_owned(),
            ));
        }
        for op in &self.ops {
            if !op.is_finite() {
                return Err(GraphError::InvalidData(
                    "path coordinates must be finite".to_owned(),
                ));
            }
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(GraphError::InvalidData(
                "path stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.text.is_empty() {
            return Err(GraphError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(GraphError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
