use crate::render::{Color, RectPrimitive, RenderFrame, RoundRectPrimitive, TextHAlign, TextPrimitive};

use super::config::{ChartEngineConfig, LegendAlign};

const SWATCH_SIZE: f64 = 15.0;
const SWATCH_SPACING: f64 = 5.0;
const LEGEND_MARGIN: f64 = 10.0;
const CORNER_RADIUS: f64 = 8.0;

/// Emits the fixed-geometry legend box, one color swatch per series and
/// the series label next to it.
pub(super) fn build_legend(
    entries: &[(Option<Color>, Option<String>)],
    config: &ChartEngineConfig,
    frame: &mut RenderFrame,
) {
    if entries.is_empty() {
        return;
    }

    let width = f64::from(config.size.width);
    let height = f64::from(config.size.height);

    let legend_height =
        (SWATCH_SIZE + SWATCH_SPACING) * entries.len() as f64 + SWATCH_SPACING;
    let left = width - config.legend.width - LEGEND_MARGIN;
    let top = match config.legend.align {
        LegendAlign::Top => LEGEND_MARGIN,
        LegendAlign::Middle => height / 2.0 - legend_height / 2.0,
        LegendAlign::Bottom => height - config.border - legend_height - LEGEND_MARGIN,
    };

    frame.round_rects.push(RoundRectPrimitive {
        x: left,
        y: top,
        width: config.legend.width,
        height: legend_height,
        corner_radius: CORNER_RADIUS,
        color: Color::rgba(100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0, 180.0 / 255.0),
    });

    for (i, (color, label)) in entries.iter().enumerate() {
        let row_top = top + SWATCH_SPACING + i as f64 * (SWATCH_SIZE + SWATCH_SPACING);

        if let Some(color) = color {
            frame.rects.push(RectPrimitive::new(
                left + SWATCH_SPACING,
                row_top,
                SWATCH_SIZE,
                SWATCH_SIZE,
                *color,
            ));
        }

        if let Some(label) = label {
            frame.texts.push(TextPrimitive::new(
                label.clone(),
                left + SWATCH_SPACING + SWATCH_SIZE + SWATCH_SPACING,
                row_top + SWATCH_SIZE,
                config.label_text_size,
                Color::WHITE,
                TextHAlign::Left,
            ));
        }
    }
}
