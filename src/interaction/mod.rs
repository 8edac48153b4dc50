use serde::{Deserialize, Serialize};

/// Position of a normalized gesture event within a touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    Begin,
    Move,
    End,
}

/// Normalized gesture event delivered by the host input layer.
///
/// `pan_delta` is the horizontal pointer movement in pixels since the last
/// event; `scale_factor` is the incremental pinch factor (1.0 when the
/// event carries no scaling).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub pan_delta: f64,
    pub scale_factor: f64,
    pub phase: GesturePhase,
}

impl GestureEvent {
    #[must_use]
    pub fn begin() -> Self {
        Self {
            pan_delta: 0.0,
            scale_factor: 1.0,
            phase: GesturePhase::Begin,
        }
    }

    #[must_use]
    pub fn pan(delta: f64) -> Self {
        Self {
            pan_delta: delta,
            scale_factor: 1.0,
            phase: GesturePhase::Move,
        }
    }

    #[must_use]
    pub fn pinch(factor: f64) -> Self {
        Self {
            pan_delta: 0.0,
            scale_factor: factor,
            phase: GesturePhase::Move,
        }
    }

    #[must_use]
    pub fn end() -> Self {
        Self {
            pan_delta: 0.0,
            scale_factor: 1.0,
            phase: GesturePhase::End,
        }
    }
}

/// Viewport command produced by gesture classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    Pan(f64),
    Zoom(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
enum GestureMode {
    #[default]
    Idle,
    Panning,
    Scaling,
}

/// Classifies normalized gesture events into viewport commands.
///
/// A sequence classified as scaling suppresses pan interpretation until the
/// sequence ends; a non-scrollable chart short-circuits every event to
/// "unhandled".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureClassifier {
    mode: GestureMode,
}

impl GestureClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(
        &mut self,
        event: GestureEvent,
        scrollable: bool,
        scalable: bool,
    ) -> Option<GestureAction> {
        if !scrollable {
            self.mode = GestureMode::Idle;
            return None;
        }

        match event.phase {
            GesturePhase::Begin => {
                self.mode = GestureMode::Idle;
                None
            }
            GesturePhase::End => {
                self.mode = GestureMode::Idle;
                None
            }
            GesturePhase::Move => {
                let scaling_event = scalable && event.scale_factor != 1.0;
                if self.mode == GestureMode::Scaling || scaling_event {
                    // Scale takes priority for the rest of the sequence.
                    self.mode = GestureMode::Scaling;
                    if event.scale_factor != 1.0 {
                        Some(GestureAction::Zoom(event.scale_factor))
                    } else {
                        None
                    }
                } else {
                    self.mode = GestureMode::Panning;
                    Some(GestureAction::Pan(event.pan_delta))
                }
            }
        }
    }
}
