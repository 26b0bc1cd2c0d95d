//! Input snapshots shared between event handlers and the frame callback.
//!
//! Handlers never mutate fields in place: each one turns a browser event into
//! an [`InputEvent`] and stores `state.apply(event)`. The frame callback copies
//! the latest snapshot once per frame, so a frame always sees one consistent
//! state and repeated events simply overwrite each other.

use crate::constants::GYRO_CLAMP_DEG;
use glam::Vec2;

/// Device orientation normalized to `[-1, 1]` on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeviceTilt {
    /// Front-back tilt (beta).
    pub pitch: f32,
    /// Left-right tilt (gamma).
    pub roll: f32,
}

impl DeviceTilt {
    /// Clamp raw beta/gamma degrees to ±30 and normalize.
    pub fn from_degrees(beta: f32, gamma: f32) -> Self {
        let norm = |deg: f32| deg.clamp(-GYRO_CLAMP_DEG, GYRO_CLAMP_DEG) / GYRO_CLAMP_DEG;
        Self {
            pitch: norm(beta),
            roll: norm(gamma),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer moved. `ndc` is canvas-relative in `[-1, 1]` (y up); `panel`
    /// is relative to the hero panel box, `[0, 1]` inside it.
    PointerMoved { ndc: Vec2, panel: Vec2 },
    /// Document scrolled to this vertical offset in CSS pixels.
    Scrolled(f32),
    Tilted(DeviceTilt),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub pointer_ndc: Vec2,
    pub panel_pointer: Vec2,
    pub scroll: f32,
    pub tilt: Option<DeviceTilt>,
}

impl InputState {
    /// New snapshot with the field named by `event` replaced.
    #[must_use]
    pub fn apply(self, event: InputEvent) -> Self {
        match event {
            InputEvent::PointerMoved { ndc, panel } => Self {
                pointer_ndc: ndc,
                panel_pointer: panel,
                ..self
            },
            InputEvent::Scrolled(offset) => Self {
                scroll: if offset.is_finite() { offset.max(0.0) } else { 0.0 },
                ..self
            },
            InputEvent::Tilted(tilt) => Self {
                tilt: Some(tilt),
                ..self
            },
        }
    }
}
