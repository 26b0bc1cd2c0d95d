//! Localized bump raised under the pointer.

use crate::constants::{LIFT_POINTER_GAIN, LIFT_RADIUS, LIFT_SCALE};
use glam::Vec2;

/// Visible world extent on the plane through the origin facing the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Extent seen by a perspective camera at `distance` from the origin.
    pub fn at_distance(fovy_radians: f32, aspect: f32, distance: f32) -> Self {
        let height = 2.0 * (fovy_radians * 0.5).tan() * distance;
        Self {
            width: height * aspect,
            height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiftParams {
    pub radius: f32,
    pub scale: f32,
    pub pointer_gain: f32,
}

impl Default for LiftParams {
    fn default() -> Self {
        Self {
            radius: LIFT_RADIUS,
            scale: LIFT_SCALE,
            pointer_gain: LIFT_POINTER_GAIN,
        }
    }
}

impl LiftParams {
    /// Lift for a vertex at planar distance `d` from the pointer.
    #[inline]
    pub fn for_distance(&self, d: f32) -> f32 {
        (self.radius - d).max(0.0) * self.scale
    }

    /// Maps a mesh-space vertex into the pointer's space and returns its
    /// distance to the pointer (given in canvas NDC).
    #[inline]
    pub fn distance(&self, vertex: Vec2, pointer_ndc: Vec2, viewport: Viewport) -> f32 {
        let w = if viewport.width.abs() > f32::EPSILON {
            viewport.width
        } else {
            1.0
        };
        let h = if viewport.height.abs() > f32::EPSILON {
            viewport.height
        } else {
            1.0
        };
        let v = Vec2::new(vertex.x / w, vertex.y / h);
        v.distance(pointer_ndc * self.pointer_gain)
    }

    #[inline]
    pub fn lift(&self, vertex: Vec2, pointer_ndc: Vec2, viewport: Viewport) -> f32 {
        self.for_distance(self.distance(vertex, pointer_ndc, viewport))
    }
}
