//! Scroll-driven camera: the page "dives" toward the mesh as it scrolls.

use crate::constants::*;
use crate::error::ConfigError;
use crate::lift::Viewport;
use glam::{Mat4, Vec3};

/// Maps a scroll offset to camera depth and a slight downward tilt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub base_depth: f32,
    pub min_depth: f32,
    pub intensity: f32,
    pub tilt_per_scroll: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            base_depth: CAMERA_BASE_DEPTH,
            min_depth: CAMERA_MIN_DEPTH,
            intensity: CAMERA_DIVE_INTENSITY,
            tilt_per_scroll: CAMERA_TILT_PER_SCROLL,
        }
    }
}

impl CameraRig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_depth > self.base_depth {
            return Err(ConfigError::DepthBounds {
                min: self.min_depth,
                base: self.base_depth,
            });
        }
        if !(self.intensity > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "dive intensity",
                value: self.intensity,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn depth(&self, scroll: f32) -> f32 {
        (self.base_depth - scroll * self.intensity).max(self.min_depth)
    }

    #[inline]
    pub fn tilt_x(&self, scroll: f32) -> f32 {
        scroll * self.tilt_per_scroll
    }

    /// Scroll offset past which the depth stays pinned at `min_depth`.
    pub fn clamp_threshold(&self) -> f32 {
        (self.base_depth - self.min_depth) / self.intensity
    }

    pub fn pose(&self, scroll: f32) -> CameraPose {
        CameraPose {
            depth: self.depth(scroll),
            tilt_x: self.tilt_x(scroll),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub depth: f32,
    pub tilt_x: f32,
}

/// Perspective camera placed on the +Z axis and pitched by `tilt_x`.
#[derive(Clone, Debug)]
pub struct Camera {
    pub pose: CameraPose,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(pose: CameraPose, aspect: f32) -> Self {
        Self {
            pose,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        let world = Mat4::from_translation(Vec3::new(0.0, 0.0, self.pose.depth))
            * Mat4::from_rotation_x(self.pose.tilt_x);
        world.inverse()
    }

    /// World extent visible at the origin, used to map the pointer onto the mesh.
    pub fn viewport(&self) -> Viewport {
        Viewport::at_distance(self.fovy_radians, self.aspect, self.pose.depth)
    }
}
