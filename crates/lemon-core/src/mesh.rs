//! Fixed-topology grid whose depth is rewritten every frame.

use crate::constants::{GRID_SEGMENTS, GRID_SIZE, MESH_OFFSET, MESH_TILT_X};
use crate::error::ConfigError;
use crate::lift::{LiftParams, Viewport};
use crate::wave::WaveParams;
use glam::{Mat4, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub size: f32,
    pub segments: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            segments: GRID_SEGMENTS,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segments == 0 {
            return Err(ConfigError::NoSegments);
        }
        if !(self.size > 0.0) {
            return Err(ConfigError::GridSize(self.size));
        }
        Ok(())
    }

    #[inline]
    pub fn vertices_per_side(&self) -> usize {
        self.segments as usize + 1
    }
}

/// Square plane of `(segments + 1)^2` vertices centered on the origin.
///
/// Rows run from +y (top) to -y and columns from -x to +x, matching the
/// usual plane-geometry layout so the wireframe diagonals fall the same way.
#[derive(Clone, Debug)]
pub struct GridMesh {
    config: GridConfig,
    positions: Vec<[f32; 3]>,
    dirty: bool,
}

impl GridMesh {
    /// Build the grid and seed its depth with the wave field at `t = 0`.
    pub fn new(config: GridConfig, wave: &WaveParams) -> Result<Self, ConfigError> {
        config.validate()?;
        let n = config.vertices_per_side();
        let step = config.size / config.segments as f32;
        let half = config.size * 0.5;
        let mut positions = Vec::with_capacity(n * n);
        for iy in 0..n {
            let y = half - iy as f32 * step;
            for ix in 0..n {
                let x = ix as f32 * step - half;
                positions.push([x, y, wave.height(x, y, 0.0)]);
            }
        }
        Ok(Self {
            config,
            positions,
            dirty: true,
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Rewrite every vertex depth as `wave(x, y, t) + lift(x, y)`.
    pub fn update(
        &mut self,
        wave: &WaveParams,
        lift: &LiftParams,
        t: f32,
        pointer_ndc: Vec2,
        viewport: Viewport,
    ) {
        for p in self.positions.iter_mut() {
            let (x, y) = (p[0], p[1]);
            p[2] = wave.height(x, y, t) + lift.lift(Vec2::new(x, y), pointer_ndc, viewport);
        }
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether the geometry changed since the last call and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Line-list indices for the wireframe: every row edge, every column
    /// edge, and the diagonal splitting each cell into two triangles.
    pub fn line_indices(&self) -> Vec<u32> {
        let n = self.config.vertices_per_side() as u32;
        let segs = self.config.segments;
        let idx = |ix: u32, iy: u32| iy * n + ix;
        let mut out = Vec::with_capacity(line_count(segs) * 2);
        for iy in 0..n {
            for ix in 0..n {
                if ix + 1 < n {
                    out.extend_from_slice(&[idx(ix, iy), idx(ix + 1, iy)]);
                }
                if iy + 1 < n {
                    out.extend_from_slice(&[idx(ix, iy), idx(ix, iy + 1)]);
                }
                if ix + 1 < n && iy + 1 < n {
                    out.extend_from_slice(&[idx(ix, iy + 1), idx(ix + 1, iy)]);
                }
            }
        }
        out
    }
}

/// Number of wireframe lines for a grid with `segments` cells per side.
#[inline]
pub fn line_count(segments: u32) -> usize {
    let s = segments as usize;
    2 * s * (s + 1) + s * s
}

/// World transform of the background mesh.
pub fn model_matrix() -> Mat4 {
    Mat4::from_translation(Vec3::from_array(MESH_OFFSET)) * Mat4::from_rotation_x(MESH_TILT_X)
}
