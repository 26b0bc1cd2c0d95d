//! Per-frame update tying the mesh, camera and panel tilt together.

use crate::camera::{Camera, CameraRig};
use crate::constants::WAVE_TIME_SCALE;
use crate::error::ConfigError;
use crate::lift::LiftParams;
use crate::mesh::{GridConfig, GridMesh};
use crate::parallax::{PanelRotation, ParallaxController, TiltConfig, TiltSource};
use crate::state::InputState;
use crate::wave::WaveParams;

/// Everything tunable about the background and the hero tilt.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneConfig {
    pub grid: GridConfig,
    pub wave: WaveParams,
    pub lift: LiftParams,
    pub camera: CameraRig,
    pub tilt: TiltConfig,
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        self.camera.validate()?;
        self.tilt.validate()?;
        if !(self.lift.radius > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "lift radius",
                value: self.lift.radius,
            });
        }
        Ok(())
    }
}

/// What the frame callback hands to the renderer and the DOM.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub camera: Camera,
    pub panel: PanelRotation,
    /// Wave phase time used for this frame.
    pub wave_time: f32,
}

pub struct Scene {
    config: SceneConfig,
    mesh: GridMesh,
    parallax: ParallaxController,
    elapsed_sec: f32,
}

impl Scene {
    pub fn new(
        config: SceneConfig,
        source: TiltSource,
        initial: &InputState,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mesh = GridMesh::new(config.grid, &config.wave)?;
        let parallax = ParallaxController::new(source, config.tilt, initial);
        log::debug!(
            "[scene] vertices={} tilt={:?}",
            mesh.vertex_count(),
            parallax.source()
        );
        Ok(Self {
            config,
            mesh,
            parallax,
            elapsed_sec: 0.0,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn mesh(&self) -> &GridMesh {
        &self.mesh
    }

    pub fn mesh_mut(&mut self) -> &mut GridMesh {
        &mut self.mesh
    }

    pub fn elapsed_sec(&self) -> f32 {
        self.elapsed_sec
    }

    /// Advance the clock by `dt_sec` and recompute camera, mesh depth and
    /// panel tilt from `input`.
    pub fn frame(&mut self, input: &InputState, dt_sec: f32, aspect: f32) -> FrameOutput {
        self.elapsed_sec += dt_sec.max(0.0);
        let wave_time = self.elapsed_sec * WAVE_TIME_SCALE;

        let camera = Camera::new(self.config.camera.pose(input.scroll), aspect.max(1e-3));
        self.mesh.update(
            &self.config.wave,
            &self.config.lift,
            wave_time,
            input.pointer_ndc,
            camera.viewport(),
        );
        let panel = self.parallax.step(input, dt_sec);

        FrameOutput {
            camera,
            panel,
            wave_time,
        }
    }
}
