//! Simulation context
//!
//! Owns everything one running view needs: validated config, the camera,
//! the current projection mode, the body pool and the static scene. There
//! is no global state; callers pass the context to input handling and
//! rendering explicitly.

use crate::camera::{diagnostics, init_camera, CameraData};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::physics::{advance, BodyId, BodyPool, RigidBody, Vec3};
use crate::projection::{self, ProjectionMode, ProjectionSettings, ScreenPoint};
use crate::scene::{render_scene, FrameStats, Scene, SceneEmitter};

#[derive(Debug, Clone)]
pub struct SimulationContext {
    config: EngineConfig,
    pub camera: CameraData,
    pub mode: ProjectionMode,
    pub bodies: BodyPool,
    pub scene: Scene,
    frame: u64,
}

impl SimulationContext {
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;

        let camera = init_camera(&config.camera)?;
        let bodies = BodyPool::new(config.simulation.body_capacity);
        let scene = Scene::standard(&config.scene);
        let mode = config.projection.mode;

        log::info!(
            "[SIM] Context ready: {:?} projection, {:?} look, {} body slots",
            mode,
            config.controls.look_mode,
            bodies.capacity()
        );
        diagnostics::log_camera_context(&camera, "init");

        Ok(Self {
            config,
            camera,
            mode,
            bodies,
            scene,
            frame: 0,
        })
    }

    /// Validated configuration, fixed for the lifetime of the context
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Frames stepped so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance the camera and every pooled body by one frame
    pub fn step(&mut self, delta_time: f32) {
        let dt = self.sanitize_delta(delta_time);

        advance(&mut self.camera.body, dt);
        self.bodies.advance_all(dt);
        self.frame += 1;

        log::trace!(
            "[SIM] Frame {} dt={:.4}s camera y={:.3}",
            self.frame,
            dt,
            self.camera.body.position.y
        );
    }

    fn sanitize_delta(&self, delta_time: f32) -> f32 {
        if !delta_time.is_finite() || delta_time < 0.0 {
            log::warn!("[SIM] Ignoring invalid frame delta {}", delta_time);
            return 0.0;
        }

        let max = self.config.simulation.max_delta_time;
        if delta_time > max {
            log::debug!("[SIM] Frame delta {:.3}s capped to {:.3}s", delta_time, max);
            return max;
        }
        delta_time
    }

    pub fn spawn_body(&mut self, body: RigidBody) -> EngineResult<BodyId> {
        self.bodies.spawn(body)
    }

    pub fn toggle_projection(&mut self) -> ProjectionMode {
        self.mode = self.mode.toggled();
        log::info!("[SIM] Projection switched to {:?}", self.mode);
        self.mode
    }

    pub fn projection_settings(&self) -> ProjectionSettings {
        ProjectionSettings::from_config(&self.config, self.mode)
    }

    pub fn project_point(&self, v: Vec3) -> Option<ScreenPoint> {
        projection::project_point(v, &self.camera, &self.projection_settings())
    }

    pub fn render(&self, emitter: &mut impl SceneEmitter) -> FrameStats {
        render_scene(self, emitter)
    }
}
