//! Engine configuration
//!
//! Every section falls back to the values in `constants`, so a config file
//! only has to name what it changes. `EngineConfig::default()` is the
//! mouse-look setup with near/far clipping; `drag_preset()` is the simpler
//! click-drag setup that projects without clipping.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{camera, controls, physics, projection, scene};
use crate::error::{invalid_config, EngineError, EngineResult};
use crate::input::LookMode;
use crate::projection::{ProjectionMode, Viewport};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub mode: ProjectionMode,
    pub near: f32,
    pub far: f32,
    pub ortho_scale: f32,
    /// Clip perspective segments against near/far before projecting
    pub clipping_enabled: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::Perspective,
            near: projection::NEAR_PLANE,
            far: projection::FAR_PLANE,
            ortho_scale: projection::ORTHO_SCALE,
            clipping_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    /// Eye height above the floor
    pub height: f32,
    pub mass: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: camera::START_POSITION,
            yaw: 0.0,
            pitch: 0.0,
            fov: camera::DEFAULT_FOV,
            height: camera::PLAYER_HEIGHT,
            mass: camera::PLAYER_MASS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub look_mode: LookMode,
    pub mouse_sensitivity: f32,
    pub drag_yaw_sensitivity: f32,
    pub drag_pitch_sensitivity: f32,
    pub move_speed: f32,
    pub rotation_speed: f32,
    pub fov_step: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            look_mode: LookMode::MouseLook,
            mouse_sensitivity: controls::MOUSE_SENSITIVITY,
            drag_yaw_sensitivity: controls::DRAG_YAW_SENSITIVITY,
            drag_pitch_sensitivity: controls::DRAG_PITCH_SENSITIVITY,
            move_speed: controls::MOVE_SPEED,
            rotation_speed: controls::ROTATION_SPEED,
            fov_step: controls::FOV_STEP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub floor_size: u32,
    pub floor_spacing: f32,
    pub axis_length: u32,
    pub line_thickness: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            floor_size: scene::FLOOR_SIZE,
            floor_spacing: scene::FLOOR_SPACING,
            axis_length: scene::AXIS_LENGTH,
            line_thickness: scene::LINE_THICKNESS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Frame deltas above this are capped before integration (seconds)
    pub max_delta_time: f32,
    pub body_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_delta_time: physics::MAX_DELTA_TIME,
            body_capacity: physics::MAX_BODIES,
        }
    }
}

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub viewport: Viewport,
    pub projection: ProjectionConfig,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    pub scene: SceneConfig,
    pub simulation: SimulationConfig,
}

impl EngineConfig {
    /// FPS-style mouse look with near/far clipping
    pub fn mouse_look_preset() -> Self {
        Self::default()
    }

    /// Click-drag rotation, no clipping, thin lines, camera hovering above the grid
    pub fn drag_preset() -> Self {
        Self {
            projection: ProjectionConfig {
                clipping_enabled: false,
                ..ProjectionConfig::default()
            },
            camera: CameraConfig {
                position: [0.0, 10.0, -5.0],
                fov: 60.0,
                height: 0.0,
                ..CameraConfig::default()
            },
            controls: ControlsConfig {
                look_mode: LookMode::Drag,
                move_speed: 5.0,
                ..ControlsConfig::default()
            },
            scene: SceneConfig {
                floor_size: 10,
                line_thickness: 1,
                ..SceneConfig::default()
            },
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(raw: &str) -> EngineResult<Self> {
        let config: EngineConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(invalid_config(
                "viewport",
                format!("{}x{} has no area", self.viewport.width, self.viewport.height),
            ));
        }

        let p = &self.projection;
        if !(p.near.is_finite() && p.near > 0.0) {
            return Err(invalid_config("projection.near", format!("{} must be positive", p.near)));
        }
        if !(p.far.is_finite() && p.far > p.near) {
            return Err(invalid_config(
                "projection.far",
                format!("{} must be greater than near ({})", p.far, p.near),
            ));
        }
        if !(p.ortho_scale.is_finite() && p.ortho_scale > 0.0) {
            return Err(invalid_config(
                "projection.ortho_scale",
                format!("{} must be positive", p.ortho_scale),
            ));
        }

        let c = &self.camera;
        if !(camera::FOV_MIN..=camera::FOV_MAX).contains(&c.fov) {
            return Err(invalid_config(
                "camera.fov",
                format!("{} outside [{}, {}]", c.fov, camera::FOV_MIN, camera::FOV_MAX),
            ));
        }
        if !(c.mass.is_finite() && c.mass > 0.0) {
            return Err(invalid_config("camera.mass", format!("{} must be positive", c.mass)));
        }

        let sc = &self.scene;
        if !(1..=scene::MAX_LINE_THICKNESS).contains(&sc.line_thickness) {
            return Err(invalid_config(
                "scene.line_thickness",
                format!("{} outside [1, {}]", sc.line_thickness, scene::MAX_LINE_THICKNESS),
            ));
        }
        if sc.floor_size > scene::MAX_FLOOR_SIZE {
            return Err(invalid_config(
                "scene.floor_size",
                format!("{} exceeds {}", sc.floor_size, scene::MAX_FLOOR_SIZE),
            ));
        }
        if sc.axis_length > scene::MAX_AXIS_LENGTH {
            return Err(invalid_config(
                "scene.axis_length",
                format!("{} exceeds {}", sc.axis_length, scene::MAX_AXIS_LENGTH),
            ));
        }
        if !(sc.floor_spacing.is_finite() && sc.floor_spacing > 0.0) {
            return Err(invalid_config(
                "scene.floor_spacing",
                format!("{} must be positive", sc.floor_spacing),
            ));
        }

        let s = &self.simulation;
        if !(s.max_delta_time.is_finite() && s.max_delta_time > 0.0) {
            return Err(invalid_config(
                "simulation.max_delta_time",
                format!("{} must be positive", s.max_delta_time),
            ));
        }
        if s.body_capacity > physics::MAX_BODY_CAPACITY {
            return Err(invalid_config(
                "simulation.body_capacity",
                format!("{} exceeds {}", s.body_capacity, physics::MAX_BODY_CAPACITY),
            ));
        }

        Ok(())
    }
}

/// Load, parse and validate a TOML config file
pub fn load_config(path: impl AsRef<Path>) -> EngineResult<EngineConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|error| EngineError::ConfigIo {
        path: path.to_path_buf(),
        error,
    })?;

    let config = EngineConfig::from_toml_str(&raw)?;
    log::info!(
        "[CONFIG] Loaded {} ({:?}, clipping {}, {}x{})",
        path.display(),
        config.projection.mode,
        if config.projection.clipping_enabled { "on" } else { "off" },
        config.viewport.width,
        config.viewport.height
    );
    Ok(config)
}
