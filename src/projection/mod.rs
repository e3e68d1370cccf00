/// Projection Module
///
/// Maps world points to viewport pixels in either perspective or
/// orthographic mode. Off-screen results are `None`, never a magic
/// coordinate, so a caller cannot draw one by accident.
///
/// Perspective line drawing clips in camera space before the divide: a
/// point with z <= 0 would otherwise blow up or come out mirrored.
/// Orthographic drawing has no such singularity and skips clipping.

pub mod clipping;
pub mod orthographic;
pub mod perspective;

pub use clipping::clip_to_near_far;

use serde::{Deserialize, Serialize};

use crate::camera::{to_camera_space, CameraData};
use crate::config::EngineConfig;
use crate::constants::projection::{SCREEN_GUARD_BAND, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::physics::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        }
    }
}

/// Pixel position; y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Truncate a pixel coordinate, clamped to the guard band so that later
/// integer math on screen points cannot overflow
pub(crate) fn to_pixel(v: f32) -> i32 {
    v.clamp(-SCREEN_GUARD_BAND, SCREEN_GUARD_BAND) as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width as f32 * 0.5, self.height as f32 * 0.5)
    }

    pub fn contains(&self, p: ScreenPoint) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as i64) < self.width as i64 && (p.y as i64) < self.height as i64
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

/// Visible depth interval along camera +z (perspective only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthRange {
    pub near: f32,
    pub far: f32,
}

/// Everything a projection call needs besides the camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionSettings {
    pub mode: ProjectionMode,
    pub viewport: Viewport,
    pub depth: DepthRange,
    pub ortho_scale: f32,
    pub clipping_enabled: bool,
}

impl ProjectionSettings {
    pub fn from_config(config: &EngineConfig, mode: ProjectionMode) -> Self {
        Self {
            mode,
            viewport: config.viewport,
            depth: DepthRange {
                near: config.projection.near,
                far: config.projection.far,
            },
            ortho_scale: config.projection.ortho_scale,
            clipping_enabled: config.projection.clipping_enabled,
        }
    }
}

/// Project a single world point in the current mode
pub fn project_point(v: Vec3, camera: &CameraData, settings: &ProjectionSettings) -> Option<ScreenPoint> {
    match settings.mode {
        ProjectionMode::Orthographic => Some(orthographic::project(
            v,
            camera,
            settings.ortho_scale,
            settings.viewport,
        )),
        ProjectionMode::Perspective => perspective::project(
            to_camera_space(v, camera),
            camera.fov_degrees,
            settings.viewport,
            settings.depth,
        ),
    }
}

/// Perspective line entry point: camera space, clip, then project both ends.
/// Ignores `settings.mode`; orthographic lines go through [`project_segment`].
pub fn clipped_project_segment(
    a: Vec3,
    b: Vec3,
    camera: &CameraData,
    settings: &ProjectionSettings,
) -> Option<(ScreenPoint, ScreenPoint)> {
    let r1 = to_camera_space(a, camera);
    let r2 = to_camera_space(b, camera);
    let (r1, r2) = clip_to_near_far(r1, r2, settings.depth.near, settings.depth.far)?;

    let p1 = perspective::project_clipped(r1, camera.fov_degrees, settings.viewport)?;
    let p2 = perspective::project_clipped(r2, camera.fov_degrees, settings.viewport)?;
    Some((p1, p2))
}

/// Project a world segment the way the current settings ask for.
/// Without clipping, a segment with either end off-screen is dropped whole.
pub fn project_segment(
    a: Vec3,
    b: Vec3,
    camera: &CameraData,
    settings: &ProjectionSettings,
) -> Option<(ScreenPoint, ScreenPoint)> {
    if settings.mode == ProjectionMode::Perspective && settings.clipping_enabled {
        return clipped_project_segment(a, b, camera, settings);
    }

    let p1 = project_point(a, camera, settings)?;
    let p2 = project_point(b, camera, settings)?;
    Some((p1, p2))
}
