/// Camera data and orientation rules
///
/// The camera is a player-kind rigid body plus a yaw/pitch orientation and a
/// field of view, all in degrees. Every transform in this module returns a
/// camera whose angles already satisfy the invariants below:
/// yaw in [-180, 180], pitch in [-89, 89], FOV in [30, 120].

use crate::config::CameraConfig;
use crate::constants::camera::{FOV_MAX, FOV_MIN, PITCH_LIMIT, YAW_LIMIT};
use crate::error::EngineResult;
use crate::physics::{RigidBody, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraData {
    pub body: RigidBody,
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
    pub fov_degrees: f32,
}

/// Build the startup camera from configuration
pub fn init_camera(config: &CameraConfig) -> EngineResult<CameraData> {
    let body = RigidBody::player(Vec3::from(config.position), config.height, config.mass)?;

    Ok(CameraData {
        body,
        yaw_degrees: normalize_yaw(config.yaw),
        pitch_degrees: clamp_pitch(config.pitch),
        fov_degrees: clamp_fov(config.fov),
    })
}

/// Wrap yaw by whole turns into [-180, 180]. In-range values are returned as-is.
pub fn normalize_yaw(yaw_degrees: f32) -> f32 {
    if (-YAW_LIMIT..=YAW_LIMIT).contains(&yaw_degrees) || !yaw_degrees.is_finite() {
        return yaw_degrees;
    }
    let turns = ((yaw_degrees + YAW_LIMIT) / 360.0).floor();
    yaw_degrees - turns * 360.0
}

pub fn clamp_pitch(pitch_degrees: f32) -> f32 {
    pitch_degrees.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

pub fn clamp_fov(fov_degrees: f32) -> f32 {
    fov_degrees.clamp(FOV_MIN, FOV_MAX)
}

/// Camera transformations (return new camera data)
pub mod transform {
    use super::*;

    /// Turn the camera by delta yaw and pitch (degrees)
    pub fn rotate(camera: &CameraData, delta_yaw: f32, delta_pitch: f32) -> CameraData {
        let mut updated = *camera;
        updated.yaw_degrees = normalize_yaw(camera.yaw_degrees + delta_yaw);
        updated.pitch_degrees = clamp_pitch(camera.pitch_degrees + delta_pitch);
        updated
    }

    /// Widen or narrow the field of view, staying within limits
    pub fn adjust_fov(camera: &CameraData, delta: f32) -> CameraData {
        let mut updated = *camera;
        updated.fov_degrees = clamp_fov(camera.fov_degrees + delta);
        updated
    }

    /// Move the camera body along world axes
    pub fn translate(camera: &CameraData, offset: Vec3) -> CameraData {
        let mut updated = *camera;
        updated.body.position += offset;
        updated
    }
}

pub mod diagnostics {
    use super::*;

    pub fn log_camera_context(camera: &CameraData, context: &str) {
        let p = camera.body.position;
        log::debug!(
            "[CAMERA] {} - Position: ({:.2}, {:.2}, {:.2}), Velocity Y: {:.2}, \
             Yaw: {:.1}°, Pitch: {:.1}°, FOV: {:.0}°",
            context,
            p.x,
            p.y,
            p.z,
            camera.body.velocity.y,
            camera.yaw_degrees,
            camera.pitch_degrees,
            camera.fov_degrees
        );
    }
}
