/// Camera Module
///
/// Camera data plus the two transforms every projected point goes through:
/// the yaw/pitch rotation and the world-to-camera-space mapping.

pub mod camera_space;
pub mod data_camera;
pub mod rotation;

pub use camera_space::{from_camera_space, to_camera_space};
pub use data_camera::{
    clamp_fov, clamp_pitch, diagnostics, init_camera, normalize_yaw, transform, CameraData,
};
pub use rotation::{rotate, unrotate};
