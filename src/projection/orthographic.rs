/// Orthographic projection
///
/// Depth is dropped entirely: camera-space x/y are scaled by a fixed number
/// of pixels per unit and centred on the viewport. Points behind the camera
/// still land on screen, which is why this path has no sentinel.

use super::{to_pixel, ScreenPoint, Viewport};
use crate::camera::{to_camera_space, CameraData};
use crate::physics::Vec3;

pub fn project(v: Vec3, camera: &CameraData, scale: f32, viewport: Viewport) -> ScreenPoint {
    let r = to_camera_space(v, camera);
    project_camera_space(r, scale, viewport)
}

pub fn project_camera_space(r: Vec3, scale: f32, viewport: Viewport) -> ScreenPoint {
    let (center_x, center_y) = viewport.center();
    ScreenPoint {
        x: to_pixel(r.x * scale + center_x),
        y: to_pixel(-r.y * scale + center_y),
    }
}
