/// Perspective projection of camera-space points
///
/// x_ndc = x / (z * tan(fov/2) * aspect), y_ndc = -y / (z * tan(fov/2)),
/// then NDC [-1, 1] is stretched over the viewport. Screen y grows
/// downward, hence the sign flip on y.

use super::{to_pixel, DepthRange, ScreenPoint, Viewport};
use crate::physics::Vec3;
use cgmath::{Deg, Rad};

/// Project a camera-space point that has not been clipped.
/// Anything at or in front of the near plane, or at or past the far plane, is off-screen.
pub fn project(r: Vec3, fov_degrees: f32, viewport: Viewport, depth: DepthRange) -> Option<ScreenPoint> {
    if r.z <= depth.near || r.z >= depth.far {
        return None;
    }
    Some(to_screen(r, fov_degrees, viewport))
}

/// Project a camera-space point that was already clipped to the depth range.
/// Only the divide itself is guarded.
pub fn project_clipped(r: Vec3, fov_degrees: f32, viewport: Viewport) -> Option<ScreenPoint> {
    if r.z <= 0.0 {
        return None;
    }
    Some(to_screen(r, fov_degrees, viewport))
}

fn to_screen(r: Vec3, fov_degrees: f32, viewport: Viewport) -> ScreenPoint {
    let tan_half = (Rad::from(Deg(fov_degrees)).0 * 0.5).tan();
    let aspect = viewport.aspect();

    let x_ndc = r.x / (r.z * tan_half * aspect);
    let y_ndc = -r.y / (r.z * tan_half);

    ScreenPoint {
        x: to_pixel((x_ndc + 1.0) * 0.5 * viewport.width as f32),
        y: to_pixel((y_ndc + 1.0) * 0.5 * viewport.height as f32),
    }
}
