/// Near/far plane clipping in camera space
///
/// Only the forward (z) axis is clipped. A segment either comes back fully
/// inside [near, far] or is rejected; there is no partial result.

use crate::constants::projection::CLIP_EPSILON;
use crate::physics::Vec3;

/// Clip a camera-space segment against the near and far planes.
/// Returns `None` when nothing of the segment is visible.
pub fn clip_to_near_far(a: Vec3, b: Vec3, near: f32, far: f32) -> Option<(Vec3, Vec3)> {
    if is_outside(a, b, near, far) {
        return None;
    }

    // Interpolation always runs along the original segment so that the
    // near and far clips land on the same line.
    let (original_a, original_b) = (a, b);
    let (mut a, mut b) = (a, b);

    if a.z < near && b.z > a.z {
        a = point_at_depth(original_a, original_b, near)?;
    } else if b.z < near && a.z > b.z {
        b = point_at_depth(original_a, original_b, near)?;
    }

    if a.z > far && b.z < a.z {
        a = point_at_depth(original_a, original_b, far)?;
    } else if b.z > far && a.z < b.z {
        b = point_at_depth(original_a, original_b, far)?;
    }

    if is_outside(a, b, near, far) {
        return None;
    }
    Some((a, b))
}

fn is_outside(a: Vec3, b: Vec3, near: f32, far: f32) -> bool {
    (a.z <= near && b.z <= near) || (a.z >= far && b.z >= far)
}

/// Point on the line through `a` and `b` whose z equals `depth`.
/// A segment with (almost) no depth span has no such unique point.
fn point_at_depth(a: Vec3, b: Vec3, depth: f32) -> Option<Vec3> {
    let dz = b.z - a.z;
    if dz.abs() < CLIP_EPSILON {
        return None;
    }

    let t = (depth - a.z) / dz;
    Some(Vec3::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y), depth))
}
