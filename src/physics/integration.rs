/// Per-frame rigid body integration
///
/// Semi-implicit Euler: velocity is updated from the accumulated force
/// before position is updated from the new velocity. After the step the
/// force accumulator is cleared and re-seeded with gravity, then floor
/// contact is resolved according to the body kind.

use super::{BodyKind, RigidBody, Vec3};
use crate::constants::physics::{
    BOUNCE_DAMPING, CONTACT_FRICTION, FLOOR_HEIGHT, GRAVITY, REST_SPEED,
};
use cgmath::Zero;

/// Advance a body by `delta_time` seconds.
/// Static bodies are left untouched. A zero delta moves nothing.
pub fn advance(body: &mut RigidBody, delta_time: f32) {
    if body.kind == BodyKind::Static {
        return;
    }
    debug_assert!(body.mass() > 0.0, "rigid body with non-positive mass");

    let acceleration = body.force / body.mass();
    body.velocity += acceleration * delta_time;
    body.position += body.velocity * delta_time;

    body.force = Vec3::zero();
    body.force.y += GRAVITY * body.mass();

    resolve_floor_contact(body);
}

/// Clamp a body to the floor. Returns true if the body touched it this call.
pub fn resolve_floor_contact(body: &mut RigidBody) -> bool {
    match body.kind {
        BodyKind::Player => {
            let min_eye_height = FLOOR_HEIGHT + body.height;
            if body.position.y < min_eye_height {
                body.position.y = min_eye_height;
                body.velocity.y = 0.0;
                true
            } else {
                false
            }
        }
        BodyKind::Dynamic => {
            if body.position.y >= FLOOR_HEIGHT {
                return false;
            }

            body.position.y = FLOOR_HEIGHT;
            if body.velocity.y < 0.0 {
                body.velocity.y = -body.velocity.y * BOUNCE_DAMPING;
                if body.velocity.y.abs() < REST_SPEED {
                    body.velocity.y = 0.0;
                }
                // Friction only bites on frames that actually hit the floor moving down
                body.velocity.x *= CONTACT_FRICTION;
                body.velocity.z *= CONTACT_FRICTION;
            }
            true
        }
        BodyKind::Static => false,
    }
}
