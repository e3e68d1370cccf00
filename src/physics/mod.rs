pub mod body;
pub mod body_pool;
pub mod integration;

pub use body::{BodyKind, RigidBody};
pub use body_pool::{BodyId, BodyPool};
pub use integration::{advance, resolve_floor_contact};

pub use crate::constants::physics::{FLOOR_HEIGHT, GRAVITY, MAX_BODIES};

use cgmath::Vector3;

pub type Vec3 = Vector3<f32>;
