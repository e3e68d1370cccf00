/// Rigid body data
///
/// A body is plain data; the integrator in `integration` is the only thing
/// that moves it. `force` is an accumulator that the integrator drains and
/// re-seeds with gravity on every step.

use super::Vec3;
use crate::error::{EngineError, EngineResult};
use cgmath::Zero;

/// How the integrator and the floor treat a body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Position is eye height; stands on the floor at `FLOOR_HEIGHT + height`
    Player,
    /// Falls, bounces and slides
    Dynamic,
    /// Never integrated
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub force: Vec3,
    pub kind: BodyKind,
    pub height: f32,
    mass: f32,
}

impl RigidBody {
    /// Create a body at rest with an empty force accumulator.
    /// Mass must be strictly positive; anything else is a configuration fault.
    pub fn new(kind: BodyKind, position: Vec3, mass: f32, height: f32) -> EngineResult<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(EngineError::InvalidMass { mass });
        }

        Ok(Self {
            position,
            velocity: Vec3::zero(),
            force: Vec3::zero(),
            kind,
            height,
            mass,
        })
    }

    pub fn player(position: Vec3, height: f32, mass: f32) -> EngineResult<Self> {
        Self::new(BodyKind::Player, position, mass, height)
    }

    pub fn dynamic(position: Vec3, mass: f32) -> EngineResult<Self> {
        Self::new(BodyKind::Dynamic, position, mass, 0.0)
    }

    /// Static bodies ignore mass entirely, so they get unit mass.
    pub fn fixed(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::zero(),
            force: Vec3::zero(),
            kind: BodyKind::Static,
            height: 0.0,
            mass: 1.0,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Add to the force accumulator for the next step
    pub fn apply_force(&mut self, force: Vec3) {
        self.force += force;
    }
}
