/// Bounded body arena
///
/// Slots are pre-allocated up front and handed out in order. Ids are plain
/// indices and stay valid for the lifetime of the pool; nothing is ever
/// removed, so `active_count` only grows.

use super::{advance, RigidBody, Vec3, MAX_BODIES};
use crate::error::{EngineError, EngineResult};
use cgmath::Zero;

/// Body identifier - simple index into the slot array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BodyId(pub u32);

impl BodyId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub struct BodyPool {
    slots: Vec<RigidBody>,
    active_count: usize,
}

impl BodyPool {
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize(capacity, RigidBody::fixed(Vec3::zero()));

        Self {
            slots,
            active_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub fn is_full(&self) -> bool {
        self.active_count >= self.slots.len()
    }

    /// Place a body in the next free slot
    pub fn spawn(&mut self, body: RigidBody) -> EngineResult<BodyId> {
        if self.is_full() {
            log::warn!(
                "[PHYSICS] Body pool full, dropping spawn at ({:.2}, {:.2}, {:.2})",
                body.position.x,
                body.position.y,
                body.position.z
            );
            return Err(EngineError::PoolFull {
                capacity: self.capacity(),
            });
        }

        let idx = self.active_count;
        self.slots[idx] = body;
        self.active_count += 1;

        log::debug!("[PHYSICS] Spawned {:?} body #{}", body.kind, idx);
        Ok(BodyId(idx as u32))
    }

    pub fn get(&self, id: BodyId) -> EngineResult<&RigidBody> {
        self.active().get(id.index()).ok_or(EngineError::UnknownBody { index: id.index() })
    }

    pub fn get_mut(&mut self, id: BodyId) -> EngineResult<&mut RigidBody> {
        let index = id.index();
        self.slots[..self.active_count]
            .get_mut(index)
            .ok_or(EngineError::UnknownBody { index })
    }

    /// Active bodies in spawn order
    pub fn active(&self) -> &[RigidBody] {
        &self.slots[..self.active_count]
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &RigidBody)> {
        self.active()
            .iter()
            .enumerate()
            .map(|(idx, body)| (BodyId(idx as u32), body))
    }

    /// Advance every active body by one frame
    pub fn advance_all(&mut self, delta_time: f32) {
        for body in &mut self.slots[..self.active_count] {
            advance(body, delta_time);
        }
    }
}

impl Default for BodyPool {
    fn default() -> Self {
        Self::new(MAX_BODIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_stable_and_sequential() {
        let mut pool = BodyPool::new(4);
        let a = pool.spawn(RigidBody::dynamic(Vec3::new(1.0, 5.0, 0.0), 1.0).unwrap()).unwrap();
        let b = pool.spawn(RigidBody::dynamic(Vec3::new(2.0, 5.0, 0.0), 1.0).unwrap()).unwrap();

        assert_eq!(a, BodyId(0));
        assert_eq!(b, BodyId(1));
        assert_eq!(pool.active_count(), 2);
        assert_eq!(pool.get(b).unwrap().position.x, 2.0);
    }

    #[test]
    fn test_spawn_past_capacity_fails() {
        let mut pool = BodyPool::new(2);
        for _ in 0..2 {
            pool.spawn(RigidBody::fixed(Vec3::zero())).unwrap();
        }

        let result = pool.spawn(RigidBody::fixed(Vec3::zero()));
        assert!(matches!(result, Err(EngineError::PoolFull { capacity: 2 })));
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_unspawned_slot_is_unknown() {
        let pool = BodyPool::new(8);
        assert!(matches!(
            pool.get(BodyId(3)),
            Err(EngineError::UnknownBody { index: 3 })
        ));
    }

    #[test]
    fn test_advance_all_only_touches_active_bodies() {
        let mut pool = BodyPool::new(3);
        let id = pool
            .spawn(
                RigidBody::dynamic(Vec3::new(0.0, 10.0, 0.0), 1.0)
                    .unwrap()
                    .with_velocity(Vec3::new(1.0, 0.0, 0.0)),
            )
            .unwrap();

        pool.advance_all(0.5);

        assert_eq!(pool.get(id).unwrap().position.x, 0.5);
        assert_eq!(pool.iter().count(), 1);
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(BodyPool::default().capacity(), MAX_BODIES);
    }
}
