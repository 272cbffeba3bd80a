//! Cleanup system: removes targets that hit the floor, targets whose
//! delayed removal expired, and parts left without a parent.

use hecs::{Entity, World};

use shutterbug_core::components::{PendingDespawn, Target};
use shutterbug_core::types::Position;

use crate::world_setup::Parent;

const TIMER_EPSILON: f64 = 1e-9;

/// Uses a pre-allocated buffer to avoid per-update allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, floor_height: f64, dt: f64) {
    despawn_buffer.clear();

    // Boundary collision with the floor.
    for (entity, (pos, _target)) in world.query_mut::<(&Position, &Target)>() {
        if pos.y <= floor_height {
            despawn_buffer.push(entity);
        }
    }

    // Delayed removal of captured targets.
    for (entity, pending) in world.query_mut::<&mut PendingDespawn>() {
        pending.remaining_secs -= dt;
        if pending.remaining_secs <= TIMER_EPSILON {
            despawn_buffer.push(entity);
        }
    }

    despawn_buffer.sort_unstable();
    despawn_buffer.dedup();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    // Parts whose parent was just removed (or never existed).
    for (entity, parent) in world.query::<&Parent>().iter() {
        if !world.contains(parent.entity) {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
