//! Kinematic integration system.
//!
//! Updates Position from Velocity each update, then carries collider parts
//! along with their parents.

use hecs::World;

use shutterbug_core::types::{Position, Velocity};

use crate::world_setup::Parent;

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        pos.z += vel.z * dt;
    }
}

/// Snap every part to its parent's position plus offset.
/// Parts whose parent is gone are left for cleanup.
pub fn sync_parts(world: &mut World) {
    let mut moves = Vec::new();
    for (entity, parent) in world.query::<&Parent>().iter() {
        if let Ok(parent_pos) = world.get::<&Position>(parent.entity) {
            let offset = parent.offset;
            moves.push((entity, parent_pos.offset(offset.x, offset.y, offset.z)));
        }
    }
    for (entity, new_pos) in moves {
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            *pos = new_pos;
        }
    }
}
