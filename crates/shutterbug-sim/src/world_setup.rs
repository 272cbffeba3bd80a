//! Entity spawn factories for the scene.
//!
//! Targets are plain component bundles in the hecs world. A target body may
//! carry child collider parts linked back to it through `Parent`.

use hecs::{Entity, World};

use shutterbug_core::components::*;
use shutterbug_core::constants::TARGET_COLLIDER_RADIUS;
use shutterbug_core::enums::Category;
use shutterbug_core::types::{Position, Velocity};

/// Links a collider part to the entity that owns it.
#[derive(Debug, Clone, Copy)]
pub struct Parent {
    pub entity: Entity,
    /// Part position relative to the parent.
    pub offset: Position,
}

/// Head part offset above the body centre.
const HEAD_OFFSET: Position = Position {
    x: 0.0,
    y: 0.7,
    z: 0.0,
};
const HEAD_RADIUS: f64 = 0.35;

/// Clear the scene for a new session.
pub fn reset_scene(world: &mut World) {
    world.clear();
}

/// Spawn a target body with a head part, moving at `velocity`.
pub fn spawn_target(
    world: &mut World,
    category: Category,
    position: Position,
    velocity: Velocity,
) -> Entity {
    let body = world.spawn((
        Target::new(category),
        position,
        velocity,
        Collider {
            radius: TARGET_COLLIDER_RADIUS,
        },
    ));
    spawn_part(world, body, HEAD_OFFSET, HEAD_RADIUS);
    body
}

/// Spawn a collider part attached to `parent`.
pub fn spawn_part(world: &mut World, parent: Entity, offset: Position, radius: f64) -> Entity {
    let parent_pos = world
        .get::<&Position>(parent)
        .map(|p| *p)
        .unwrap_or_default();
    world.spawn((
        parent_pos.offset(offset.x, offset.y, offset.z),
        Collider { radius },
        Parent {
            entity: parent,
            offset,
        },
    ))
}

/// Spawn static scenery that blocks photos.
pub fn spawn_obstacle(world: &mut World, position: Position, radius: f64) -> Entity {
    world.spawn((Obstacle, position, Collider { radius }))
}
