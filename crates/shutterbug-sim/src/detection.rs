//! Detection query: the cast that decides what a photo hit.
//!
//! The capture controller only sees the `DetectionQuery` trait, so tests can
//! swap in fixed results. `WorldCaster` is the real implementation, an
//! analytic swept-sphere test against every `Collider` in the world.

use glam::DVec3;
use hecs::{Entity, World};

use shutterbug_core::components::{Collider, Target};
use shutterbug_core::constants::MAX_PARENT_DEPTH;
use shutterbug_core::types::Position;

use crate::world_setup::Parent;

/// Shape swept along the cast direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetectionShape {
    /// Zero-width ray.
    Ray,
    /// Sphere of the given radius.
    Sphere { radius: f64 },
}

impl DetectionShape {
    /// Radius 0 (or less) degrades to a ray.
    pub fn from_radius(radius: f64) -> Self {
        if radius > 0.0 {
            DetectionShape::Sphere { radius }
        } else {
            DetectionShape::Ray
        }
    }

    pub fn radius(self) -> f64 {
        match self {
            DetectionShape::Ray => 0.0,
            DetectionShape::Sphere { radius } => radius,
        }
    }
}

/// One detection cast.
#[derive(Debug, Clone, Copy)]
pub struct CastRequest {
    pub origin: Position,
    /// Need not be normalized. A zero vector hits nothing.
    pub direction: DVec3,
    pub shape: DetectionShape,
    pub max_range: f64,
}

/// The nearest collidable the cast touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Entity owning the collider that was hit (may be a part of a target).
    pub entity: Entity,
    /// Distance travelled along the cast before contact.
    pub distance: f64,
    /// Centre of the swept shape at contact.
    pub point: Position,
}

/// Physics-side detection primitive.
pub trait DetectionQuery {
    /// Return the nearest hit along the cast, or `None`.
    fn cast(&self, world: &World, request: &CastRequest) -> Option<SurfaceHit>;
}

/// Swept-sphere caster over every `(Position, Collider)` in the world.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldCaster;

impl DetectionQuery for WorldCaster {
    fn cast(&self, world: &World, request: &CastRequest) -> Option<SurfaceHit> {
        let dir = request.direction.normalize_or_zero();
        if dir == DVec3::ZERO {
            return None;
        }
        let origin = request.origin.to_dvec3();
        let cast_radius = request.shape.radius();

        let mut nearest: Option<SurfaceHit> = None;
        let mut query = world.query::<(&Position, &Collider)>();
        for (entity, (pos, collider)) in query.iter() {
            let reach = collider.radius + cast_radius;
            let Some(t) = sweep_distance(origin, dir, pos.to_dvec3(), reach) else {
                continue;
            };
            if t > request.max_range {
                continue;
            }
            if nearest.is_none_or(|hit| t < hit.distance) {
                nearest = Some(SurfaceHit {
                    entity,
                    distance: t,
                    point: Position::from_dvec3(origin + dir * t),
                });
            }
        }
        nearest
    }
}

/// Distance along unit `dir` at which a point moving from `origin` first comes
/// within `reach` of `center`. Zero if it starts inside.
fn sweep_distance(origin: DVec3, dir: DVec3, center: DVec3, reach: f64) -> Option<f64> {
    let m = origin - center;
    let b = m.dot(dir);
    let c = m.length_squared() - reach * reach;
    if c <= 0.0 {
        return Some(0.0);
    }
    // Outside and pointing away.
    if b > 0.0 {
        return None;
    }
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    Some((-b - disc.sqrt()).max(0.0))
}

/// Resolve a hit entity to the target that owns it, climbing `Parent` links.
///
/// Returns `None` for obstacles and for part chains that never reach a target.
pub fn resolve_target(world: &World, hit: Entity) -> Option<Entity> {
    let mut current = hit;
    for _ in 0..=MAX_PARENT_DEPTH {
        if world.get::<&Target>(current).is_ok() {
            return Some(current);
        }
        let parent = world.get::<&Parent>(current).ok()?.entity;
        current = parent;
    }
    None
}
