//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Entity links (`Parent`) live in the sim crate, which owns the ECS.

use serde::{Deserialize, Serialize};

use crate::enums::Category;

/// A photographable target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target {
    pub category: Category,
    /// Set exactly once, on the first capture that scores this target.
    pub captured: bool,
}

impl Target {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            captured: false,
        }
    }

    pub fn points(&self) -> u64 {
        self.category.points()
    }
}

/// Spherical collision volume centred on the entity's position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
}

/// Marks a collidable that blocks detection but never scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle;

/// Scheduled removal. Cleanup despawns the entity once the timer runs out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PendingDespawn {
    pub remaining_secs: f64,
}
