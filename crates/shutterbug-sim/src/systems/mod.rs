//! ECS systems that operate on the simulation world each update.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! Long-lived state they need is passed in by the engine.

pub mod cleanup;
pub mod movement;
pub mod snapshot;
pub mod spawner;
