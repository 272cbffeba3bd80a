//! Simulation engine for SHUTTERBUG.
//!
//! Owns the hecs ECS world, runs systems once per update, drives the photo
//! capture state machine, and produces GameStateSnapshots for the renderer.

pub mod capture;
pub mod config;
pub mod detection;
pub mod engine;
pub mod host;
pub mod score;
pub mod systems;
pub mod viewpoint;
pub mod world_setup;

pub use config::{ConfigError, SimConfig};
pub use engine::SimulationEngine;
pub use host::Collaborators;
pub use shutterbug_core as core;
