//! Shutterbug headless host.
//!
//! Runs the simulation engine on its own thread at 30Hz, feeds it player
//! commands from a line-based input stream and emits snapshots as JSON lines.

pub mod game_loop;
pub mod host;
pub mod input;
pub mod state;

pub use shutterbug_core as core;
