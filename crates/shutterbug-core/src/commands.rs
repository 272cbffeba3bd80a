//! Player commands sent from the input layer to the simulation.
//!
//! Each command is one input edge. Commands are queued and processed
//! at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Camera tool ---
    /// Deploy or stow the camera tool.
    ToggleCameraTool,
    /// Take a photo. Ignored unless the tool is deployed and no sequence is running.
    Capture,

    // --- Viewpoint ---
    /// Rotate the view by raw input deltas (scaled by sensitivity and dt).
    Look { yaw_delta: f64, pitch_delta: f64 },
    /// Toggle crouching.
    ToggleCrouch,
    /// Engage or release the zoom modifier.
    SetZoom { engaged: bool },

    // --- Simulation control ---
    /// Set time scale (1.0 = normal, 2.0 = double).
    SetTimeScale { scale: f64 },
    /// Reset the scene and start a new session.
    StartSession,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
