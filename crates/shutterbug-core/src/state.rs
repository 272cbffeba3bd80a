//! Game state snapshot: the complete visible state handed to the renderer each update.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::CaptureEvent;
use crate::types::{Position, SimTime};

/// Complete game state published after each update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub targets: Vec<TargetView>,
    pub viewpoint: ViewpointView,
    pub presentation: PresentationView,
    pub score: ScoreView,
    pub events: Vec<CaptureEvent>,
}

/// A live target in the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    /// Entity id in bits form, stable for the target's lifetime.
    pub id: u64,
    pub category: Category,
    pub position: Position,
    pub captured: bool,
    /// Whether removal is already scheduled.
    pub despawning: bool,
}

/// Where the camera is and where it points.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewpointView {
    pub eye: Position,
    /// Yaw in degrees, positive turns right.
    pub yaw_deg: f64,
    /// Pitch in degrees, negative looks up.
    pub pitch_deg: f64,
    pub crouching: bool,
    pub zoomed: bool,
    pub fov_deg: f64,
}

/// Overlay, photo frame and camera tool state for the UI layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresentationView {
    pub capture_phase: CapturePhase,
    /// Flash overlay opacity (white).
    pub flash_alpha: f64,
    /// Photo frame opacity.
    pub photo_alpha: f64,
    pub photo_visible: bool,
    /// Dimensions of the photo bound to the frame, if any.
    pub photo_size: Option<(u32, u32)>,
    pub tool_deployed: bool,
    pub tool_visible: bool,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub total_points: u64,
    pub label: String,
    pub photos_taken: u32,
    pub targets_captured: u32,
}
