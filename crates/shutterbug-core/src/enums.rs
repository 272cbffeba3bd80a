//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Target category, fixed at spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Common,
    Fast,
    Rare,
}

impl Category {
    /// Map a uniform roll in `[0, 1)` to a category.
    ///
    /// Boundary rolls fall to the lower-rarity bucket: exactly 0.7 is Common,
    /// exactly 0.9 is Fast.
    pub fn from_roll(roll: f64) -> Self {
        if roll > RARE_ROLL_THRESHOLD {
            Category::Rare
        } else if roll > FAST_ROLL_THRESHOLD {
            Category::Fast
        } else {
            Category::Common
        }
    }

    /// Points awarded for the first capture of a target of this category.
    pub fn points(self) -> u64 {
        match self {
            Category::Common => COMMON_POINTS,
            Category::Fast => FAST_POINTS,
            Category::Rare => RARE_POINTS,
        }
    }

    /// Descent speed of this category's prefab.
    pub fn speed(self) -> f64 {
        match self {
            Category::Common => COMMON_SPEED,
            Category::Fast => FAST_SPEED,
            Category::Rare => RARE_SPEED,
        }
    }
}

/// Position of the capture controller in its presentation sequence.
///
/// `Detecting` and `FlashingIn` are instantaneous: they are passed through
/// within the update that accepts the trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapturePhase {
    #[default]
    Idle,
    Detecting,
    FlashingIn,
    /// Waiting for the frame boundary before grabbing the screen.
    CapturedVisible,
    FlashFading,
    PhotoHolding,
    PhotoFading,
}

impl CapturePhase {
    /// Whether the camera tool must be hidden so it stays out of the photo.
    pub fn hides_tool(self) -> bool {
        matches!(self, CapturePhase::FlashingIn | CapturePhase::CapturedVisible)
    }
}

/// Why a capture trigger was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// A presentation sequence is already running.
    SequenceActive,
    /// The camera tool is not deployed.
    ToolStowed,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Idle,
    Active,
    Paused,
}
