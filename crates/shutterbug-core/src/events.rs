//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Capture-sequence events, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CaptureEvent {
    /// A trigger was accepted and the shutter fired.
    ShutterReleased,
    /// A target was scored for the first time.
    TargetCaptured {
        category: Category,
        points: u64,
        total: u64,
    },
    /// The photo hit an already-captured target. No points.
    AlreadyCaptured { category: Category },
    /// The photo hit nothing scoreable.
    EmptyShot,
    /// The screen was grabbed and the photo revealed.
    PhotoTaken,
    /// A trigger was dropped.
    TriggerIgnored { reason: IgnoreReason },
    /// The photo faded out; the controller is idle again.
    SequenceFinished,
}
