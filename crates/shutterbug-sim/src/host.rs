//! Collaborators supplied by the host: detection, screen capture, audio.
//!
//! The engine owns these for its lifetime. Screen capture and audio are
//! optional; when absent the matching step of the capture sequence is a no-op.

use shutterbug_core::types::{AudioClip, CapturedFrame};

use crate::detection::{DetectionQuery, WorldCaster};

/// Grabs the rendered frame. Only called at the frame-boundary suspension point.
pub trait ScreenCapture {
    fn capture_frame(&mut self) -> CapturedFrame;
}

/// Fire-and-forget sound playback.
pub trait AudioSink {
    fn play_one_shot(&mut self, clip: &AudioClip);
}

/// Everything the engine calls out to.
pub struct Collaborators {
    pub detection: Box<dyn DetectionQuery>,
    pub screen: Option<Box<dyn ScreenCapture>>,
    pub audio: Option<Box<dyn AudioSink>>,
}

impl Collaborators {
    pub fn new(detection: impl DetectionQuery + 'static) -> Self {
        Self {
            detection: Box::new(detection),
            screen: None,
            audio: None,
        }
    }

    pub fn with_screen(mut self, screen: impl ScreenCapture + 'static) -> Self {
        self.screen = Some(Box::new(screen));
        self
    }

    pub fn with_audio(mut self, audio: impl AudioSink + 'static) -> Self {
        self.audio = Some(Box::new(audio));
        self
    }
}

impl Default for Collaborators {
    /// World caster, no screen, no audio.
    fn default() -> Self {
        Self::new(WorldCaster)
    }
}
