//! Console stand-ins for the renderer-side collaborators.

use tracing::info;

use shutterbug_core::types::{AudioClip, CapturedFrame};
use shutterbug_sim::host::{AudioSink, ScreenCapture};

/// "Plays" clips by logging them.
#[derive(Debug, Default)]
pub struct LogAudio {
    pub played: u32,
}

impl AudioSink for LogAudio {
    fn play_one_shot(&mut self, clip: &AudioClip) {
        self.played += 1;
        info!(clip = %clip.name, "play one-shot");
    }
}

/// Returns a blank frame of a fixed size, since nothing is rendered.
#[derive(Debug, Clone, Copy)]
pub struct BlankScreen {
    pub width: u32,
    pub height: u32,
}

impl Default for BlankScreen {
    fn default() -> Self {
        Self {
            width: 320,
            height: 180,
        }
    }
}

impl ScreenCapture for BlankScreen {
    fn capture_frame(&mut self) -> CapturedFrame {
        CapturedFrame::solid(self.width, self.height, [0, 0, 0])
    }
}
