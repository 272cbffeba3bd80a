//! Capture controller: the photo state machine.
//!
//! One trigger runs one sequence:
//!
//! ```text
//! Idle -> Detecting -> FlashingIn -> CapturedVisible -> FlashFading
//!      -> PhotoHolding -> PhotoFading -> Idle
//! ```
//!
//! `Detecting` and `FlashingIn` complete inside the update that accepts the
//! trigger. `CapturedVisible` waits for the next frame boundary, when the
//! screen is grabbed. The remaining phases are advanced by `advance(dt)`,
//! one step per update. Triggers arriving while a sequence runs are dropped.

use hecs::{Entity, World};
use tracing::{debug, info, trace};

use shutterbug_core::components::{PendingDespawn, Target};
use shutterbug_core::enums::{CapturePhase, Category, IgnoreReason};
use shutterbug_core::events::CaptureEvent;
use shutterbug_core::state::PresentationView;
use shutterbug_core::types::CapturedFrame;

use crate::config::CaptureConfig;
use crate::detection::{resolve_target, CastRequest, DetectionQuery};
use crate::host::{AudioSink, ScreenCapture};
use crate::score::ScoreLedger;

/// Tolerance for timer comparisons against accumulated `dt`.
const TIMER_EPSILON: f64 = 1e-9;

/// Result of the detection step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetectionOutcome {
    /// First capture of this target; points were added.
    Scored {
        target: Entity,
        category: Category,
        points: u64,
    },
    /// The hit target was already captured.
    AlreadyCaptured { target: Entity, category: Category },
    /// Nothing scoreable in the cast.
    Miss,
}

/// Per-trigger inputs borrowed from the engine.
pub struct TriggerContext<'a> {
    pub world: &'a mut World,
    pub detection: &'a dyn DetectionQuery,
    pub audio: Option<&'a mut (dyn AudioSink + 'static)>,
    pub request: CastRequest,
    pub score: &'a mut ScoreLedger,
    pub config: &'a CaptureConfig,
    pub events: &'a mut Vec<CaptureEvent>,
}

/// The camera tool and its photo presentation.
#[derive(Debug, Clone, Default)]
pub struct CaptureController {
    phase: CapturePhase,
    /// Target scored by the running sequence, if any.
    scored_target: Option<Entity>,
    /// Time spent in the current timed phase.
    elapsed: f64,
    tool_deployed: bool,
    flash_alpha: f64,
    photo_alpha: f64,
    photo_visible: bool,
    photo: Option<CapturedFrame>,
}

impl CaptureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    /// Whether a presentation sequence is running.
    pub fn is_busy(&self) -> bool {
        self.phase != CapturePhase::Idle
    }

    pub fn tool_deployed(&self) -> bool {
        self.tool_deployed
    }

    /// The tool is drawn when deployed, except while hidden for the photo.
    pub fn tool_visible(&self) -> bool {
        self.tool_deployed && !self.phase.hides_tool()
    }

    pub fn flash_alpha(&self) -> f64 {
        self.flash_alpha
    }

    pub fn photo_alpha(&self) -> f64 {
        self.photo_alpha
    }

    pub fn photo(&self) -> Option<&CapturedFrame> {
        self.photo.as_ref()
    }

    pub fn scored_target(&self) -> Option<Entity> {
        self.scored_target
    }

    /// Deploy or stow the camera tool. Does not interrupt a running sequence.
    pub fn toggle_tool(&mut self) {
        self.tool_deployed = !self.tool_deployed;
        debug!(deployed = self.tool_deployed, "camera tool toggled");
    }

    /// Drop any running sequence and return to the start-up state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Handle a capture input edge.
    ///
    /// Returns `true` if a sequence started. On acceptance this runs the
    /// detection and flash steps immediately and leaves the controller
    /// waiting for the frame boundary.
    pub fn trigger(&mut self, ctx: TriggerContext<'_>) -> bool {
        if let Some(reason) = self.gate() {
            trace!(?reason, "capture trigger ignored");
            ctx.events.push(CaptureEvent::TriggerIgnored { reason });
            return false;
        }

        self.phase = CapturePhase::Detecting;
        let outcome = detect(ctx.world, ctx.detection, &ctx.request, ctx.score);
        ctx.score.photos_taken += 1;
        ctx.events.push(CaptureEvent::ShutterReleased);
        match outcome {
            DetectionOutcome::Scored {
                target,
                category,
                points,
            } => {
                self.scored_target = Some(target);
                ctx.events.push(CaptureEvent::TargetCaptured {
                    category,
                    points,
                    total: ctx.score.total_points(),
                });
            }
            DetectionOutcome::AlreadyCaptured { category, .. } => {
                ctx.events.push(CaptureEvent::AlreadyCaptured { category });
            }
            DetectionOutcome::Miss => {
                ctx.events.push(CaptureEvent::EmptyShot);
            }
        }

        self.phase = CapturePhase::FlashingIn;
        if let (Some(audio), Some(clip)) = (ctx.audio, ctx.config.shutter_clip.as_ref()) {
            audio.play_one_shot(clip);
        }
        self.flash_alpha = 1.0;

        self.phase = CapturePhase::CapturedVisible;
        self.elapsed = 0.0;
        true
    }

    /// Frame-boundary work: grab the screen if a capture is pending.
    ///
    /// Call at the start of an update, after the host rendered the previous
    /// snapshot (flash on, tool hidden). The scored target's removal delay
    /// starts only once the photo exists, so it is always in the frame.
    pub fn on_frame_boundary(
        &mut self,
        world: &mut World,
        screen: Option<&mut (dyn ScreenCapture + 'static)>,
        config: &CaptureConfig,
        events: &mut Vec<CaptureEvent>,
    ) {
        if self.phase != CapturePhase::CapturedVisible {
            return;
        }
        self.photo = screen.map(|s| s.capture_frame());
        if let Some(target) = self.scored_target {
            // Already gone (floor contact) is fine; there is nothing to remove.
            let _ = world.insert_one(
                target,
                PendingDespawn {
                    remaining_secs: config.despawn_delay_secs,
                },
            );
        }
        self.photo_alpha = 1.0;
        self.photo_visible = true;
        self.phase = CapturePhase::FlashFading;
        self.elapsed = 0.0;
        events.push(CaptureEvent::PhotoTaken);
    }

    /// Advance the timed phases by one step.
    pub fn advance(&mut self, dt: f64, config: &CaptureConfig, events: &mut Vec<CaptureEvent>) {
        match self.phase {
            CapturePhase::FlashFading => {
                self.flash_alpha = fade_toward_zero(self.flash_alpha, config.flash_fade_rate, dt);
                if self.flash_alpha <= 0.0 {
                    self.phase = CapturePhase::PhotoHolding;
                    self.elapsed = 0.0;
                }
            }
            CapturePhase::PhotoHolding => {
                self.elapsed += dt;
                if self.elapsed + TIMER_EPSILON >= config.photo_visible_secs {
                    self.phase = CapturePhase::PhotoFading;
                    self.elapsed = 0.0;
                }
            }
            CapturePhase::PhotoFading => {
                self.photo_alpha = fade_toward_zero(self.photo_alpha, config.photo_fade_rate, dt);
                if self.photo_alpha <= 0.0 {
                    self.photo_visible = false;
                    self.phase = CapturePhase::Idle;
                    self.scored_target = None;
                    self.elapsed = 0.0;
                    events.push(CaptureEvent::SequenceFinished);
                }
            }
            CapturePhase::Idle
            | CapturePhase::Detecting
            | CapturePhase::FlashingIn
            | CapturePhase::CapturedVisible => {}
        }
    }

    pub fn view(&self) -> PresentationView {
        PresentationView {
            capture_phase: self.phase,
            flash_alpha: self.flash_alpha,
            photo_alpha: self.photo_alpha,
            photo_visible: self.photo_visible,
            photo_size: self.photo.as_ref().map(|f| (f.width, f.height)),
            tool_deployed: self.tool_deployed,
            tool_visible: self.tool_visible(),
        }
    }

    fn gate(&self) -> Option<IgnoreReason> {
        if self.is_busy() {
            Some(IgnoreReason::SequenceActive)
        } else if !self.tool_deployed {
            Some(IgnoreReason::ToolStowed)
        } else {
            None
        }
    }
}

/// Run one detection cast and apply the at-most-once scoring rule.
///
/// A hit target whose `captured` flag is clear is flagged and scored.
/// Anything else leaves the world and score untouched. Removal is scheduled
/// later, by the controller, once the photo has been taken.
pub fn detect(
    world: &mut World,
    detection: &dyn DetectionQuery,
    request: &CastRequest,
    score: &mut ScoreLedger,
) -> DetectionOutcome {
    let Some(hit) = detection.cast(world, request) else {
        return DetectionOutcome::Miss;
    };
    let Some(target) = resolve_target(world, hit.entity) else {
        return DetectionOutcome::Miss;
    };

    let (category, points) = {
        let Ok(mut t) = world.get::<&mut Target>(target) else {
            return DetectionOutcome::Miss;
        };
        if t.captured {
            return DetectionOutcome::AlreadyCaptured {
                target,
                category: t.category,
            };
        }
        t.captured = true;
        (t.category, t.points())
    };

    score.add_points(points);
    score.targets_captured += 1;
    info!(
        ?category,
        points,
        total = score.total_points(),
        distance = hit.distance,
        "target captured"
    );
    DetectionOutcome::Scored {
        target,
        category,
        points,
    }
}

/// Linear fade clamped at exactly zero.
pub fn fade_toward_zero(alpha: f64, rate: f64, dt: f64) -> f64 {
    (alpha - rate * dt).max(0.0)
}
