//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (rendering, audio and screen capture are injected collaborators), enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use shutterbug_core::commands::PlayerCommand;
use shutterbug_core::constants::DT;
use shutterbug_core::enums::GamePhase;
use shutterbug_core::events::CaptureEvent;
use shutterbug_core::state::GameStateSnapshot;
use shutterbug_core::types::SimTime;

use crate::capture::{CaptureController, TriggerContext};
use crate::config::{ConfigError, SimConfig};
use crate::detection::{CastRequest, DetectionShape};
use crate::host::Collaborators;
use crate::score::ScoreLedger;
use crate::systems;
use crate::systems::snapshot::SnapshotInputs;
use crate::systems::spawner::SpawnTimer;
use crate::viewpoint::Viewpoint;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    config: SimConfig,
    collaborators: Collaborators,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<CaptureEvent>,

    spawn_timer: SpawnTimer,
    controller: CaptureController,
    viewpoint: Viewpoint,
    score: ScoreLedger,
}

impl SimulationEngine {
    /// Create a new engine with the given config and host collaborators.
    ///
    /// The config is validated first; a zero spawn interval or fade rate
    /// would stall the spawner or the capture sequence.
    pub fn new(config: SimConfig, collaborators: Collaborators) -> Result<Self, ConfigError> {
        config.validate()?;
        if collaborators.screen.is_none() {
            warn!("no screen capture collaborator; photos will be blank");
        }
        if collaborators.audio.is_none() {
            warn!("no audio collaborator; shutter will be silent");
        }
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            spawn_timer: SpawnTimer::new(&config.spawner),
            controller: CaptureController::new(),
            viewpoint: Viewpoint::new(&config.viewpoint),
            score: ScoreLedger::default(),
            collaborators,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        })
    }

    /// Engine with the built-in world caster and no screen or audio.
    pub fn headless(config: SimConfig) -> Result<Self, ConfigError> {
        Self::new(config, Collaborators::default())
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one nominal tick.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.update(DT)
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    pub fn update(&mut self, dt: f64) -> GameStateSnapshot {
        // The previous snapshot has been rendered: this is the frame boundary.
        if self.phase == GamePhase::Active {
            self.controller.on_frame_boundary(
                &mut self.world,
                self.collaborators.screen.as_deref_mut(),
                &self.config.capture,
                &mut self.events,
            );
        }

        self.process_commands(dt);

        if self.phase == GamePhase::Active {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotInputs {
                time: &self.time,
                phase: self.phase,
                viewpoint: &self.viewpoint,
                viewpoint_config: &self.config.viewpoint,
                controller: &self.controller,
                score: &self.score,
            },
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn controller(&self) -> &CaptureController {
        &self.controller
    }

    pub fn score(&self) -> &ScoreLedger {
        &self.score
    }

    pub fn viewpoint(&self) -> &Viewpoint {
        &self.viewpoint
    }

    /// Mutable world access for tests that place targets by hand.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mutable viewpoint access for tests that aim directly.
    #[cfg(test)]
    pub fn viewpoint_mut(&mut self) -> &mut Viewpoint {
        &mut self.viewpoint
    }

    /// The cast the camera would make right now.
    pub fn cast_request(&self) -> CastRequest {
        CastRequest {
            origin: self.viewpoint.eye(),
            direction: self.viewpoint.forward(),
            shape: DetectionShape::from_radius(self.config.capture.detection_radius),
            max_range: self.config.capture.max_range,
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self, dt: f64) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, dt);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand, dt: f64) {
        match command {
            PlayerCommand::StartSession => self.start_session(),
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            // Gameplay input only counts while the session runs.
            _ if self.phase != GamePhase::Active => {
                debug!(?command, phase = ?self.phase, "input ignored outside active session");
            }
            PlayerCommand::ToggleCameraTool => self.controller.toggle_tool(),
            PlayerCommand::Capture => {
                let request = self.cast_request();
                self.controller.trigger(TriggerContext {
                    world: &mut self.world,
                    detection: &*self.collaborators.detection,
                    audio: self.collaborators.audio.as_deref_mut(),
                    request,
                    score: &mut self.score,
                    config: &self.config.capture,
                    events: &mut self.events,
                });
            }
            PlayerCommand::Look {
                yaw_delta,
                pitch_delta,
            } => {
                self.viewpoint
                    .look(yaw_delta, pitch_delta, dt, &self.config.viewpoint);
            }
            PlayerCommand::ToggleCrouch => self.viewpoint.toggle_crouch(),
            PlayerCommand::SetZoom { engaged } => self.viewpoint.set_zoom(engaged),
        }
    }

    /// Reset the scene, score and controller. Drops any running sequence.
    fn start_session(&mut self) {
        world_setup::reset_scene(&mut self.world);
        self.time = SimTime::default();
        self.spawn_timer = SpawnTimer::new(&self.config.spawner);
        self.controller.reset();
        self.viewpoint = Viewpoint::new(&self.config.viewpoint);
        self.score = ScoreLedger::default();
        self.events.clear();
        self.phase = GamePhase::Active;
        info!(seed = self.config.seed, "session started");
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Viewpoint kinematics
        self.viewpoint.update(dt, &self.config.viewpoint);
        // 2. Spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_timer,
            &self.config.spawner,
            dt,
        );
        // 3. Capture sequence timers
        self.controller
            .advance(dt, &self.config.capture, &mut self.events);
        // 4. Movement integration
        systems::movement::run(&mut self.world, dt);
        systems::movement::sync_parts(&mut self.world);
        // 5. Cleanup (floor, delayed removal, orphaned parts)
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            self.config.spawner.floor_height,
            dt,
        );
    }
}
