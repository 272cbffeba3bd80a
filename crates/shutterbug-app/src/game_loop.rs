//! Game loop thread: runs the simulation engine at 30Hz and emits snapshots.
//!
//! The engine is created inside this thread because its collaborators are not
//! `Send`. Commands arrive via `mpsc` channel. Every snapshot goes to the
//! emitter callback and into the shared slot for polling.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use shutterbug_core::constants::TICK_RATE;
use shutterbug_core::state::GameStateSnapshot;
use shutterbug_sim::{Collaborators, SimConfig, SimulationEngine};

use crate::host::{BlankScreen, LogAudio};
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle. The loop stops on
/// `Shutdown` or when every sender is dropped. The config is validated here,
/// before the thread starts.
pub fn spawn_game_loop<F>(
    config: SimConfig,
    latest_snapshot: SharedSnapshot,
    emit: F,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)>
where
    F: FnMut(&GameStateSnapshot) + Send + 'static,
{
    config.validate().context("invalid simulation config")?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("shutterbug-game-loop".into())
        .spawn(move || {
            let collaborators = Collaborators::default()
                .with_screen(BlankScreen::default())
                .with_audio(LogAudio::default());
            match SimulationEngine::new(config, collaborators) {
                Ok(engine) => run_game_loop(engine, cmd_rx, &latest_snapshot, emit),
                Err(err) => error!(%err, "engine rejected config"),
            }
        })
        .context("spawning game loop thread")?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
    mut emit: impl FnMut(&GameStateSnapshot),
) {
    let mut next_tick_time = Instant::now();
    info!("game loop started");

    loop {
        // 1. Drain all pending commands
        if drain_commands(&mut engine, &cmd_rx).is_break() {
            info!(
                tick = engine.time().tick,
                points = engine.score().total_points(),
                "game loop stopped"
            );
            return;
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Hand the snapshot to the host
        emit(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        latest_snapshot.store(snapshot);

        // 5. Sleep until next tick, adjusting for time_scale
        let effective_tick_duration = scaled_tick_duration(engine.time_scale());
        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            debug!("game loop fell behind; resetting tick clock");
            next_tick_time = now;
        }
    }
}

/// Queue every pending command. Breaks on shutdown or disconnect.
fn drain_commands(
    engine: &mut SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
) -> std::ops::ControlFlow<()> {
    use std::ops::ControlFlow;
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return ControlFlow::Break(()),
            Err(mpsc::TryRecvError::Empty) => return ControlFlow::Continue(()),
            Err(mpsc::TryRecvError::Disconnected) => return ControlFlow::Break(()),
        }
    }
}

/// Wall-clock length of one tick at the given time scale.
fn scaled_tick_duration(time_scale: f64) -> Duration {
    if time_scale > 0.001 {
        TICK_DURATION.div_f64(time_scale)
    } else {
        TICK_DURATION
    }
}
