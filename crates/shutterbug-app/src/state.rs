//! State shared between the input reader and the game loop thread.

use std::sync::{Arc, Mutex};

use shutterbug_core::commands::PlayerCommand;
use shutterbug_core::state::GameStateSnapshot;

/// Commands sent from the input side to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, updated by the game loop after each tick.
#[derive(Debug, Clone, Default)]
pub struct SharedSnapshot(Arc<Mutex<Option<GameStateSnapshot>>>);

impl SharedSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, snapshot: GameStateSnapshot) {
        if let Ok(mut lock) = self.0.lock() {
            *lock = Some(snapshot);
        }
    }

    /// Clone of the most recent snapshot, if a tick has run.
    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.0.lock().ok().and_then(|lock| lock.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared = SharedSnapshot::new();
        assert!(shared.latest().is_none());
    }

    #[test]
    fn test_shared_snapshot_visible_across_clones() {
        let shared = SharedSnapshot::new();
        let writer = shared.clone();
        let mut engine = shutterbug_sim::SimulationEngine::headless(Default::default()).unwrap();
        writer.store(engine.tick());
        assert_eq!(shared.latest().map(|s| s.time.tick), Some(0));
    }
}
