//! Target spawner: emits one target per interval after a warm-up delay.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use shutterbug_core::enums::Category;
use shutterbug_core::constants::MAX_LATERAL_DRIFT;
use shutterbug_core::types::{Position, Velocity};

use crate::config::SpawnerConfig;

/// Tolerance so a spawn due exactly on a tick boundary is not pushed one tick late.
const TIMER_EPSILON: f64 = 1e-9;

/// Countdown to the next spawn.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    next_spawn_in: f64,
}

impl SpawnTimer {
    /// First spawn fires after the configured warm-up.
    pub fn new(config: &SpawnerConfig) -> Self {
        Self {
            next_spawn_in: config.warmup_secs,
        }
    }

    /// Advance by `dt` and return how many spawns fell due.
    pub fn advance(&mut self, dt: f64, spawn_rate: f64) -> u32 {
        self.next_spawn_in -= dt;
        let mut due = 0;
        while self.next_spawn_in <= TIMER_EPSILON {
            self.next_spawn_in += spawn_rate;
            due += 1;
        }
        due
    }

    pub fn next_spawn_in(&self) -> f64 {
        self.next_spawn_in
    }
}

/// Spawn any targets that fell due this update. Returns how many were spawned.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timer: &mut SpawnTimer,
    config: &SpawnerConfig,
    dt: f64,
) -> u32 {
    let due = timer.advance(dt, config.spawn_rate_secs);
    for _ in 0..due {
        let category = sample_category(rng);
        let position = sample_position(rng, config);
        let velocity = sample_velocity(rng, category);
        let entity = crate::world_setup::spawn_target(world, category, position, velocity);
        debug!(?category, ?entity, x = position.x, z = position.z, "target spawned");
    }
    due
}

/// Weighted category draw: about 70% Common, 20% Fast, 10% Rare.
pub fn sample_category(rng: &mut ChaCha8Rng) -> Category {
    Category::from_roll(rng.gen::<f64>())
}

/// Anchor plus a horizontal offset in `[-width, width)` and a whole-unit
/// depth offset in `[-depth, depth)`.
pub fn sample_position(rng: &mut ChaCha8Rng, config: &SpawnerConfig) -> Position {
    let dx = if config.spawn_width > 0.0 {
        rng.gen_range(-config.spawn_width..config.spawn_width)
    } else {
        0.0
    };
    let dz = if config.spawn_depth > 0 {
        rng.gen_range(-config.spawn_depth..config.spawn_depth)
    } else {
        0
    };
    config.anchor.offset(dx, 0.0, f64::from(dz))
}

/// Descend at the category's speed with a small random lateral drift.
fn sample_velocity(rng: &mut ChaCha8Rng, category: Category) -> Velocity {
    let drift = rng.gen_range(-MAX_LATERAL_DRIFT..MAX_LATERAL_DRIFT);
    Velocity::new(drift, -category.speed(), 0.0)
}
