//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use shutterbug_core::components::{PendingDespawn, Target};
use shutterbug_core::enums::GamePhase;
use shutterbug_core::events::CaptureEvent;
use shutterbug_core::state::*;
use shutterbug_core::types::{Position, SimTime};

use crate::capture::CaptureController;
use crate::config::ViewpointConfig;
use crate::score::ScoreLedger;
use crate::viewpoint::Viewpoint;

/// Everything outside the world that a snapshot reads.
pub struct SnapshotInputs<'a> {
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub viewpoint: &'a Viewpoint,
    pub viewpoint_config: &'a ViewpointConfig,
    pub controller: &'a CaptureController,
    pub score: &'a ScoreLedger,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    inputs: SnapshotInputs<'_>,
    events: Vec<CaptureEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *inputs.time,
        phase: inputs.phase,
        targets: build_targets(world),
        viewpoint: inputs.viewpoint.view(inputs.viewpoint_config),
        presentation: inputs.controller.view(),
        score: ScoreView {
            total_points: inputs.score.total_points(),
            label: inputs.score.format(),
            photos_taken: inputs.score.photos_taken,
            targets_captured: inputs.score.targets_captured,
        },
        events,
    }
}

/// Build TargetView list, sorted by id for stable output.
fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&Target, &Position, Option<&PendingDespawn>)>()
        .iter()
        .map(|(entity, (target, pos, pending))| TargetView {
            id: entity.to_bits().get(),
            category: target.category,
            position: *pos,
            captured: target.captured,
            despawning: pending.is_some(),
        })
        .collect();
    targets.sort_by_key(|t| t.id);
    targets
}
