//! Score ledger: cumulative points from first-time captures.

/// Running score tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreLedger {
    total_points: u64,
    pub photos_taken: u32,
    pub targets_captured: u32,
}

impl ScoreLedger {
    /// Add points. The total never decreases.
    pub fn add_points(&mut self, points: u64) {
        self.total_points = self.total_points.saturating_add(points);
    }

    pub fn total_points(&self) -> u64 {
        self.total_points
    }

    /// Score label text.
    pub fn format(&self) -> String {
        format!("Points: {}", self.total_points)
    }
}
