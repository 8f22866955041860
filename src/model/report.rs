use lifegrid_core::Bounds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a headless run stopped.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// A generation produced no change.
    Stable,
    /// No live cells remain.
    Extinct,
    /// The configured number of generations ran.
    GenerationLimit,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub generations: u64,
    pub stop_reason: StopReason,
    pub alive_cells: usize,
    pub bounds: Bounds,
    pub width: u64,
    pub height: u64,
    pub notifications: u64,
    pub elapsed_ms: u64,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StopReason::Stable => "stable",
            StopReason::Extinct => "extinct",
            StopReason::GenerationLimit => "generation limit",
        };
        f.write_str(text)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} after {} generations: {} alive in {}x{} box ({}, {})..({}, {}), {} notifications, {} ms",
            self.stop_reason,
            self.generations,
            self.alive_cells,
            self.width,
            self.height,
            self.bounds.min_x,
            self.bounds.min_y,
            self.bounds.max_x,
            self.bounds.max_y,
            self.notifications,
            self.elapsed_ms
        )
    }
}
