use std::time::Instant;

use super::App;
use crate::model::report::{RunSummary, StopReason};

impl App {
    /// Advances one generation and records it. Returns whether anything
    /// changed.
    pub fn step(&mut self) -> bool {
        let started = Instant::now();
        let changed = self.universe.tick();
        self.generation += 1;
        self.metrics
            .record_tick(started.elapsed(), self.universe.alive_cells(), changed);
        changed
    }

    /// Runs until the universe is stable, extinct, or the generation limit
    /// from the config is reached.
    pub fn run(&mut self) -> RunSummary {
        let limit = self.config.run.generations;

        let stop_reason = loop {
            if self.universe.is_empty() {
                break StopReason::Extinct;
            }
            if self.generation >= limit {
                break StopReason::GenerationLimit;
            }
            if !self.step() {
                break StopReason::Stable;
            }
        };

        tracing::info!(
            generation = self.generation,
            reason = %stop_reason,
            alive = self.universe.alive_cells(),
            "Run finished"
        );
        self.summary(stop_reason)
    }

    pub fn summary(&self, stop_reason: StopReason) -> RunSummary {
        RunSummary {
            generations: self.generation,
            stop_reason,
            alive_cells: self.universe.alive_cells(),
            bounds: self.universe.bounds(),
            width: self.universe.width(),
            height: self.universe.height(),
            notifications: self.metrics.notifications(),
            elapsed_ms: self.metrics.elapsed().as_millis() as u64,
        }
    }
}
