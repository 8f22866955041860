//! Run metrics for the simulation.
//!
//! Provides structured logging and counters for monitoring a running
//! universe.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

use crate::events::CellsChanged;

/// Counters for a single run.
#[derive(Debug)]
pub struct Metrics {
    generations: AtomicU64,
    alive_cells: AtomicU64,
    notifications: AtomicU64,
    log_every: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Metrics {
    /// Creates a collector that logs progress every `log_every` generations
    /// (`0` disables progress lines).
    #[must_use]
    pub fn new(log_every: u64) -> Self {
        Self {
            generations: AtomicU64::new(0),
            alive_cells: AtomicU64::new(0),
            notifications: AtomicU64::new(0),
            log_every,
            start_time: Instant::now(),
        }
    }

    /// Records a completed generation with its duration.
    pub fn record_tick(&self, duration: Duration, alive: usize, changed: bool) {
        let generation = self.generations.fetch_add(1, Ordering::Relaxed) + 1;
        self.alive_cells.store(alive as u64, Ordering::Relaxed);

        if self.log_every > 0 && generation % self.log_every == 0 {
            tracing::info!(
                generation,
                alive,
                changed,
                duration_us = duration.as_micros() as u64,
                "Generation"
            );
        }
    }

    /// Counts a change notification delivered by a universe.
    pub fn record_change(&self, event: &CellsChanged) {
        self.notifications.fetch_add(1, Ordering::Relaxed);
        self.alive_cells.store(event.alive_cells as u64, Ordering::Relaxed);
        tracing::trace!(cause = ?event.cause, alive = event.alive_cells, "Cells changed");
    }

    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn alive_cells(&self) -> u64 {
        self.alive_cells.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn notifications(&self) -> u64 {
        self.notifications.load(Ordering::Relaxed)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`, falling back to `info`. Safe to call more than once.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
