use anyhow::Result;
use lifegrid_core::{Metrics, Position, Universe};
use std::sync::Arc;

use crate::model::config::AppConfig;

#[derive(Debug)]
pub struct App {
    pub universe: Universe,
    pub config: AppConfig,
    pub metrics: Arc<Metrics>,
    pub generation: u64,
}

impl App {
    /// Builds the universe described by `config` and seeds it.
    ///
    /// The pattern, if any, is stamped centered on the origin; a randomize
    /// sweep, if enabled, runs first so the pattern is drawn on top.
    pub fn new(config: AppConfig) -> Result<Self> {
        let pattern = config.pattern()?;

        let (width, height) = (config.universe.width, config.universe.height);
        let mut universe = match config.universe.seed {
            Some(seed) => Universe::with_seed(width, height, seed),
            None => Universe::new(width, height),
        }
        .map_err(|err| {
            let context = format!(
                "universe.{} in config: cannot create a {width}x{height} universe",
                err.argument()
            );
            anyhow::Error::new(err).context(context)
        })?;

        let metrics = Arc::new(Metrics::new(config.run.log_every));
        let observer = Arc::clone(&metrics);
        universe.subscribe(move |event| observer.record_change(event));

        if config.run.randomize {
            universe.randomize();
        }
        if let Some(pattern) = pattern {
            let (w, h) = pattern.extent();
            universe.stamp(pattern, Position::new(-(w / 2), -(h / 2)));
        }

        tracing::info!(
            width,
            height,
            seed = ?config.universe.seed,
            pattern = pattern.map(|p| p.name),
            alive = universe.alive_cells(),
            "Universe seeded"
        );

        Ok(Self {
            universe,
            config,
            metrics,
            generation: 0,
        })
    }
}
