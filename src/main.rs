use anyhow::{Context, Result};
use clap::Parser;
use lifegrid_core::init_logging;
use lifegrid_lib::app::App;
use lifegrid_lib::model::config::AppConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "lifegrid.toml")]
    config: String,

    /// Initial box width (overrides config)
    #[arg(long)]
    width: Option<i32>,

    /// Initial box height (overrides config)
    #[arg(long)]
    height: Option<i32>,

    /// Seed for the randomize sweep (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of generations to run (overrides config)
    #[arg(short, long)]
    generations: Option<u64>,

    /// Built-in pattern stamped at the origin, e.g. glider, acorn
    #[arg(short, long)]
    pattern: Option<String>,

    /// Fill the initial box with random cells (overrides config)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    randomize: Option<bool>,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(width) = self.width {
            config.universe.width = width;
        }
        if let Some(height) = self.height {
            config.universe.height = height;
        }
        if self.seed.is_some() {
            config.universe.seed = self.seed;
        }
        if let Some(generations) = self.generations {
            config.run.generations = generations;
        }
        if self.pattern.is_some() {
            config.run.pattern = self.pattern.clone();
            // A named pattern on the command line runs on a clean board
            // unless randomize is asked for explicitly.
            config.run.randomize = false;
        }
        if let Some(randomize) = self.randomize {
            config.run.randomize = randomize;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let mut config = AppConfig::load(&args.config)
        .with_context(|| format!("loading config from {}", args.config))?;
    args.apply(&mut config);

    let mut app = App::new(config)?;
    let summary = app.run();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }

    Ok(())
}
