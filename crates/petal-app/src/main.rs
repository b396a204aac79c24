//! petal-vortex: headless runner for the petal vortex simulation.
//!
//! # Usage
//!
//! ```bash
//! # Run 600 ticks with two actions, printing every 60th snapshot
//! petal-vortex run --ticks 600 --emit-every 60 --action uplift@0,0,0:0.8 --action heal@1,0,1
//!
//! # Print the default animation config
//! petal-vortex config
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use petal_app::action_spec::ActionSpec;
use petal_app::game_loop::{self, LoopOptions};
use petal_core::config::AnimationConfig;
use petal_sim::engine::{PetalEngine, SimConfig};

/// Petal vortex simulation runner
#[derive(Parser, Debug)]
#[command(name = "petal-vortex")]
#[command(version, about = "Headless petal vortex simulation", long_about = None)]
struct Cli {
    /// Logging verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the simulation and print JSON snapshots to stdout
    Run {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "600")]
        ticks: u64,

        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Animation config JSON file (missing fields use defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Action submitted before the first tick: TYPE@X,Y,Z[:INTENSITY]
        #[arg(short, long = "action")]
        actions: Vec<ActionSpec>,

        /// Print a snapshot every N ticks (0 = final snapshot only)
        #[arg(short, long, default_value = "0")]
        emit_every: u64,

        /// Evict the oldest petals beyond this count
        #[arg(long)]
        max_petals: Option<usize>,

        /// Pace ticks in wall-clock time
        #[arg(long)]
        realtime: bool,

        /// Start without the two initial petals
        #[arg(long)]
        no_initial_petals: bool,
    },

    /// Print the default animation config as JSON
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Snapshots go to stdout, logs to stderr.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run {
            ticks,
            seed,
            config,
            actions,
            emit_every,
            max_petals,
            realtime,
            no_initial_petals,
        } => {
            let animation = match config {
                Some(path) => AnimationConfig::load(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => AnimationConfig::default(),
            };
            info!(seed, ?animation, "petal vortex v{}", env!("CARGO_PKG_VERSION"));

            let mut engine = PetalEngine::new(SimConfig {
                seed,
                animation,
                max_petals,
                seed_initial_petals: !no_initial_petals,
                ..Default::default()
            });
            engine.queue_commands(actions.into_iter().map(ActionSpec::into_command));

            let options = LoopOptions {
                ticks,
                emit_every,
                realtime,
            };
            game_loop::run(&mut engine, options, &mut io::stdout().lock())?;
        }
        Commands::Config => {
            let json = serde_json::to_string_pretty(&AnimationConfig::default())?;
            println!("{json}");
        }
    }

    Ok(())
}
