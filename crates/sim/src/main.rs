//! Headless driver for the cleaning-robot controllers and the particle
//! swarm optimizer.
//!
//! ```bash
//! # Behavior tree for one simulated minute
//! cargo run -p roomba-sim -- run --controller tree --ticks 6000
//!
//! # Same policy as a state machine, reproducible
//! cargo run -p roomba-sim -- run --controller fsm --seed 7
//!
//! # PSO on the Rastrigin function
//! cargo run -p roomba-sim -- optimize --function rastrigin --dims 3
//! ```

mod commands;
mod logging;
mod world;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Optimize, Run};

/// Cleaning robot controllers and particle swarm optimizer
#[derive(Parser)]
#[command(name = "roomba-sim")]
#[command(about = "Headless driver for the cleaning robot controllers", long_about = None)]
#[command(version)]
struct Cli {
    /// Also write logs to <LOG_DIR>/roomba-sim.log
    #[arg(long, global = true, env = "ROOMBA_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Drive a controller against a simulated robot
    Run(Run),

    /// Minimize a benchmark function with PSO
    Optimize(Optimize),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for ROOMBA_* overrides and RUST_LOG)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _guard = logging::setup_logging(cli.log_dir.as_deref())?;

    match cli.command {
        Command::Run(cmd) => cmd.execute(),
        Command::Optimize(cmd) => cmd.execute(),
    }
}
