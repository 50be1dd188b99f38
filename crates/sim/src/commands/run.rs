//! Drive a cleaning controller against the kinematic robot.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use roomba::{ConfigLoader, ControllerKind, RoombaConfig};

use crate::world::KinematicAgent;

/// Run a controller for a number of ticks
#[derive(Parser, Debug)]
pub struct Run {
    /// Controller implementation: `tree` or `fsm`
    #[arg(short, long, default_value = "tree")]
    pub controller: ControllerKind,

    /// Number of controller ticks to simulate
    #[arg(short, long, default_value_t = 6000)]
    pub ticks: u64,

    /// TOML file with controller parameters (defaults otherwise)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for the rotation sampler (overrides config and ROOMBA_SEED)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Room width in metres
    #[arg(long, default_value_t = 4.0)]
    pub width: f64,

    /// Room height in metres
    #[arg(long, default_value_t = 4.0)]
    pub height: f64,

    /// Robot body radius in metres
    #[arg(long, default_value_t = 0.17)]
    pub radius: f64,

    /// Log controller activity every N ticks (0 disables)
    #[arg(long, default_value_t = 500)]
    pub report_every: u64,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        let config = self.load_config()?;
        if self.width <= 2.0 * self.radius || self.height <= 2.0 * self.radius {
            anyhow::bail!("Room {}x{} is too small for the robot", self.width, self.height);
        }

        tracing::info!(controller = %self.controller, ticks = self.ticks, "Starting run");
        tracing::debug!(?config, "Controller configuration");

        let mut controller = self
            .controller
            .build::<KinematicAgent>(config)
            .context("Failed to build controller")?;
        let mut agent = KinematicAgent::new(self.width, self.height, self.radius);

        for tick in 1..=self.ticks {
            controller.update(&mut agent);
            agent.step(config.sample_time);

            if self.report_every > 0 && tick % self.report_every == 0 {
                let (x, y, _) = agent.pose();
                tracing::info!(
                    tick,
                    activity = %controller.describe(),
                    x,
                    y,
                    "progress"
                );
            }
        }

        let (x, y, heading) = agent.pose();
        println!("{}", style(format!("Controller: {}", self.controller)).bold());
        println!(
            "  Simulated time : {:.2} s",
            self.ticks as f64 * config.sample_time
        );
        println!("  Distance       : {:.2} m", agent.distance());
        println!("  Collisions     : {}", style(agent.collisions()).yellow());
        println!("  Final pose     : ({x:.2}, {y:.2}, {heading:.2} rad)");
        println!("  Activity       : {}", style(controller.describe()).cyan());

        Ok(())
    }

    fn load_config(&self) -> Result<RoombaConfig> {
        let config = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => RoombaConfig::default(),
        };
        let mut config = config.apply_env();
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config
            .validate()
            .context("Invalid controller configuration after environment overrides")?;
        Ok(config)
    }
}
