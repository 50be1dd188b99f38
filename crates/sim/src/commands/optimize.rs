//! Run the particle swarm optimizer on a benchmark function.

use std::f64::consts::PI;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use console::style;
use pso::{Hyperparams, ParticleSwarmOptimization};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Benchmark functions, all with a global minimum of 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Benchmark {
    /// Sum of squares, minimum at the origin
    Sphere,
    /// Highly multimodal, minimum at the origin
    Rastrigin,
    /// Narrow curved valley, minimum at (1, ..., 1)
    Rosenbrock,
}

impl Benchmark {
    pub fn evaluate(self, x: &[f64]) -> f64 {
        match self {
            Benchmark::Sphere => x.iter().map(|v| v * v).sum(),
            Benchmark::Rastrigin => {
                10.0 * x.len() as f64
                    + x.iter()
                        .map(|v| v * v - 10.0 * (2.0 * PI * v).cos())
                        .sum::<f64>()
            }
            Benchmark::Rosenbrock => x
                .windows(2)
                .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
                .sum(),
        }
    }
}

/// Minimize a benchmark function with PSO
#[derive(Parser, Debug)]
pub struct Optimize {
    /// Function to minimize
    #[arg(short, long, value_enum, default_value_t = Benchmark::Sphere)]
    pub function: Benchmark,

    /// Number of dimensions
    #[arg(short, long, default_value_t = 2)]
    pub dims: usize,

    /// Total number of function evaluations
    #[arg(short, long, default_value_t = 4000)]
    pub evaluations: usize,

    /// Swarm size
    #[arg(long, default_value_t = Hyperparams::DEFAULT_NUM_PARTICLES)]
    pub particles: usize,

    /// Inertia weight
    #[arg(long, default_value_t = Hyperparams::DEFAULT_INERTIA_WEIGHT)]
    pub inertia: f64,

    /// Cognitive parameter
    #[arg(long, default_value_t = Hyperparams::DEFAULT_COGNITIVE_PARAMETER)]
    pub cognitive: f64,

    /// Social parameter
    #[arg(long, default_value_t = Hyperparams::DEFAULT_SOCIAL_PARAMETER)]
    pub social: f64,

    /// Search space is [-bound, bound] in every dimension
    #[arg(long, default_value_t = 5.0)]
    pub bound: f64,

    /// RNG seed (entropy otherwise)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Optimize {
    pub fn execute(self) -> Result<()> {
        let params = Hyperparams {
            num_particles: self.particles,
            inertia_weight: self.inertia,
            cognitive_parameter: self.cognitive,
            social_parameter: self.social,
        };
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut swarm = ParticleSwarmOptimization::with_rng(
            params,
            vec![-self.bound; self.dims],
            vec![self.bound; self.dims],
            rng,
        )
        .context("Failed to create swarm")?;

        tracing::info!(
            function = ?self.function,
            dims = self.dims,
            evaluations = self.evaluations,
            "Starting optimization"
        );

        // The swarm maximizes, so report the negated cost
        let function = self.function;
        swarm
            .optimize(self.evaluations, |x| -function.evaluate(x))
            .context("Optimization failed")?;

        let best = swarm
            .best_position()
            .context("No evaluation was performed")?;
        println!("{}", style(format!("{:?}", self.function)).bold());
        println!("  Generations : {}", swarm.generation());
        println!("  Evaluations : {}", swarm.evaluations());
        println!(
            "  Best cost   : {}",
            style(format!("{:.6e}", -swarm.best_value())).green()
        );
        println!("  Best point  : {best:.4?}");

        Ok(())
    }
}
