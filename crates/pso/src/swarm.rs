//! The swarm and its ask/tell protocol.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{PsoError, Result};
use crate::{Hyperparams, Particle};

/// Particle Swarm Optimization over a box-bounded search space.
///
/// The optimizer never calls the objective itself. The caller asks for a
/// position with [`position_to_evaluate`](Self::position_to_evaluate),
/// evaluates it however it likes (a simulation run, a physical trial, ...)
/// and reports the result with [`notify_evaluation`](Self::notify_evaluation).
/// Values are maximized. Once every particle of the current generation has
/// been evaluated, the swarm moves to the next generation.
pub struct ParticleSwarmOptimization {
    params: Hyperparams,
    lower: Vec<f64>,
    upper: Vec<f64>,
    particles: Vec<Particle>,
    rng: StdRng,
    /// Index of the next particle awaiting evaluation.
    cursor: usize,
    generation: u64,
    evaluations: u64,
}

impl ParticleSwarmOptimization {
    /// Creates a swarm seeded from entropy.
    pub fn new(params: Hyperparams, lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        Self::with_rng(params, lower, upper, StdRng::from_entropy())
    }

    /// Creates a swarm using `rng` for initialization and updates.
    pub fn with_rng(
        params: Hyperparams,
        lower: Vec<f64>,
        upper: Vec<f64>,
        mut rng: StdRng,
    ) -> Result<Self> {
        params.validate()?;
        validate_bounds(&lower, &upper)?;

        let particles = (0..params.num_particles)
            .map(|_| Particle::random(&lower, &upper, &mut rng))
            .collect();

        Ok(Self {
            params,
            lower,
            upper,
            particles,
            rng,
            cursor: 0,
            generation: 0,
            evaluations: 0,
        })
    }

    /// Position the caller should evaluate next.
    pub fn position_to_evaluate(&self) -> &[f64] {
        &self.particles[self.cursor].position
    }

    /// Reports the value of the position returned by
    /// [`position_to_evaluate`](Self::position_to_evaluate).
    pub fn notify_evaluation(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(PsoError::NonFiniteValue(value));
        }

        self.particles[self.cursor].record(value);
        self.evaluations += 1;
        self.cursor += 1;

        if self.cursor == self.particles.len() {
            self.advance_generation();
        }
        Ok(())
    }

    /// Drives the ask/tell loop with `objective` for `evaluations` steps.
    pub fn optimize<F>(&mut self, evaluations: usize, mut objective: F) -> Result<()>
    where
        F: FnMut(&[f64]) -> f64,
    {
        for _ in 0..evaluations {
            let value = objective(self.position_to_evaluate());
            self.notify_evaluation(value)?;
        }
        Ok(())
    }

    /// Best position found so far.
    pub fn best_position(&self) -> Option<&[f64]> {
        self.best_particle().and_then(Particle::best_position)
    }

    /// Value of the best position found so far; `-inf` before any evaluation.
    pub fn best_value(&self) -> f64 {
        self.best_particle()
            .map_or(f64::NEG_INFINITY, Particle::best_value)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn params(&self) -> &Hyperparams {
        &self.params
    }

    pub fn dimensions(&self) -> usize {
        self.lower.len()
    }

    /// Number of completed generations.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    fn best_particle(&self) -> Option<&Particle> {
        self.particles
            .iter()
            .filter(|p| p.best_position.is_some())
            .max_by(|a, b| a.best_value.total_cmp(&b.best_value))
    }

    fn advance_generation(&mut self) {
        let global_best = match self.best_position() {
            Some(best) => best.to_vec(),
            None => return,
        };
        let Hyperparams {
            inertia_weight: w,
            cognitive_parameter: phi_p,
            social_parameter: phi_g,
            ..
        } = self.params;

        for particle in &mut self.particles {
            let rp: f64 = self.rng.gen_range(0.0..=1.0);
            let rg: f64 = self.rng.gen_range(0.0..=1.0);
            let personal_best = particle
                .best_position
                .as_deref()
                .unwrap_or(particle.position.as_slice());

            let velocity: Vec<f64> = (0..particle.position.len())
                .map(|i| {
                    let x = particle.position[i];
                    w * particle.velocity[i]
                        + phi_p * rp * (personal_best[i] - x)
                        + phi_g * rg * (global_best[i] - x)
                })
                .collect();

            for (i, v) in velocity.into_iter().enumerate() {
                let (lower, upper) = (self.lower[i], self.upper[i]);
                let delta = upper - lower;
                particle.position[i] = (particle.position[i] + v).clamp(lower, upper);
                particle.velocity[i] = v.clamp(-delta, delta);
            }
            particle.value = None;
        }

        self.cursor = 0;
        self.generation += 1;
        debug!(
            generation = self.generation,
            best_value = self.best_value(),
            "swarm advanced"
        );
    }
}

fn validate_bounds(lower: &[f64], upper: &[f64]) -> Result<()> {
    if lower.len() != upper.len() {
        return Err(PsoError::DimensionMismatch {
            lower: lower.len(),
            upper: upper.len(),
        });
    }
    if lower.is_empty() {
        return Err(PsoError::EmptyBounds);
    }
    for (dimension, (&l, &u)) in lower.iter().zip(upper).enumerate() {
        if !l.is_finite() || !u.is_finite() {
            return Err(PsoError::NonFiniteBound { dimension });
        }
        if l > u {
            return Err(PsoError::InvertedBounds {
                dimension,
                lower: l,
                upper: u,
            });
        }
    }
    Ok(())
}
