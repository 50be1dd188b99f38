use crate::error::{PsoError, Result};

/// Hyperparameters of the swarm.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Hyperparams {
    pub num_particles: usize,
    /// Weight of the previous velocity (w).
    pub inertia_weight: f64,
    /// Pull towards the particle's own best position (φp).
    pub cognitive_parameter: f64,
    /// Pull towards the swarm's best position (φg).
    pub social_parameter: f64,
}

impl Hyperparams {
    pub const DEFAULT_NUM_PARTICLES: usize = 40;
    pub const DEFAULT_INERTIA_WEIGHT: f64 = 0.7;
    pub const DEFAULT_COGNITIVE_PARAMETER: f64 = 1.5;
    pub const DEFAULT_SOCIAL_PARAMETER: f64 = 1.5;

    pub const fn new() -> Self {
        Self {
            num_particles: Self::DEFAULT_NUM_PARTICLES,
            inertia_weight: Self::DEFAULT_INERTIA_WEIGHT,
            cognitive_parameter: Self::DEFAULT_COGNITIVE_PARAMETER,
            social_parameter: Self::DEFAULT_SOCIAL_PARAMETER,
        }
    }

    pub fn with_num_particles(mut self, num_particles: usize) -> Self {
        self.num_particles = num_particles;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_particles == 0 {
            return Err(PsoError::NoParticles);
        }
        for (name, value) in [
            ("inertia_weight", self.inertia_weight),
            ("cognitive_parameter", self.cognitive_parameter),
            ("social_parameter", self.social_parameter),
        ] {
            if !value.is_finite() {
                return Err(PsoError::NonFiniteHyperparameter { name });
            }
        }
        Ok(())
    }
}

impl Default for Hyperparams {
    fn default() -> Self {
        Self::new()
    }
}
