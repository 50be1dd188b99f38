use rand::Rng;

/// A candidate solution moving through the search space.
#[derive(Clone, Debug)]
pub struct Particle {
    pub(crate) position: Vec<f64>,
    pub(crate) velocity: Vec<f64>,
    pub(crate) value: Option<f64>,
    pub(crate) best_position: Option<Vec<f64>>,
    pub(crate) best_value: f64,
}

impl Particle {
    /// Samples a position uniformly inside the bounds and a velocity
    /// uniformly inside `±(upper - lower)`.
    pub(crate) fn random<R: Rng + ?Sized>(lower: &[f64], upper: &[f64], rng: &mut R) -> Self {
        let position = lower
            .iter()
            .zip(upper)
            .map(|(&l, &u)| rng.gen_range(l..=u))
            .collect();
        let velocity = lower
            .iter()
            .zip(upper)
            .map(|(&l, &u)| {
                let delta = u - l;
                rng.gen_range(-delta..=delta)
            })
            .collect();

        Self {
            position,
            velocity,
            value: None,
            best_position: None,
            best_value: f64::NEG_INFINITY,
        }
    }

    pub fn position(&self) -> &[f64] {
        &self.position
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// Value of the current position, once evaluated in this generation.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Best position this particle has visited.
    pub fn best_position(&self) -> Option<&[f64]> {
        self.best_position.as_deref()
    }

    /// Value of [`best_position`](Self::best_position); `-inf` before any evaluation.
    pub fn best_value(&self) -> f64 {
        self.best_value
    }

    pub(crate) fn record(&mut self, value: f64) {
        self.value = Some(value);
        if value > self.best_value {
            self.best_value = value;
            self.best_position = Some(self.position.clone());
        }
    }
}
