/// Errors raised by the optimizer.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PsoError {
    #[error("bounds must have at least one dimension")]
    EmptyBounds,

    #[error("lower bound has {lower} dimensions but upper bound has {upper}")]
    DimensionMismatch { lower: usize, upper: usize },

    #[error("lower bound {lower} exceeds upper bound {upper} in dimension {dimension}")]
    InvertedBounds {
        dimension: usize,
        lower: f64,
        upper: f64,
    },

    #[error("bounds must be finite (dimension {dimension})")]
    NonFiniteBound { dimension: usize },

    #[error("swarm needs at least one particle")]
    NoParticles,

    #[error("hyperparameter {name} must be finite")]
    NonFiniteHyperparameter { name: &'static str },

    #[error("evaluation value must be finite, got {0}")]
    NonFiniteValue(f64),
}

pub type Result<T> = std::result::Result<T, PsoError>;
