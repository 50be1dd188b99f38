//! Particle Swarm Optimization with an ask/tell evaluation protocol.
//!
//! ```rust
//! use pso::{Hyperparams, ParticleSwarmOptimization};
//!
//! let mut swarm =
//!     ParticleSwarmOptimization::new(Hyperparams::default(), vec![-5.0; 2], vec![5.0; 2])?;
//!
//! for _ in 0..400 {
//!     let x = swarm.position_to_evaluate();
//!     let value = -(x[0] * x[0] + x[1] * x[1]);
//!     swarm.notify_evaluation(value)?;
//! }
//! assert!(swarm.best_value() <= 0.0);
//! # Ok::<(), pso::PsoError>(())
//! ```

pub mod error;
pub mod params;
pub mod particle;
pub mod swarm;

pub use error::{PsoError, Result};
pub use params::Hyperparams;
pub use particle::Particle;
pub use swarm::ParticleSwarmOptimization;
