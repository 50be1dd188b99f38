//! Reactive control policy for a cleaning robot.
//!
//! The same policy (move forward, spiral, back up on collision, turn by a
//! random amount, repeat) is implemented twice:
//!
//! - [`RoombaBehaviorTree`]: a selector over a cleaning and a recovery sequence
//! - [`RoombaStateMachine`]: four self-transitioning states
//!
//! Both are driven by calling `update` once per [`RoombaConfig::sample_time`]
//! and act on the robot only through the [`Agent`] trait. [`Controller`]
//! abstracts over the two so drivers can swap them.

pub mod agent;
pub mod config;
pub mod controller;
pub mod fsm;
pub mod nodes;
pub mod states;
pub mod tree;

#[cfg(test)]
pub(crate) mod mock;

pub use agent::Agent;
pub use config::{ConfigError, ConfigLoader, RoombaConfig, RotationTiming};
pub use controller::{Controller, ControllerKind};
pub use fsm::RoombaStateMachine;
pub use tree::RoombaBehaviorTree;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeded sampler when `seed` is set, entropy-seeded otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
