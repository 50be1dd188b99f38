//! Tick-driven finite state machine.
//!
//! States decide their own transitions: every tick the machine asks the
//! current [`State`] whether it should be replaced, swaps it if so, and then
//! executes the current state.
//!
//! # Architecture
//!
//! - [`State`]: Core trait for all states
//! - [`FiniteStateMachine`]: holder of the single active state
//! - [`TransitionRecord`]: bounded transition history for diagnostics

pub mod machine;
pub mod state;

pub use machine::{DEFAULT_HISTORY_CAPACITY, FiniteStateMachine, TransitionRecord};
pub use state::State;
