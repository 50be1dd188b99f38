//! Resumable behavior tree library for fixed-rate reactive controllers.
//!
//! Nodes are ticked once per sample period. Unlike instantaneous decision
//! trees, actions here may take many ticks, so the library tracks which
//! child is running and resumes it on the next tick.
//!
//! - **Explicit activation**: `enter` resets a node, `execute` advances it
//! - **Running state**: composites remember the running child by index
//! - **Same-tick chaining**: a child that finishes lets the next one start immediately
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure, or Running
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - [`BehaviorTree`]: root owner and per-tick driver

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use status::Status;
pub use tree::BehaviorTree;
