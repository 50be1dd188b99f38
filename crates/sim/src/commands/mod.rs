//! Command implementations for roomba-sim
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod optimize;
mod run;

pub use optimize::Optimize;
pub use run::Run;
