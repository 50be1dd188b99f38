//! Core state trait.

/// A state of a [`FiniteStateMachine`](crate::FiniteStateMachine).
///
/// A state couples the action it performs every tick with the conditions
/// under which it hands control to a successor. Successors are always new
/// instances, so their counters start fresh by construction.
pub trait State<C: ?Sized>: Send + Sync {
    /// Diagnostic name of this state.
    fn name(&self) -> &str;

    /// Checks the exit conditions of this state.
    ///
    /// Returns the state that must replace this one, or `None` to stay.
    fn check_transition(&mut self, ctx: &mut C) -> Option<Box<dyn State<C>>>;

    /// Performs one tick of this state's action.
    fn execute(&mut self, ctx: &mut C);
}
