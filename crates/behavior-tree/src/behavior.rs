//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over a
//! context type `C` (usually the agent being controlled).

use crate::Status;

/// A behavior tree node that can be activated and ticked against a context.
///
/// Every node must provide every method, including the traversal hooks
/// `children` and `running_child`; there are no fallbacks, so a node that
/// forgets one of its capabilities does not compile.
pub trait Behavior<C: ?Sized>: Send + Sync {
    /// Diagnostic name of this node. Never used for dispatch.
    fn name(&self) -> &str;

    /// Activates this node.
    ///
    /// Resets all per-activation state (counters, computed parameters) and
    /// may issue an initial command on the context. Calling it again
    /// restarts the activation from scratch.
    fn enter(&mut self, ctx: &mut C);

    /// Executes one tick of this node.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Running` if it must be resumed next tick
    fn execute(&mut self, ctx: &mut C) -> Status;

    /// Child nodes, in evaluation order. Leaves return an empty slice.
    fn children(&self) -> &[Box<dyn Behavior<C>>];

    /// Index of the child currently marked running, if any. Leaves return
    /// `None`.
    fn running_child(&self) -> Option<usize>;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C: ?Sized> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn enter(&mut self, ctx: &mut C) {
        (**self).enter(ctx)
    }

    #[inline]
    fn execute(&mut self, ctx: &mut C) -> Status {
        (**self).execute(ctx)
    }

    #[inline]
    fn children(&self) -> &[Box<dyn Behavior<C>>] {
        (**self).children()
    }

    #[inline]
    fn running_child(&self) -> Option<usize> {
        (**self).running_child()
    }
}
