//! Tree driver.
//!
//! [`BehaviorTree`] owns the root node and is ticked once per sample period
//! by an external driver.

use tracing::{debug, trace};

use crate::{Behavior, Status};

/// A behavior tree ticked at a fixed rate.
///
/// # Re-entry
///
/// The root is entered before its first execution and again on the tick
/// following any terminal (`Success`/`Failure`) root status, so every
/// activation of the root starts from a clean state. Drivers never need to
/// call `enter` themselves.
pub struct BehaviorTree<C: ?Sized> {
    root: Box<dyn Behavior<C>>,
    needs_enter: bool,
    ticks: u64,
    activations: u64,
}

impl<C: ?Sized> BehaviorTree<C> {
    pub fn new(root: Box<dyn Behavior<C>>) -> Self {
        Self {
            root,
            needs_enter: true,
            ticks: 0,
            activations: 0,
        }
    }

    /// Ticks the tree once and returns the root's status for this tick.
    pub fn update(&mut self, ctx: &mut C) -> Status {
        if self.needs_enter {
            self.root.enter(ctx);
            self.needs_enter = false;
            self.activations += 1;
            debug!(root = self.root.name(), activation = self.activations, "root entered");
        }

        let status = self.root.execute(ctx);
        self.ticks += 1;
        trace!(tick = self.ticks, ?status, "tree ticked");

        if status.is_terminal() {
            self.needs_enter = true;
        }
        status
    }

    pub fn root(&self) -> &dyn Behavior<C> {
        self.root.as_ref()
    }

    /// Number of `update` calls so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Number of times the root has been entered.
    pub fn activations(&self) -> u64 {
        self.activations
    }

    /// Names of the nodes along the currently running branch, root first.
    ///
    /// When nothing is running only the root name is returned.
    pub fn active_path(&self) -> Vec<&str> {
        let mut path = vec![self.root.name()];
        let mut node: &dyn Behavior<C> = self.root.as_ref();
        while let Some(index) = node.running_child() {
            node = node.children()[index].as_ref();
            path.push(node.name());
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{selector, sequence};

    struct Counter {
        name: &'static str,
        limit: u32,
        count: u32,
    }

    impl Behavior<Vec<&'static str>> for Counter {
        fn name(&self) -> &str {
            self.name
        }

        fn children(&self) -> &[Box<dyn Behavior<Vec<&'static str>>>] {
            &[]
        }

        fn running_child(&self) -> Option<usize> {
            None
        }

        fn enter(&mut self, ctx: &mut Vec<&'static str>) {
            self.count = 0;
            ctx.push(self.name);
        }

        fn execute(&mut self, _ctx: &mut Vec<&'static str>) -> Status {
            self.count += 1;
            if self.count > self.limit {
                Status::Success
            } else {
                Status::Running
            }
        }
    }

    fn counter(name: &'static str, limit: u32) -> Box<dyn Behavior<Vec<&'static str>>> {
        Box::new(Counter {
            name,
            limit,
            count: 0,
        })
    }

    #[test]
    fn active_path_follows_running_children() {
        let mut tree = BehaviorTree::new(selector(
            "root",
            vec![sequence("work", vec![counter("a", 0), counter("b", 2)])],
        ));
        let mut entered = Vec::new();

        assert_eq!(tree.active_path(), ["root"]);
        assert_eq!(tree.update(&mut entered), Status::Running);
        assert_eq!(tree.active_path(), ["root", "work", "b"]);
    }

    #[test]
    fn root_is_reentered_after_terminal_status() {
        let mut tree = BehaviorTree::new(sequence("root", vec![counter("a", 0)]));
        let mut entered = Vec::new();

        assert_eq!(tree.update(&mut entered), Status::Success);
        assert_eq!(tree.update(&mut entered), Status::Success);
        assert_eq!(tree.activations(), 2);
        assert_eq!(tree.ticks(), 2);
        assert_eq!(entered, ["a", "a"]);
    }

    #[test]
    fn running_root_is_not_reentered() {
        let mut tree = BehaviorTree::new(sequence("root", vec![counter("a", 3)]));
        let mut entered = Vec::new();

        for _ in 0..3 {
            assert_eq!(tree.update(&mut entered), Status::Running);
        }
        assert_eq!(tree.update(&mut entered), Status::Success);
        assert_eq!(tree.activations(), 1);
        assert_eq!(entered, ["a"]);
    }
}
