//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Both composites are resumable: when a child returns `Running`, the
//! composite remembers its index and resumes that exact child on the next
//! tick without re-entering it.

use crate::{Behavior, Status};

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Success`, the next child is entered and executed **in the same tick**
/// - If a child returns `Running`, the sequence returns `Running` and resumes that child next tick
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C: ?Sized> {
    name: String,
    children: Vec<Box<dyn Behavior<C>>>,
    running_child: Option<usize>,
}

impl<C: ?Sized> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self {
            name: name.into(),
            children,
            running_child: None,
        }
    }

    /// Appends a child. Insertion order is evaluation order.
    pub fn add_child(&mut self, child: Box<dyn Behavior<C>>) {
        self.children.push(child);
    }
}

impl<C: ?Sized> Behavior<C> for Sequence<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn enter(&mut self, _ctx: &mut C) {
        self.running_child = None;
    }

    fn execute(&mut self, ctx: &mut C) -> Status {
        let mut index = match self.running_child {
            Some(index) => index,
            None => {
                self.running_child = Some(0);
                self.children[0].enter(ctx);
                0
            }
        };

        loop {
            match self.children[index].execute(ctx) {
                Status::Failure => {
                    self.running_child = None;
                    return Status::Failure; // Short-circuit
                }
                Status::Running => return Status::Running,
                Status::Success => {
                    index += 1;
                    if index < self.children.len() {
                        // Next child starts in the same tick
                        self.running_child = Some(index);
                        self.children[index].enter(ctx);
                    } else {
                        self.running_child = None;
                        return Status::Success;
                    }
                }
            }
        }
    }

    fn children(&self) -> &[Box<dyn Behavior<C>>] {
        &self.children
    }

    fn running_child(&self) -> Option<usize> {
        self.running_child
    }
}

/// Executes child behaviors in sequence until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Failure`, the next child is entered and executed **in the same tick**
/// - If a child returns `Running`, the selector returns `Running` and resumes that child next tick
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<C: ?Sized> {
    name: String,
    children: Vec<Box<dyn Behavior<C>>>,
    running_child: Option<usize>,
}

impl<C: ?Sized> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self {
            name: name.into(),
            children,
            running_child: None,
        }
    }

    /// Appends a child. Insertion order is evaluation order.
    pub fn add_child(&mut self, child: Box<dyn Behavior<C>>) {
        self.children.push(child);
    }
}

impl<C: ?Sized> Behavior<C> for Selector<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn enter(&mut self, _ctx: &mut C) {
        self.running_child = None;
    }

    fn execute(&mut self, ctx: &mut C) -> Status {
        let mut index = match self.running_child {
            Some(index) => index,
            None => {
                self.running_child = Some(0);
                self.children[0].enter(ctx);
                0
            }
        };

        loop {
            match self.children[index].execute(ctx) {
                Status::Success => {
                    self.running_child = None;
                    return Status::Success; // Short-circuit
                }
                Status::Running => return Status::Running,
                Status::Failure => {
                    index += 1;
                    if index < self.children.len() {
                        // Fall through to the next option in the same tick
                        self.running_child = Some(index);
                        self.children[index].enter(ctx);
                    } else {
                        // All children failed
                        self.running_child = None;
                        return Status::Failure;
                    }
                }
            }
        }
    }

    fn children(&self) -> &[Box<dyn Behavior<C>>] {
        &self.children
    }

    fn running_child(&self) -> Option<usize> {
        self.running_child
    }
}
