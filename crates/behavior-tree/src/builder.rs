//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose
//! `Box::new(Sequence::new("Clean", vec![...]))`, you can use shorter
//! functions like `sequence("Clean", vec![...])`.

use crate::{Behavior, Selector, Sequence};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(name, children))`.
#[inline]
pub fn sequence<C: ?Sized + 'static>(
    name: impl Into<String>,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(name, children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(name, children))`.
#[inline]
pub fn selector<C: ?Sized + 'static>(
    name: impl Into<String>,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(name, children))
}
