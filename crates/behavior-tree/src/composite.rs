//! Composite and decorator nodes.
//!
//! [`Selector`] encodes "first matching rule wins" priority lists and
//! [`Sequence`] encodes "guard, then act" rules.

use crate::{Behavior, Node, Status};

/// Ticks children left to right until one fails (short-circuit AND).
pub struct Sequence<'n, C> {
    children: Vec<Node<'n, C>>,
}

impl<'n, C> Sequence<'n, C> {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<'n, C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Ticks children left to right until one succeeds (short-circuit OR).
///
/// Used as an ordered rule list: the first rule whose guard passes and whose
/// action succeeds decides the outcome.
pub struct Selector<'n, C> {
    children: Vec<Node<'n, C>>,
}

impl<'n, C> Selector<'n, C> {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<'n, C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}
