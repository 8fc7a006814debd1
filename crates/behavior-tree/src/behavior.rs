//! Core behavior trait.

use crate::Status;

/// A behavior tree node evaluated against a mutable context.
///
/// The context is usually a blackboard borrowing the battle being decided,
/// so nodes may both read state and record their choice on it.
pub trait Behavior<C> {
    /// Evaluate this node once.
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Boxed node that may borrow data for `'n`.
pub type Node<'n, C> = Box<dyn Behavior<C> + 'n>;

impl<C> Behavior<C> for Box<dyn Behavior<C> + '_> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
