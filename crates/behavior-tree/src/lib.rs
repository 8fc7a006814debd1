//! Priority-rule behavior trees for turn-based enemy decisions.
//!
//! Trees are rebuilt for every decision and may borrow the battle they are
//! evaluating, so every node carries a lifetime `'n` alongside its context
//! type `C`. Each tick completes immediately: there is no `Running` state.
//!
//! - [`Behavior`]: core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composites: [`Selector`] (first success wins), [`Sequence`] (all must pass)
//! - Leaves: [`Condition`] (read-only check), [`Action`] (mutating step)

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod leaf;
pub mod status;

pub use behavior::{Behavior, Node};
pub use composite::{Selector, Sequence};
pub use leaf::{Action, Condition};
pub use status::Status;
