//! Character behaviour graphs.
//!
//! Each character is described by a directed graph of [`ActionNode`]s. An
//! action bundles a left-facing and a right-facing [`Timeline`](crate::anim::Timeline),
//! a [`ActionKind`] tag and three transition lists used when the character
//! starts waiting, starts moving, or gets picked up.
//!
//! ```text
//!            waiting                 moving
//!   +-------+ -----> +-------+  -----> +------+
//!   | trot  |        | stand |         | trot |
//!   +-------+ <----- +-------+  <----- +------+
//!            moving                  waiting
//! ```
//!
//! Transition lists are weighted by repetition: `["trot", "trot", "dance"]`
//! picks `trot` two times out of three.

pub mod builder;
pub mod graph;
pub mod node;


pub use self::builder::ActionGraphBuilder;
pub use self::graph::ActionGraph;
pub use self::node::{ActionId, ActionKind, ActionNode, Facing, TransitionContext, Transitions};
