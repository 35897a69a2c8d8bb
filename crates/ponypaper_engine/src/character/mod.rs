//! The per-character state machine and motion engine.
//!
//! # States
//!
//! ```text
//!                    first update
//!  Uninitialized ------------------> Moving / Special
//!
//!  Waiting --(timer hits zero)--> Moving (normal action)
//!                                 Special (teleport action)
//!
//!  Moving  --(target reached)--> Waiting
//!  Special --(teleport-out cycle done)--> snap to target, Moving / Special
//!  Special --(teleport-in cycle done)---> Waiting
//!
//!  any --start_drag--> Dragged --stop_drag--> Waiting
//!                                        \--> Moving (dropped at an edge, leaving)
//! ```
//!
//! Cycle completion is checked on every tick regardless of the motion state,
//! so a teleport action picked while being dragged still completes its
//! choreography in the hand. That mirrors long-standing behaviour and is kept
//! as is.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use ponypaper_engine::prelude::*;
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let strip = || Timeline::blank(40, 40, vec![10]).unwrap();
//! let graph = Arc::new(ActionGraph::stand_and_trot((strip(), strip()), (strip(), strip())).unwrap());
//! let mut rng = SmallRng::seed_from_u64(1);
//! let mut pony = CharacterState::new(graph, EngineConfig::default(), &mut rng);
//!
//! let screen = Rect::from_size(800, 600);
//! pony.update(screen, &mut rng);
//! assert_eq!(pony.motion(), MotionState::Moving);
//! assert!(pony.target().is_some());
//! ```

pub mod motion;
pub mod state;
mod targeting;


pub use self::motion::{LeavingMode, MotionState};
pub use self::state::CharacterState;
