//! Prelude module for `ponypaper_engine`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```
//! use ponypaper_engine::prelude::*;
//!
//! let timeline = Timeline::blank(40, 20, vec![4, 4]).unwrap();
//! assert_eq!(timeline.cycle_length(), 8);
//! let config = EngineConfig::default();
//! assert_eq!(config.max_active, 4);
//! ```

// Animation
#[doc(inline)]
pub use crate::anim::{SpriteStrip, Timeline};

// Behaviour graphs
#[doc(inline)]
pub use crate::action::{
	ActionGraph, ActionGraphBuilder, ActionId, ActionKind, ActionNode, Facing, TransitionContext,
};

// Characters and the flock
#[doc(inline)]
pub use crate::character::{CharacterState, LeavingMode, MotionState};
#[doc(inline)]
pub use crate::flock::{DragGrip, Flock, PointerEvent, PointerEventKind, PointerId};

// Plumbing
#[doc(inline)]
pub use crate::config::EngineConfig;
#[doc(inline)]
pub use crate::error::{ConfigError, EngineError, GraphError, TimelineError};
#[doc(inline)]
pub use crate::geom::{FrameRect, Point, Rect, RectF};
#[doc(inline)]
pub use crate::random::RandomSource;
#[doc(inline)]
pub use crate::render::{DrawCommand, DrawList, DrawRecord, Renderer};
