//! This crate provides the animation and behaviour engine of the `ponypaper-rs` project.
//!
//! # Overview
//!
//! - **Timeline**: a sprite strip plus per-frame durations, answering which frame is visible
//! - **Action graph**: named actions with left/right timelines and weighted transitions
//! - **Character**: the per-character state machine driving position, facing and animation
//! - **Flock**: a bounded, rotating set of on-screen characters with pointer dragging
//!
//! The engine is tick driven and headless. Hosts feed it a viewport and a random source
//! once per tick and receive draw instructions back.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use ponypaper_engine::prelude::*;
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let strip = || Timeline::blank(64, 32, vec![6, 6]).unwrap();
//! let graph = Arc::new(ActionGraph::stand_and_trot((strip(), strip()), (strip(), strip())).unwrap());
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let roster = vec![graph.clone(), graph.clone(), graph];
//! let mut flock = Flock::new(roster, EngineConfig::default(), &mut rng);
//!
//! let screen = Rect::from_size(1280, 720);
//! for _ in 0..100 {
//! 	let list = flock.update(screen, &mut rng);
//! 	assert_eq!(list.len(), 3);
//! }
//! ```

pub mod action;
pub mod anim;
pub mod character;
pub mod config;
pub mod error;
pub mod flock;
pub mod geom;
pub mod random;
pub mod render;

/// `use ponypaper_engine::prelude::*;` to import commonly used items.
pub mod prelude;
