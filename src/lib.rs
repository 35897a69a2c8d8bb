#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `ponypaper-rs` animates a small roster of sprite characters that wander across a viewport,
//! pause, teleport, leave and come back, and can be picked up and dropped with a pointer.
//!
//! The engine is headless: feed it a viewport and a random source once per tick and hand
//! the resulting draw instructions to whatever renders your wallpaper.
//!
//! ```
//! use std::sync::Arc;
//!
//! use ponypaper_rs::prelude::*;
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let strip = || Timeline::blank(32, 32, vec![10]).unwrap();
//! let graph = Arc::new(ActionGraph::stand_and_trot((strip(), strip()), (strip(), strip())).unwrap());
//! let mut rng = SmallRng::seed_from_u64(7);
//! let mut flock = Flock::new([graph], EngineConfig::default(), &mut rng);
//!
//! let list = flock.update(Rect::from_size(800, 600), &mut rng);
//! assert_eq!(list.len(), 1);
//! ```
pub use ponypaper_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use ponypaper_dylib;
