//! This module is separated into its own crate to enable simple dynamic linking for `ponypaper`, and should not be used directly.

/// `use ponypaper::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export ponypaper_engine for convenience
pub use ponypaper_engine;

// Re-export the engine modules at crate root
pub use ponypaper_engine::{action, anim, character, config, error, flock, geom, random, render};
