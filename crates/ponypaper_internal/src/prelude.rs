//! Prelude module for `ponypaper_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use ponypaper_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let timeline = Timeline::blank(48, 16, vec![4, 4, 4]).unwrap();
//! let config = EngineConfig::default();
//! let screen = Rect::from_size(640, 480);
//!
//! assert_eq!(timeline.frame_at(5).unwrap(), 1);
//! assert_eq!(config.animation_step, 4);
//! assert_eq!(screen.width(), 640);
//! ```

// Re-export everything from ponypaper_engine::prelude
#[doc(inline)]
pub use ponypaper_engine::prelude::*;

// Re-export the entire ponypaper_engine module for advanced usage
#[doc(inline)]
pub use ponypaper_engine;
