//! Sprite-strip animation timing.
//!
//! A [`Timeline`] pairs one decoded sprite strip with the time each frame
//! stays on screen. Frames are laid out left to right with equal widths:
//!
//! ```text
//! +---------+---------+---------+---------+
//! | frame 0 | frame 1 | frame 2 | frame 3 |   durations: 4, 4, 4, 10
//! +---------+---------+---------+---------+
//!  [0, 4)    [4, 8)    [8, 12)   [12, 22)     cycle length: 22
//! ```
//!
//! # Examples
//!
//! ```
//! use ponypaper_engine::anim::Timeline;
//!
//! let timeline = Timeline::blank(64, 16, vec![4, 4, 4, 10]).unwrap();
//! assert_eq!(timeline.cycle_length(), 22);
//! assert_eq!(timeline.frame_at(7).unwrap(), 1);
//! assert!(timeline.frame_at(22).is_err());
//! ```

pub mod timeline;

pub use self::timeline::{SpriteStrip, Timeline};
