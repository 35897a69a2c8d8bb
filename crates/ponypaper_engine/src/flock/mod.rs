//! The on-screen population and pointer routing.
//!
//! A [`Flock`] owns every character of the roster. At most
//! [`EngineConfig::max_active`](crate::config::EngineConfig::max_active) of
//! them are on screen; the rest wait in a pool. Each tick runs in two phases:
//! every active character is updated, then every character that walked off
//! screen is reset and traded for a random pooled one. Active characters are
//! drawn sorted by height on screen, so lower ones overlap higher ones.
//!
//! Pointer events pick up the front-most character under the pointer, carry
//! it around and drop it again. A character dropped close to the left or
//! right edge walks off that side.

pub mod pointer;
pub mod roster;


pub use self::pointer::{PointerEvent, PointerEventKind, PointerId};
pub use self::roster::{DragGrip, Flock};
