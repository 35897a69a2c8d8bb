//! Pointer input forwarded by the host.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geom::Point;

/// Identifier the host assigns to a pointer (finger, mouse button).
pub type PointerId = u32;

/// Kind of pointer transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointerEventKind {
	/// First pointer went down
	Down,
	/// A pointer moved
	Move,
	/// Last pointer went up
	Up,
	/// The gesture was aborted by the host
	Cancel,
	/// A pointer other than the last one went up
	SecondaryUp,
}

impl fmt::Display for PointerEventKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Down => write!(f, "down"),
			Self::Move => write!(f, "move"),
			Self::Up => write!(f, "up"),
			Self::Cancel => write!(f, "cancel"),
			Self::SecondaryUp => write!(f, "secondary-up"),
		}
	}
}

/// One pointer event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
	/// What happened
	pub kind: PointerEventKind,
	/// Which pointer it happened to
	pub pointer_id: PointerId,
	/// Where it happened
	pub position: Point,
}

impl PointerEvent {
	/// Creates a new pointer event.
	pub fn new(kind: PointerEventKind, pointer_id: PointerId, position: Point) -> Self {
		Self {
			kind,
			pointer_id,
			position,
		}
	}

	/// Shorthand for a [`PointerEventKind::Down`] event.
	pub fn down(pointer_id: PointerId, position: Point) -> Self {
		Self::new(PointerEventKind::Down, pointer_id, position)
	}

	/// Shorthand for a [`PointerEventKind::Move`] event.
	pub fn moved(pointer_id: PointerId, position: Point) -> Self {
		Self::new(PointerEventKind::Move, pointer_id, position)
	}

	/// Shorthand for a [`PointerEventKind::Up`] event.
	pub fn up(pointer_id: PointerId, position: Point) -> Self {
		Self::new(PointerEventKind::Up, pointer_id, position)
	}
}

impl fmt::Display for PointerEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} #{} at {}", self.kind, self.pointer_id, self.position)
	}
}
