//! Points and rectangles shared by the motion engine and the renderer seam.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A continuous position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
	/// Horizontal coordinate, growing to the right
	pub x: f32,
	/// Vertical coordinate, growing downwards
	pub y: f32,
}

impl Point {
	/// Creates a new point.
	pub const fn new(x: f32, y: f32) -> Self {
		Self {
			x,
			y,
		}
	}

	/// Squared euclidean distance to `other`.
	#[inline]
	pub fn distance_squared(self, other: Point) -> f32 {
		let dx = other.x - self.x;
		let dy = other.y - self.y;
		dx * dx + dy * dy
	}

	/// Euclidean distance to `other`.
	#[inline]
	pub fn distance(self, other: Point) -> f32 {
		self.distance_squared(other).sqrt()
	}
}

impl fmt::Display for Point {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({:.1}, {:.1})", self.x, self.y)
	}
}

/// An integer viewport rectangle (left/top inclusive, right/bottom exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
	/// Left edge
	pub left: i32,
	/// Top edge
	pub top: i32,
	/// Right edge
	pub right: i32,
	/// Bottom edge
	pub bottom: i32,
}

impl Rect {
	/// Creates a rectangle from its four edges.
	pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
		Self {
			left,
			top,
			right,
			bottom,
		}
	}

	/// Creates a rectangle anchored at the origin.
	pub const fn from_size(width: i32, height: i32) -> Self {
		Self::new(0, 0, width, height)
	}

	/// Width of the rectangle.
	#[inline]
	pub const fn width(&self) -> i32 {
		self.right - self.left
	}

	/// Height of the rectangle.
	#[inline]
	pub const fn height(&self) -> i32 {
		self.bottom - self.top
	}

	/// Returns `true` if `p` lies inside the rectangle grown by `margin` on every side.
	pub fn contains_with_margin(&self, p: Point, margin: f32) -> bool {
		p.x >= self.left as f32 - margin
			&& p.x <= self.right as f32 + margin
			&& p.y >= self.top as f32 - margin
			&& p.y <= self.bottom as f32 + margin
	}
}

impl fmt::Display for Rect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {}, {}, {}]", self.left, self.top, self.right, self.bottom)
	}
}

/// A pixel rectangle inside a sprite strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameRect {
	/// X offset of the frame inside the strip
	pub x: u32,
	/// Y offset of the frame inside the strip
	pub y: u32,
	/// Frame width in pixels
	pub width: u32,
	/// Frame height in pixels
	pub height: u32,
}

/// A floating-point destination rectangle on the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectF {
	/// Left edge
	pub left: f32,
	/// Top edge
	pub top: f32,
	/// Right edge
	pub right: f32,
	/// Bottom edge
	pub bottom: f32,
}

impl RectF {
	/// Creates a rectangle of the given size centred on `center`.
	pub fn centered(center: Point, width: f32, height: f32) -> Self {
		Self {
			left: center.x - width / 2.0,
			top: center.y - height / 2.0,
			right: center.x + width / 2.0,
			bottom: center.y + height / 2.0,
		}
	}

	/// Width of the rectangle.
	#[inline]
	pub fn width(&self) -> f32 {
		self.right - self.left
	}

	/// Height of the rectangle.
	#[inline]
	pub fn height(&self) -> f32 {
		self.bottom - self.top
	}
}
