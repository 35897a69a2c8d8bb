//! Declarative draw instructions.
//!
//! The engine never touches pixels. Each visible character produces one
//! [`DrawCommand`]: "copy this frame of this strip into that rectangle". A
//! [`Renderer`] consumes the commands; [`DrawList`] simply records them.

use serde::{Deserialize, Serialize};

use crate::{
	action::{ActionId, Facing},
	anim::{SpriteStrip, Timeline},
	geom::{FrameRect, RectF},
};

/// One scaled blit of a single timeline frame.
#[derive(Debug, Clone, Copy)]
pub struct DrawCommand<'a> {
	/// Timeline the frame is taken from
	pub timeline: &'a Timeline,
	/// Action being played
	pub action: ActionId,
	/// Facing the timeline belongs to
	pub facing: Facing,
	/// Index of the visible frame
	pub frame: usize,
	/// Source rectangle inside the strip
	pub source: FrameRect,
	/// Destination rectangle on the viewport
	pub destination: RectF,
}

/// Sink for draw commands, called in back-to-front order.
pub trait Renderer {
	/// Draws one frame.
	fn draw(&mut self, command: DrawCommand<'_>);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
	fn draw(&mut self, command: DrawCommand<'_>) {
		(**self).draw(command);
	}
}

/// Owned copy of a [`DrawCommand`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawRecord {
	/// Action being played
	pub action: ActionId,
	/// Facing the timeline belongs to
	pub facing: Facing,
	/// Index of the visible frame
	pub frame: usize,
	/// Source rectangle inside the strip
	pub source: FrameRect,
	/// Destination rectangle on the viewport
	pub destination: RectF,
	/// Strip the source rectangle refers to
	#[serde(skip)]
	pub strip: Option<SpriteStrip>,
}

impl From<DrawCommand<'_>> for DrawRecord {
	fn from(command: DrawCommand<'_>) -> Self {
		Self {
			action: command.action,
			facing: command.facing,
			frame: command.frame,
			source: command.source,
			destination: command.destination,
			strip: Some(command.timeline.strip().clone()),
		}
	}
}

/// A renderer that keeps every command it receives.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
	records: Vec<DrawRecord>,
}

impl DrawList {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Recorded commands, in draw order.
	pub fn records(&self) -> &[DrawRecord] {
		&self.records
	}

	/// Number of recorded commands.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Returns `true` if nothing was drawn.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Forgets all recorded commands.
	pub fn clear(&mut self) {
		self.records.clear();
	}

	/// Iterates over the recorded commands.
	pub fn iter(&self) -> std::slice::Iter<'_, DrawRecord> {
		self.records.iter()
	}
}

impl Renderer for DrawList {
	fn draw(&mut self, command: DrawCommand<'_>) {
		self.records.push(command.into());
	}
}

impl IntoIterator for DrawList {
	type Item = DrawRecord;
	type IntoIter = std::vec::IntoIter<DrawRecord>;

	fn into_iter(self) -> Self::IntoIter {
		self.records.into_iter()
	}
}

impl<'a> IntoIterator for &'a DrawList {
	type Item = &'a DrawRecord;
	type IntoIter = std::slice::Iter<'a, DrawRecord>;

	fn into_iter(self) -> Self::IntoIter {
		self.records.iter()
	}
}
