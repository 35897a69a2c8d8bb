//! The rotating set of on-screen characters.

use std::{fmt, sync::Arc};

use log::{debug, info};

use crate::{
	action::ActionGraph,
	character::CharacterState,
	config::EngineConfig,
	error::EngineError,
	geom::{Point, Rect},
	random::RandomSource,
	render::{DrawList, Renderer},
};

use super::pointer::{PointerEvent, PointerEventKind, PointerId};

/// The pointer currently holding a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGrip {
	/// Pointer that picked the character up
	pub pointer_id: PointerId,
	/// Index of the held character in [`Flock::members`]
	pub member: usize,
}

/// A roster of characters, a bounded number of which are on screen at once.
///
/// Characters are created once and never destroyed. They only move between
/// the active set and the pool: whenever an active character walks off
/// screen it is reset and swapped for a random pooled one.
#[derive(Clone)]
pub struct Flock {
	members: Vec<CharacterState>,
	/// Indices into `members`, in draw order after each update
	active: Vec<usize>,
	pool: Vec<usize>,
	dragged: Option<DragGrip>,
}

impl Flock {
	/// Creates one character per graph and activates up to
	/// [`EngineConfig::max_active`] of them at random.
	pub fn new<I, R>(roster: I, config: EngineConfig, rng: &mut R) -> Self
	where
		I: IntoIterator<Item = Arc<ActionGraph>>,
		R: RandomSource + ?Sized,
	{
		let members: Vec<_> = roster
			.into_iter()
			.map(|graph| CharacterState::new(graph, config, rng))
			.collect();
		Self::from_characters(members, config.max_active, rng)
	}

	/// Like [`new`](Self::new), but rejects settings that fail
	/// [`EngineConfig::validate`] instead of misbehaving on the first update.
	///
	/// # Errors
	///
	/// Returns [`EngineError::Config`] for invalid settings.
	pub fn try_new<I, R>(roster: I, config: EngineConfig, rng: &mut R) -> Result<Self, EngineError>
	where
		I: IntoIterator<Item = Arc<ActionGraph>>,
		R: RandomSource + ?Sized,
	{
		config.validate()?;
		Ok(Self::new(roster, config, rng))
	}

	/// Builds a flock from existing characters, activating up to
	/// `max_active` of them at random.
	pub fn from_characters<R: RandomSource + ?Sized>(
		members: Vec<CharacterState>,
		max_active: usize,
		rng: &mut R,
	) -> Self {
		let mut pool: Vec<usize> = (0..members.len()).collect();
		let count = members.len().min(max_active);
		let mut active = Vec::with_capacity(count);
		for _ in 0..count {
			let j = rng.next_index(pool.len());
			active.push(pool.remove(j));
		}

		info!("Flock of {} characters, {} on screen", members.len(), active.len());
		Self {
			members,
			active,
			pool,
			dragged: None,
		}
	}

	/// Resets every on-screen character, e.g. after the viewport changed.
	///
	/// Any drag in progress is dropped.
	pub fn reset(&mut self) {
		for &member in &self.active {
			self.members[member].reset();
		}
		self.dragged = None;
	}

	/// Advances every on-screen character by one tick and returns what to draw.
	pub fn update<R: RandomSource + ?Sized>(&mut self, bounds: Rect, rng: &mut R) -> DrawList {
		let mut list = DrawList::new();
		self.update_and_draw(bounds, rng, &mut list);
		list
	}

	/// Advances every on-screen character by one tick and draws them back to
	/// front into `renderer`.
	pub fn update_and_draw<R, D>(&mut self, bounds: Rect, rng: &mut R, renderer: &mut D)
	where
		R: RandomSource + ?Sized,
		D: Renderer + ?Sized,
	{
		for &member in &self.active {
			self.members[member].update(bounds, rng);
		}

		// Rotation only starts once every active member has moved.
		for slot in 0..self.active.len() {
			let leaving = self.active[slot];
			if !self.members[leaving].gone_off_screen() {
				continue;
			}

			self.members[leaving].reset();
			if self.dragged.is_some_and(|grip| grip.member == leaving) {
				self.dragged = None;
			}
			if !self.pool.is_empty() {
				let j = rng.next_index(self.pool.len());
				let incoming = self.pool.remove(j);
				self.pool.push(leaving);
				self.active[slot] = incoming;
				info!("Character {} left the screen, character {} takes its place", leaving, incoming);
			} else {
				info!("Character {} left the screen and comes straight back", leaving);
			}
			self.members[self.active[slot]].update(bounds, rng);
		}

		let members = &self.members;
		self.active.sort_by(|&a, &b| {
			members[a].position().y.total_cmp(&members[b].position().y)
		});

		for &member in &self.active {
			self.members[member].draw_on(renderer);
		}
	}

	/// Routes one pointer event to the characters.
	///
	/// Only one character is held at a time, by the pointer that picked it up.
	/// Pointer positions are snapped to whole pixels.
	pub fn on_pointer_event<R: RandomSource + ?Sized>(&mut self, event: PointerEvent, rng: &mut R) {
		let position = Point::new(event.position.x.round(), event.position.y.round());
		match event.kind {
			PointerEventKind::Down => {
				self.release(rng);
				// The last hit is the front-most character.
				let hit = self
					.active
					.iter()
					.rev()
					.copied()
					.find(|&member| self.members[member].hit_test(position));
				if let Some(member) = hit {
					self.members[member].start_drag(rng);
					self.dragged = Some(DragGrip {
						pointer_id: event.pointer_id,
						member,
					});
					debug!("Pointer {} picked up character {}", event.pointer_id, member);
				}
			}
			PointerEventKind::Move => {
				if let Some(grip) = self.dragged.filter(|grip| grip.pointer_id == event.pointer_id) {
					self.members[grip.member].move_to(position);
				}
			}
			PointerEventKind::Up | PointerEventKind::Cancel => self.release(rng),
			PointerEventKind::SecondaryUp => {
				if self.dragged.is_some_and(|grip| grip.pointer_id == event.pointer_id) {
					self.release(rng);
				}
			}
		}
	}

	fn release<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
		if let Some(grip) = self.dragged.take() {
			self.members[grip.member].stop_drag(rng);
			debug!("Pointer {} dropped character {}", grip.pointer_id, grip.member);
		}
	}

	/// Every character in the roster, active or not.
	pub fn members(&self) -> &[CharacterState] {
		&self.members
	}

	/// On-screen characters, in the order they were last drawn.
	pub fn active(&self) -> impl Iterator<Item = &CharacterState> {
		self.active.iter().map(|&member| &self.members[member])
	}

	/// Roster indices of the on-screen characters.
	pub fn active_indices(&self) -> &[usize] {
		&self.active
	}

	/// Number of on-screen characters.
	#[inline]
	pub fn active_len(&self) -> usize {
		self.active.len()
	}

	/// Number of characters waiting off stage.
	#[inline]
	pub fn pool_len(&self) -> usize {
		self.pool.len()
	}

	/// The current drag, if any.
	#[inline]
	pub fn drag_grip(&self) -> Option<DragGrip> {
		self.dragged
	}

	/// The character being held, if any.
	pub fn dragged(&self) -> Option<&CharacterState> {
		self.dragged.map(|grip| &self.members[grip.member])
	}
}

impl fmt::Debug for Flock {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Flock")
			.field("members", &self.members.len())
			.field("active", &self.active)
			.field("pool", &self.pool)
			.field("dragged", &self.dragged)
			.finish()
	}
}

impl fmt::Display for Flock {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Flock: {} on screen, {} in the pool", self.active.len(), self.pool.len())?;
		for (slot, member) in self.active().enumerate() {
			writeln!(f, "  [{slot}] {member}")?;
		}
		Ok(())
	}
}
