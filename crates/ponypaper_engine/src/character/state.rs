//! Per-character state machine.

use std::{fmt, sync::Arc};

use log::{debug, trace};

use crate::{
	action::{ActionGraph, ActionId, ActionKind, ActionNode, Facing, TransitionContext},
	config::EngineConfig,
	geom::{Point, Rect, RectF},
	random::RandomSource,
	render::{DrawCommand, Renderer},
};

use super::{
	motion::{LeavingMode, MotionState},
	targeting,
};

/// The live state of one character.
///
/// A character is driven by [`update`](Self::update) once per tick. It spawns
/// off screen, walks to random targets, waits, occasionally leaves the screen
/// and can be picked up and thrown around by the pointer.
///
/// Two clocks run side by side and are never merged: the animation clock
/// advances by [`EngineConfig::animation_step`] each tick and decides which
/// frame is shown and when teleports fire, while the position advances by
/// the walking speed and decides when a target is reached.
#[derive(Clone)]
pub struct CharacterState {
	pub(super) graph: Arc<ActionGraph>,
	pub(super) config: EngineConfig,

	pub(super) motion: MotionState,
	pub(super) leaving: LeavingMode,

	/// Meaningless while uninitialized
	pub(super) current_action: ActionId,
	pub(super) position: Point,
	pub(super) facing: Facing,
	pub(super) clock: u32,

	pub(super) target: Option<Point>,
	pub(super) wait_timer: u32,
	pub(super) screen_bounds: Rect,
	pub(super) resources_active: bool,
}

impl CharacterState {
	/// Creates an uninitialized character with a random facing.
	pub fn new<R: RandomSource + ?Sized>(
		graph: Arc<ActionGraph>,
		config: EngineConfig,
		rng: &mut R,
	) -> Self {
		let facing = if rng.next_bool() {
			Facing::Left
		} else {
			Facing::Right
		};
		let current_action = graph.start_actions()[0];
		Self {
			graph,
			config,
			motion: MotionState::Uninitialized,
			leaving: LeavingMode::Normal,
			current_action,
			position: Point::default(),
			facing,
			clock: 0,
			target: None,
			wait_timer: 0,
			screen_bounds: Rect::default(),
			resources_active: false,
		}
	}

	/// Clears the character back to [`MotionState::Uninitialized`].
	///
	/// The next [`update`](Self::update) places it off screen again.
	pub fn reset(&mut self) {
		self.wait_timer = 0;
		self.motion = MotionState::Uninitialized;
		self.leaving = LeavingMode::Normal;
		self.position = Point::default();
		self.target = None;
		self.clock = 0;
		self.resources_active = false;
	}

	/// Advances the character by one tick inside `bounds`.
	pub fn update<R: RandomSource + ?Sized>(&mut self, bounds: Rect, rng: &mut R) {
		self.screen_bounds = bounds;

		if self.motion == MotionState::Uninitialized {
			self.spawn(rng);
			return;
		}

		let teleported = self.advance_animation(rng);
		if !teleported {
			match self.motion {
				MotionState::Waiting => {
					if self.wait_timer > 0 {
						self.wait_timer -= 1;
					} else {
						self.set_travelling(rng);
					}
				}
				MotionState::Moving => {
					let speed = self.config.walk_speed * self.scale();
					self.move_towards_target(speed, rng);
				}
				MotionState::Uninitialized | MotionState::Dragged | MotionState::Special => {}
			}
		}

		trace!(
			"{} at {} facing {} clock {} ({})",
			self.current().name(),
			self.position,
			self.facing,
			self.clock,
			self.motion
		);
	}

	/// Emits the draw command for the current frame.
	///
	/// Uninitialized characters draw nothing.
	pub fn draw_on<D: Renderer + ?Sized>(&self, renderer: &mut D) {
		if !self.is_initialized() {
			return;
		}

		let timeline = self.current().timeline(self.facing);
		let frame = timeline
			.frame_at(i64::from(self.clock))
			.expect("animation clock is kept inside the current cycle");
		let source = timeline.frame_rect(frame);

		let scale = self.scale();
		let mut center = self.position;
		if self.motion == MotionState::Dragged {
			center.y -= self.config.drag_lift * scale;
		}
		let destination = RectF::centered(
			center,
			source.width as f32 * scale,
			source.height as f32 * scale,
		);

		renderer.draw(DrawCommand {
			timeline,
			action: self.current_action,
			facing: self.facing,
			frame,
			source,
			destination,
		});
	}

	/// Returns `true` once the character has completed an exit.
	#[inline]
	pub fn gone_off_screen(&self) -> bool {
		self.leaving == LeavingMode::Exited
	}

	/// Returns `true` if `point` is on top of the character.
	pub fn hit_test(&self, point: Point) -> bool {
		if !self.is_initialized() {
			return false;
		}
		let size = self.radius();
		self.position.distance_squared(point) < size * size
	}

	/// Picks the character up.
	///
	/// Any pending target and exit are cancelled; from now on the character
	/// only moves through [`move_to`](Self::move_to).
	pub fn start_drag<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
		if !self.is_initialized() {
			return;
		}
		self.motion = MotionState::Dragged;
		self.target = None;
		self.leaving = LeavingMode::Normal;
		let next = self.current().pick_next(TransitionContext::Drag, rng);
		self.change_action(next);
		debug!("Picked up at {}", self.position);
	}

	/// Puts the character down.
	///
	/// Dropped near the left or right edge it walks straight off that side;
	/// anywhere else it starts waiting.
	pub fn stop_drag<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
		if !self.is_initialized() {
			return;
		}

		let inset = self.inset();
		let bounds = self.screen_bounds;
		let exit_x = if self.position.x < (bounds.left + inset) as f32 {
			Some(bounds.left - inset)
		} else if self.position.x >= (bounds.right - inset) as f32 {
			Some(bounds.right + inset)
		} else {
			None
		};

		if let Some(x) = exit_x {
			self.motion = MotionState::Moving;
			self.leaving = LeavingMode::Exiting;
			self.target = Some(Point::new(x as f32, self.position.y));
			let next = self.current().pick_next(TransitionContext::Moving, rng);
			self.change_action(next);
			debug!("Dropped at the edge, leaving towards x={}", x);
		} else {
			self.motion = MotionState::Waiting;
			self.target = None;
			self.leaving = LeavingMode::Normal;
			self.wait_timer = self.draw_wait(rng);
			let next = self.current().pick_next(TransitionContext::Waiting, rng);
			self.change_action(next);
			debug!("Dropped at {}, waiting {} ticks", self.position, self.wait_timer);
		}
	}

	/// Places the character at `point`, turning to face the direction of travel.
	pub fn move_to(&mut self, point: Point) {
		self.face_towards(point);
		self.position = point;
	}

	fn spawn<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
		self.resources_active = true;
		self.position = targeting::off_screen(self.screen_bounds, self.inset(), rng);
		self.clock = 0;
		self.current_action = self.graph.pick_start(rng);
		self.motion = MotionState::travelling(self.current().kind());
		self.set_random_target(rng);
		debug!(
			"Spawned at {} with '{}', heading for {:?}",
			self.position,
			self.current().name(),
			self.target
		);
	}

	/// Advances the animation clock and runs teleport choreography on cycle
	/// completion. Returns `true` if a teleport step replaced this tick's motion.
	fn advance_animation<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> bool {
		let cycle = self.current().cycle_length(self.facing);
		let clock = u64::from(self.clock) + u64::from(self.config.animation_step);
		// Below `cycle` after the wrap, so it fits back into a u32.
		self.clock = (clock % u64::from(cycle)) as u32;
		if clock < u64::from(cycle) {
			return false;
		}

		match self.current().kind() {
			ActionKind::Normal => false,
			ActionKind::TeleportOut => {
				let next = self.current().pick_next(TransitionContext::Moving, rng);
				// No target while held or waiting: only the action changes.
				let destination = self.target;
				if let Some(destination) = destination {
					self.move_to(destination);
				}
				self.change_action(next);
				if destination.is_some() && self.motion != MotionState::Dragged {
					self.motion = MotionState::travelling(self.current().kind());
				}
				debug!("Teleported to {} as '{}'", self.position, self.current().name());
				true
			}
			ActionKind::TeleportIn => {
				self.arrive(rng);
				let next = self.current().pick_next(TransitionContext::Waiting, rng);
				self.change_action(next);
				true
			}
		}
	}

	fn set_travelling<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
		let next = self.current().pick_next(TransitionContext::Moving, rng);
		self.change_action(next);
		self.motion = MotionState::travelling(self.current().kind());
		self.set_random_target(rng);
		debug!("Set off as '{}' towards {:?}", self.current().name(), self.target);
	}

	fn move_towards_target<R: RandomSource + ?Sized>(&mut self, speed: f32, rng: &mut R) {
		let Some(target) = self.target else {
			return;
		};
		self.face_towards(target);

		let distance = self.position.distance(target);
		if distance <= speed {
			self.position = target;
			self.arrive(rng);
			let next = self.current().pick_next(TransitionContext::Waiting, rng);
			self.change_action(next);
		} else {
			let f = speed / distance;
			self.position.x += (target.x - self.position.x) * f;
			self.position.y += (target.y - self.position.y) * f;
		}
	}

	fn arrive<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
		self.motion = MotionState::Waiting;
		self.target = None;
		self.wait_timer = self.draw_wait(rng);
		if self.leaving == LeavingMode::Exiting {
			self.leaving = LeavingMode::Exited;
			debug!("Left the screen at {}", self.position);
		}
	}

	fn set_random_target<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
		let bounds = self.screen_bounds;
		let inset = self.inset();
		let biased = self.motion == MotionState::Moving;
		let from = self.position;
		let attempts = self.config.horizontal_attempts;
		let max_angle = self.config.horizontal_max_angle_radians();

		let leaving = rng.next_int(self.config.leave_chance.max(1)) < 1;
		let target = match (leaving, biased) {
			(true, true) => targeting::horizontally_biased(from, attempts, max_angle, rng, |rng| {
				targeting::off_screen(bounds, inset, rng)
			}),
			(true, false) => targeting::off_screen(bounds, inset, rng),
			(false, true) => targeting::horizontally_biased(from, attempts, max_angle, rng, |rng| {
				targeting::on_screen(bounds, inset, rng)
			}),
			(false, false) => targeting::on_screen(bounds, inset, rng),
		};

		self.target = Some(target);
		if leaving {
			self.leaving = LeavingMode::Exiting;
		}
	}

	fn face_towards(&mut self, point: Point) {
		let dx = point.x - self.position.x;
		let facing = if dx > 0.0 {
			Facing::Right
		} else if dx < 0.0 {
			Facing::Left
		} else {
			return;
		};
		if facing != self.facing {
			self.facing = facing;
			self.clock = 0;
		}
	}

	fn change_action(&mut self, action: ActionId) {
		if action != self.current_action {
			self.current_action = action;
			self.clock = 0;
		}
	}

	fn draw_wait<R: RandomSource + ?Sized>(&self, rng: &mut R) -> u32 {
		self.config.wait_min + rng.next_int(self.config.wait_span.max(1))
	}

	#[inline]
	fn current(&self) -> &ActionNode {
		&self.graph[self.current_action]
	}

	fn radius(&self) -> f32 {
		self.config.radius * self.scale()
	}

	fn inset(&self) -> i32 {
		self.radius() as i32
	}

	/// Size multiplier derived from the last viewport seen.
	pub fn scale(&self) -> f32 {
		let extent = self.screen_bounds.width().min(self.screen_bounds.height());
		extent as f32 / self.config.scale_divisor
	}

	/// Returns `true` once the character has been placed on screen.
	#[inline]
	pub fn is_initialized(&self) -> bool {
		self.motion != MotionState::Uninitialized
	}

	/// Current motion state.
	#[inline]
	pub fn motion(&self) -> MotionState {
		self.motion
	}

	/// Current exit progress.
	#[inline]
	pub fn leaving_mode(&self) -> LeavingMode {
		self.leaving
	}

	/// Action being played, if the character has been placed.
	pub fn current_action(&self) -> Option<ActionId> {
		self.is_initialized().then_some(self.current_action)
	}

	/// Current position.
	#[inline]
	pub fn position(&self) -> Point {
		self.position
	}

	/// Current facing.
	#[inline]
	pub fn facing(&self) -> Facing {
		self.facing
	}

	/// Position of the animation clock inside the current cycle.
	#[inline]
	pub fn animation_clock(&self) -> u32 {
		self.clock
	}

	/// Cycle length of the timeline currently shown.
	pub fn cycle_length(&self) -> u32 {
		self.current().cycle_length(self.facing)
	}

	/// Destination being walked to, if any.
	#[inline]
	pub fn target(&self) -> Option<Point> {
		self.target
	}

	/// Remaining idle ticks.
	#[inline]
	pub fn wait_timer(&self) -> u32 {
		self.wait_timer
	}

	/// Last viewport passed to [`update`](Self::update).
	#[inline]
	pub fn screen_bounds(&self) -> Rect {
		self.screen_bounds
	}

	/// Whether the character's resources are in use.
	#[inline]
	pub fn resources_active(&self) -> bool {
		self.resources_active
	}

	/// The behaviour graph.
	pub fn graph(&self) -> &Arc<ActionGraph> {
		&self.graph
	}

	/// The tunables this character runs with.
	pub fn config(&self) -> &EngineConfig {
		&self.config
	}
}

impl fmt::Debug for CharacterState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CharacterState")
			.field("motion", &self.motion)
			.field("leaving", &self.leaving)
			.field("action", &self.current().name())
			.field("position", &self.position)
			.field("facing", &self.facing)
			.field("clock", &self.clock)
			.field("target", &self.target)
			.field("wait_timer", &self.wait_timer)
			.finish()
	}
}

impl fmt::Display for CharacterState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_initialized() {
			write!(f, "'{}' {} at {}", self.current().name(), self.motion, self.position)
		} else {
			write!(f, "{}", self.motion)
		}
	}
}
