//! A single state of a character's behaviour graph.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{anim::Timeline, random::RandomSource};

/// Index of an action inside its [`ActionGraph`](super::ActionGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActionId(pub usize);

impl ActionId {
	/// Returns the arena index.
	#[inline]
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for ActionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// How an action behaves when its animation cycle completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
	/// Regular action; moving ones travel at walking speed
	#[default]
	Normal,
	/// Stays put for one cycle, then jumps to the target
	TeleportOut,
	/// Stays put for one cycle, then settles at the target
	TeleportIn,
}

impl fmt::Display for ActionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Normal => write!(f, "normal"),
			Self::TeleportOut => write!(f, "teleport-out"),
			Self::TeleportIn => write!(f, "teleport-in"),
		}
	}
}

/// Horizontal facing of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
	/// Towards negative x
	Left,
	/// Towards positive x
	Right,
}

impl fmt::Display for Facing {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Left => write!(f, "left"),
			Self::Right => write!(f, "right"),
		}
	}
}

/// Which transition list to draw the next action from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionContext {
	/// Character is about to stand still
	Waiting,
	/// Character is about to travel
	Moving,
	/// Character has just been picked up
	Drag,
}

impl TransitionContext {
	/// All contexts, in declaration order.
	pub const ALL: [Self; 3] = [Self::Waiting, Self::Moving, Self::Drag];
}

impl fmt::Display for TransitionContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Waiting => write!(f, "waiting"),
			Self::Moving => write!(f, "moving"),
			Self::Drag => write!(f, "drag"),
		}
	}
}

/// Transition lists of an action.
///
/// Repeating an id in a list makes it proportionally more likely to be picked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transitions {
	/// Follow-ups when the character stops
	pub waiting: Vec<ActionId>,
	/// Follow-ups when the character starts travelling
	pub moving: Vec<ActionId>,
	/// Follow-ups when the character is picked up
	pub drag: Vec<ActionId>,
}

impl Transitions {
	/// Returns the list for `context`.
	pub fn get(&self, context: TransitionContext) -> &[ActionId] {
		match context {
			TransitionContext::Waiting => &self.waiting,
			TransitionContext::Moving => &self.moving,
			TransitionContext::Drag => &self.drag,
		}
	}
}

/// One named state in a behaviour graph.
#[derive(Debug, Clone)]
pub struct ActionNode {
	name: String,
	kind: ActionKind,
	left: Timeline,
	right: Timeline,
	next: Transitions,
}

impl ActionNode {
	pub(crate) fn new(
		name: String,
		kind: ActionKind,
		left: Timeline,
		right: Timeline,
		next: Transitions,
	) -> Self {
		Self {
			name,
			kind,
			left,
			right,
			next,
		}
	}

	/// Name the action was declared with.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Behaviour on cycle completion.
	#[inline]
	pub fn kind(&self) -> ActionKind {
		self.kind
	}

	/// Timeline played while facing `facing`.
	#[inline]
	pub fn timeline(&self, facing: Facing) -> &Timeline {
		match facing {
			Facing::Left => &self.left,
			Facing::Right => &self.right,
		}
	}

	/// Cycle length of the timeline for `facing`.
	#[inline]
	pub fn cycle_length(&self, facing: Facing) -> u32 {
		self.timeline(facing).cycle_length()
	}

	/// Transition lists.
	pub fn transitions(&self) -> &Transitions {
		&self.next
	}

	/// Picks the follow-up action for `context` uniformly from its list.
	///
	/// # Panics
	///
	/// Panics if the list is empty. Graphs built through
	/// [`ActionGraphBuilder`](super::ActionGraphBuilder) never are.
	pub fn pick_next<R: RandomSource + ?Sized>(
		&self,
		context: TransitionContext,
		rng: &mut R,
	) -> ActionId {
		let options = self.next.get(context);
		assert!(!options.is_empty(), "action '{}' has no {} transitions", self.name, context);
		options[rng.next_index(options.len())]
	}
}

impl fmt::Display for ActionNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({})", self.name, self.kind)
	}
}
