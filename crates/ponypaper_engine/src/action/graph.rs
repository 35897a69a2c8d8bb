//! Arena holding every action of one character.

use std::{collections::HashMap, fmt, ops::Index};

use crate::{
	anim::Timeline,
	error::GraphError,
	random::RandomSource,
};

use super::{
	builder::ActionGraphBuilder,
	node::{ActionId, ActionKind, ActionNode},
};

/// A validated behaviour graph.
///
/// Actions refer to each other by [`ActionId`], so cycles (an action that
/// waits into itself, two actions that alternate) need no shared ownership.
/// Every transition list is non-empty and the start set is non-empty; the
/// only way to obtain a graph is through [`ActionGraphBuilder`].
#[derive(Debug, Clone)]
pub struct ActionGraph {
	actions: Vec<ActionNode>,
	start_actions: Vec<ActionId>,
	names: HashMap<String, ActionId>,
}

impl ActionGraph {
	pub(crate) fn from_validated(actions: Vec<ActionNode>, start_actions: Vec<ActionId>) -> Self {
		let names = actions
			.iter()
			.enumerate()
			.map(|(i, action)| (action.name().to_string(), ActionId(i)))
			.collect();
		Self {
			actions,
			start_actions,
			names,
		}
	}

	/// Starts building a new graph.
	pub fn builder() -> ActionGraphBuilder {
		ActionGraphBuilder::new()
	}

	/// Builds the default two-action character.
	///
	/// Both actions wait into `stand`, and move or get dragged into `trot`.
	/// The character always enters the screen trotting.
	///
	/// # Errors
	///
	/// Propagates errors from [`ActionGraphBuilder::build`].
	pub fn stand_and_trot(
		stand: (Timeline, Timeline),
		trot: (Timeline, Timeline),
	) -> Result<Self, GraphError> {
		ActionGraphBuilder::new()
			.action("stand", ActionKind::Normal, stand.0, stand.1)
			.action("trot", ActionKind::Normal, trot.0, trot.1)
			.transitions("stand", &["stand"], &["trot"], &["trot"])
			.transitions("trot", &["stand"], &["trot"], &["trot"])
			.start_actions(&["trot"])
			.build()
	}

	/// Number of actions.
	#[inline]
	pub fn len(&self) -> usize {
		self.actions.len()
	}

	/// Returns `true` if the graph has no actions. Built graphs always have some.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.actions.is_empty()
	}

	/// Returns the action with the given id, if it belongs to this graph.
	pub fn get(&self, id: ActionId) -> Option<&ActionNode> {
		self.actions.get(id.0)
	}

	/// Looks up an action by name.
	pub fn find(&self, name: &str) -> Option<ActionId> {
		self.names.get(name).copied()
	}

	/// Actions a character may enter the screen with.
	pub fn start_actions(&self) -> &[ActionId] {
		&self.start_actions
	}

	/// Draws a start action uniformly from the start set.
	pub fn pick_start<R: RandomSource + ?Sized>(&self, rng: &mut R) -> ActionId {
		self.start_actions[rng.next_index(self.start_actions.len())]
	}

	/// Iterates over `(id, action)` pairs.
	pub fn iter(&self) -> impl Iterator<Item = (ActionId, &ActionNode)> {
		self.actions.iter().enumerate().map(|(i, action)| (ActionId(i), action))
	}
}

impl Index<ActionId> for ActionGraph {
	type Output = ActionNode;

	fn index(&self, id: ActionId) -> &Self::Output {
		&self.actions[id.0]
	}
}

impl fmt::Display for ActionGraph {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ActionGraph({} actions, {} start)", self.actions.len(), self.start_actions.len())
	}
}
