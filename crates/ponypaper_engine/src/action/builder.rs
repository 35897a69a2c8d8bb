//! Name-based construction and validation of [`ActionGraph`]s.

use std::collections::{HashMap, HashSet};

use crate::{
	anim::{SpriteStrip, Timeline},
	error::{GraphError, TimelineError},
};

use super::{
	graph::ActionGraph,
	node::{ActionId, ActionKind, ActionNode, TransitionContext, Transitions},
};

#[derive(Debug)]
struct DeclaredAction {
	name: String,
	kind: ActionKind,
	timelines: Result<(Timeline, Timeline), TimelineError>,
}

#[derive(Debug, Default)]
struct DeclaredTransitions {
	waiting: Vec<String>,
	moving: Vec<String>,
	drag: Vec<String>,
}

impl DeclaredTransitions {
	fn get(&self, context: TransitionContext) -> &[String] {
		match context {
			TransitionContext::Waiting => &self.waiting,
			TransitionContext::Moving => &self.moving,
			TransitionContext::Drag => &self.drag,
		}
	}
}

/// Builder that resolves action names into arena indices.
///
/// Everything is checked in [`build`](Self::build), which reports the first
/// problem found.
///
/// # Examples
///
/// ```
/// use ponypaper_engine::action::{ActionGraphBuilder, ActionKind};
/// use ponypaper_engine::anim::Timeline;
///
/// let strip = || Timeline::blank(32, 32, vec![10]).unwrap();
/// let graph = ActionGraphBuilder::new()
/// 	.action("stand", ActionKind::Normal, strip(), strip())
/// 	.action("trot", ActionKind::Normal, strip(), strip())
/// 	.transitions("stand", &["stand"], &["trot"], &["trot"])
/// 	.transitions("trot", &["stand"], &["trot", "trot"], &["trot"])
/// 	.start_actions(&["trot"])
/// 	.build()
/// 	.unwrap();
///
/// assert_eq!(graph.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ActionGraphBuilder {
	actions: Vec<DeclaredAction>,
	transitions: HashMap<String, DeclaredTransitions>,
	start_actions: Vec<String>,
}

impl ActionGraphBuilder {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Declares an action with ready-made timelines.
	pub fn action(
		mut self,
		name: impl Into<String>,
		kind: ActionKind,
		left: Timeline,
		right: Timeline,
	) -> Self {
		self.actions.push(DeclaredAction {
			name: name.into(),
			kind,
			timelines: Ok((left, right)),
		});
		self
	}

	/// Declares an action from decoded strips and their frame durations.
	///
	/// Timeline errors are reported by [`build`](Self::build) together with the
	/// action name.
	pub fn action_from_strips(
		mut self,
		name: impl Into<String>,
		kind: ActionKind,
		left: (SpriteStrip, Vec<u32>),
		right: (SpriteStrip, Vec<u32>),
	) -> Self {
		let timelines = Timeline::new(left.0, left.1)
			.and_then(|l| Timeline::new(right.0, right.1).map(|r| (l, r)));
		self.actions.push(DeclaredAction {
			name: name.into(),
			kind,
			timelines,
		});
		self
	}

	/// Sets the three transition lists of `name`.
	///
	/// Declaring transitions twice for the same action replaces the earlier lists.
	pub fn transitions(
		mut self,
		name: impl Into<String>,
		waiting: &[&str],
		moving: &[&str],
		drag: &[&str],
	) -> Self {
		let to_owned = |names: &[&str]| names.iter().map(|s| (*s).to_string()).collect();
		self.transitions.insert(
			name.into(),
			DeclaredTransitions {
				waiting: to_owned(waiting),
				moving: to_owned(moving),
				drag: to_owned(drag),
			},
		);
		self
	}

	/// Sets the actions a character may enter the screen with.
	pub fn start_actions(mut self, names: &[&str]) -> Self {
		self.start_actions = names.iter().map(|s| (*s).to_string()).collect();
		self
	}

	/// Validates the declarations and produces the graph.
	///
	/// # Errors
	///
	/// Returns a [`GraphError`] for duplicate names, unknown references,
	/// actions without transitions, empty transition lists, an empty start
	/// set, or invalid timelines.
	pub fn build(self) -> Result<ActionGraph, GraphError> {
		let mut seen = HashSet::new();
		for action in &self.actions {
			if !seen.insert(action.name.as_str()) {
				return Err(GraphError::DuplicateAction(action.name.clone()));
			}
		}

		let ids: HashMap<&str, ActionId> = self
			.actions
			.iter()
			.enumerate()
			.map(|(i, action)| (action.name.as_str(), ActionId(i)))
			.collect();

		let resolve = |name: &str, referenced_from: &dyn Fn() -> String| {
			ids.get(name).copied().ok_or_else(|| GraphError::UnknownAction {
				name: name.to_string(),
				referenced_from: referenced_from(),
			})
		};

		let mut nodes = Vec::with_capacity(self.actions.len());
		for action in &self.actions {
			let (left, right) = action.timelines.clone().map_err(|source| GraphError::Timeline {
				action: action.name.clone(),
				source,
			})?;

			let Some(declared) = self.transitions.get(&action.name) else {
				return Err(GraphError::MissingTransitions(action.name.clone()));
			};

			let mut next = Transitions::default();
			for context in TransitionContext::ALL {
				let names = declared.get(context);
				if names.is_empty() {
					return Err(GraphError::EmptyTransitions {
						action: action.name.clone(),
						context,
					});
				}
				let resolved = names
					.iter()
					.map(|n| resolve(n, &|| format!("{} transitions of '{}'", context, action.name)))
					.collect::<Result<Vec<_>, _>>()?;
				match context {
					TransitionContext::Waiting => next.waiting = resolved,
					TransitionContext::Moving => next.moving = resolved,
					TransitionContext::Drag => next.drag = resolved,
				}
			}

			nodes.push(ActionNode::new(action.name.clone(), action.kind, left, right, next));
		}

		if let Some(orphan) = self.transitions.keys().find(|name| !ids.contains_key(name.as_str()))
		{
			return Err(GraphError::UnknownAction {
				name: orphan.clone(),
				referenced_from: "a transition declaration".to_string(),
			});
		}

		if self.start_actions.is_empty() {
			return Err(GraphError::NoStartActions);
		}
		let start_actions = self
			.start_actions
			.iter()
			.map(|n| resolve(n, &|| "start actions".to_string()))
			.collect::<Result<Vec<_>, _>>()?;

		log::debug!("Built action graph with {} actions", nodes.len());
		Ok(ActionGraph::from_validated(nodes, start_actions))
	}
}
