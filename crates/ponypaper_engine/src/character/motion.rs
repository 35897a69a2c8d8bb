//! Motion and exit bookkeeping states.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::ActionKind;

/// What a character is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionState {
	/// Not yet placed on screen
	#[default]
	Uninitialized,
	/// Standing still until the wait timer runs out
	Waiting,
	/// Travelling towards the target at walking speed
	Moving,
	/// Held by the pointer
	Dragged,
	/// Playing out a teleport cycle in place
	Special,
}

impl MotionState {
	/// Travel state used for a freshly chosen action of the given kind.
	pub fn travelling(kind: ActionKind) -> Self {
		match kind {
			ActionKind::Normal => Self::Moving,
			ActionKind::TeleportOut | ActionKind::TeleportIn => Self::Special,
		}
	}
}

impl fmt::Display for MotionState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Uninitialized => write!(f, "uninitialized"),
			Self::Waiting => write!(f, "waiting"),
			Self::Moving => write!(f, "moving"),
			Self::Dragged => write!(f, "dragged"),
			Self::Special => write!(f, "special"),
		}
	}
}

/// Progress of a character leaving the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeavingMode {
	/// Staying on screen
	#[default]
	Normal,
	/// Heading for an off-screen target
	Exiting,
	/// Reached the off-screen target; ready to be swapped out
	Exited,
}

impl fmt::Display for LeavingMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Normal => write!(f, "normal"),
			Self::Exiting => write!(f, "exiting"),
			Self::Exited => write!(f, "exited"),
		}
	}
}
