//! Error types for timeline and action graph construction.

use thiserror::Error;

use crate::action::TransitionContext;

/// Errors that can occur when building or querying a [`Timeline`](crate::anim::Timeline)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
	/// A timeline needs at least one frame
	#[error("Timeline has no frame durations")]
	EmptyDurations,

	/// Every frame must be shown for at least one time unit
	#[error("Frame {index} has a zero duration")]
	ZeroDuration {
		/// Index of the offending frame
		index: usize,
	},

	/// The strip image cannot be split into the requested number of frames
	#[error("Sprite strip is {width} pixels wide, too narrow for {frames} frames")]
	SheetTooNarrow {
		/// Width of the strip in pixels
		width: u32,
		/// Number of frames requested
		frames: usize,
	},

	/// Frame durations add up to more than a cycle can hold
	#[error("Durations of {frames} frames add up to more than u32::MAX time units")]
	CycleTooLong {
		/// Number of frames in the timeline
		frames: usize,
	},

	/// Requested time lies outside `[0, cycle_length)`
	#[error("Time {time} is outside the animation cycle [0, {cycle_length})")]
	OutOfRange {
		/// Time that was requested
		time: i64,
		/// Total cycle length of the timeline
		cycle_length: u32,
	},
}

/// Errors that can occur when assembling an [`ActionGraph`](crate::action::ActionGraph)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
	/// Two actions were declared with the same name
	#[error("Action '{0}' is declared more than once")]
	DuplicateAction(String),

	/// A transition list or start set names an action that was never declared
	#[error("Unknown action '{name}' referenced from {referenced_from}")]
	UnknownAction {
		/// Name that failed to resolve
		name: String,
		/// Where the reference was made
		referenced_from: String,
	},

	/// An action was declared but its transitions were never wired
	#[error("Action '{0}' has no transitions")]
	MissingTransitions(String),

	/// A transition list is empty
	#[error("Action '{action}' has an empty {context} transition list")]
	EmptyTransitions {
		/// Name of the action
		action: String,
		/// Which list is empty
		context: TransitionContext,
	},

	/// The character has nothing to enter the screen with
	#[error("Character has no start actions")]
	NoStartActions,

	/// Timeline construction failed for an action
	#[error("Invalid timeline for action '{action}': {source}")]
	Timeline {
		/// Name of the action
		action: String,
		/// Underlying timeline error
		#[source]
		source: TimelineError,
	},
}

/// Errors reported by [`EngineConfig::validate`](crate::config::EngineConfig::validate)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
	/// The animation clock would never advance
	#[error("Animation step must be at least 1")]
	ZeroAnimationStep,

	/// A length or speed is zero, negative or NaN
	#[error("{field} must be positive, got {value}")]
	NotPositive {
		/// Name of the setting
		field: &'static str,
		/// Rejected value
		value: f32,
	},

	/// A setting is infinite or NaN
	#[error("{field} must be finite, got {value}")]
	NotFinite {
		/// Name of the setting
		field: &'static str,
		/// Rejected value
		value: f32,
	},

	/// The upper end of the idle wait does not fit in a `u32`
	#[error("Wait range {wait_min} + {wait_span} overflows")]
	WaitOverflow {
		/// Lower bound of the wait
		wait_min: u32,
		/// Width of the wait range
		wait_span: u32,
	},
}

/// Unified error type for the engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
	/// Engine settings error
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// Timeline error
	#[error(transparent)]
	Timeline(#[from] TimelineError),

	/// Action graph error
	#[error(transparent)]
	Graph(#[from] GraphError),
}
