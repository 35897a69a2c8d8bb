//! Benchmark helper utilities for ponypaper-rs
//!
//! This module provides synthetic behaviour graphs and rosters so the
//! benchmarks do not depend on any sprite assets.

use std::sync::Arc;

use ponypaper_engine::{
	action::{ActionGraph, ActionGraphBuilder, ActionKind},
	anim::Timeline,
};

/// Builds a behaviour graph with `walks` walking actions, `idles` idle actions
/// and, if `teleport` is set, a teleport-out/teleport-in pair.
///
/// Frame durations vary per action so cycle wrap-around is exercised.
///
/// # Panics
///
/// Panics if `walks` or `idles` is zero.
pub fn synthetic_graph(walks: usize, idles: usize, teleport: bool) -> ActionGraph {
	assert!(walks > 0 && idles > 0, "need at least one walking and one idle action");

	let timeline = |seed: usize| {
		let frames = 2 + seed % 4;
		let durations = (0..frames).map(|i| 3 + ((seed + i) % 5) as u32).collect();
		Timeline::blank(32 * frames as u32, 32, durations).expect("synthetic durations are positive")
	};

	let walk_names: Vec<String> = (0..walks).map(|i| format!("walk{i}")).collect();
	let idle_names: Vec<String> = (0..idles).map(|i| format!("idle{i}")).collect();
	let walk_refs: Vec<&str> = walk_names.iter().map(String::as_str).collect();
	let idle_refs: Vec<&str> = idle_names.iter().map(String::as_str).collect();

	let mut moving = walk_refs.clone();
	if teleport {
		moving.push("port_out");
	}

	let mut builder = ActionGraphBuilder::new();
	for (i, name) in walk_names.iter().chain(&idle_names).enumerate() {
		builder = builder
			.action(name, ActionKind::Normal, timeline(i), timeline(i + 1))
			.transitions(name, &idle_refs, &moving, &idle_refs[..1]);
	}
	if teleport {
		builder = builder
			.action("port_out", ActionKind::TeleportOut, timeline(7), timeline(7))
			.action("port_in", ActionKind::TeleportIn, timeline(9), timeline(9))
			.transitions("port_out", &idle_refs, &["port_in"], &idle_refs[..1])
			.transitions("port_in", &idle_refs, &walk_refs, &idle_refs[..1]);
	}

	builder.start_actions(&walk_refs).build().expect("synthetic graph is well formed")
}

/// A roster of `count` characters sharing one synthetic graph.
pub fn synthetic_roster(count: usize) -> Vec<Arc<ActionGraph>> {
	let graph = Arc::new(synthetic_graph(4, 3, true));
	(0..count).map(|_| Arc::clone(&graph)).collect()
}

/// Common viewport sizes
pub mod viewports {
	/// Phone in portrait: 720x1280
	pub const PHONE: (i32, i32) = (720, 1280);
	/// Full HD desktop: 1920x1080
	pub const FULL_HD: (i32, i32) = (1920, 1080);
	/// 4K desktop: 3840x2160
	pub const UHD: (i32, i32) = (3840, 2160);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_synthetic_graph() {
		let graph = synthetic_graph(4, 3, true);
		assert_eq!(graph.len(), 9);
		assert_eq!(graph.start_actions().len(), 4);
		assert!(graph.find("port_in").is_some());

		let plain = synthetic_graph(1, 1, false);
		assert_eq!(plain.len(), 2);
		assert!(plain.find("port_out").is_none());
	}

	#[test]
	fn test_synthetic_roster_shares_graph() {
		let roster = synthetic_roster(5);
		assert_eq!(roster.len(), 5);
		assert!(Arc::ptr_eq(&roster[0], &roster[4]));
	}
}
