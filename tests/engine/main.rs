//! Integration tests for `ponypaper-rs`

use std::sync::Arc;

use ponypaper_rs::prelude::*;

mod config;
mod draw;
mod flock;
mod scenario;

/// 1280x720: scale 3.6
pub(crate) const SCREEN: Rect = Rect::from_size(1280, 720);

/// A stand/trot pair with different left and right strips.
pub(crate) fn stand_and_trot() -> Arc<ActionGraph> {
	let stand = (
		Timeline::blank(60, 30, vec![5, 5, 5]).unwrap(),
		Timeline::blank(60, 30, vec![15]).unwrap(),
	);
	let trot = (
		Timeline::blank(160, 40, vec![3, 3, 3, 3]).unwrap(),
		Timeline::blank(160, 40, vec![4, 4, 4, 10]).unwrap(),
	);
	Arc::new(ActionGraph::stand_and_trot(stand, trot).unwrap())
}

/// Walk, stand, and a teleport-out/teleport-in pair reachable from standing.
pub(crate) fn teleporter() -> Arc<ActionGraph> {
	let strip = |durations: Vec<u32>| Timeline::blank(32 * durations.len() as u32, 32, durations).unwrap();
	Arc::new(
		ActionGraphBuilder::new()
			.action("walk", ActionKind::Normal, strip(vec![4, 4]), strip(vec![4, 4]))
			.action("stand", ActionKind::Normal, strip(vec![12]), strip(vec![12]))
			.action("vanish", ActionKind::TeleportOut, strip(vec![10, 10, 20]), strip(vec![40]))
			.action("appear", ActionKind::TeleportIn, strip(vec![8, 8]), strip(vec![16]))
			.transitions("walk", &["stand"], &["walk", "walk", "vanish"], &["walk"])
			.transitions("stand", &["stand", "stand"], &["walk", "vanish"], &["walk"])
			.transitions("vanish", &["stand"], &["appear"], &["walk"])
			.transitions("appear", &["stand"], &["walk"], &["walk"])
			.start_actions(&["walk", "vanish"])
			.build()
			.unwrap(),
	)
}
