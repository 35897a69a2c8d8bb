//! Synthetic characters with solid-colour sprite strips.

use std::sync::Arc;

use image::{Rgba, RgbaImage};
use ponypaper_rs::prelude::*;

const PALETTE: [[u8; 3]; 6] = [
	[233, 120, 190],
	[120, 180, 240],
	[250, 210, 90],
	[150, 220, 130],
	[190, 140, 230],
	[240, 150, 100],
];

/// A strip of `frames` frames, each with a dark bar whose height grows with the
/// frame index, so the animation is visible in snapshots.
fn strip(color: [u8; 3], frames: u32, size: u32, facing: Facing) -> SpriteStrip {
	let mut image = RgbaImage::new(size * frames, size);
	for (x, y, pixel) in image.enumerate_pixels_mut() {
		let frame = x / size;
		let local_x = x % size;
		let bar = size * (frame + 1) / (frames + 1);
		let nose = match facing {
			Facing::Left => local_x < size / 4,
			Facing::Right => local_x >= size - size / 4,
		};
		*pixel = if y >= size - bar && nose {
			Rgba([40, 40, 40, 255])
		} else {
			Rgba([color[0], color[1], color[2], 255])
		};
	}
	Arc::new(image)
}

fn strips(color: [u8; 3], durations: &[u32]) -> ((SpriteStrip, Vec<u32>), (SpriteStrip, Vec<u32>)) {
	let frames = durations.len() as u32;
	(
		(strip(color, frames, 24, Facing::Left), durations.to_vec()),
		(strip(color, frames, 24, Facing::Right), durations.to_vec()),
	)
}

/// Builds the behaviour graph of the `index`th roster character.
///
/// Every third character knows how to teleport.
pub fn character(index: usize) -> Result<ActionGraph, EngineError> {
	let color = PALETTE[index % PALETTE.len()];
	let (stand_l, stand_r) = strips(color, &[12, 4]);
	let (trot_l, trot_r) = strips(color, &[4, 4, 4, 4]);

	let builder = ActionGraphBuilder::new()
		.action_from_strips("stand", ActionKind::Normal, stand_l, stand_r)
		.action_from_strips("trot", ActionKind::Normal, trot_l, trot_r);

	let graph = if index % 3 == 2 {
		let (out_l, out_r) = strips(color, &[8, 8, 8, 16]);
		let (in_l, in_r) = strips(color, &[16, 8, 8]);
		builder
			.action_from_strips("vanish", ActionKind::TeleportOut, out_l, out_r)
			.action_from_strips("appear", ActionKind::TeleportIn, in_l, in_r)
			.transitions("stand", &["stand"], &["trot", "trot", "vanish"], &["trot"])
			.transitions("trot", &["stand"], &["trot"], &["trot"])
			.transitions("vanish", &["stand"], &["appear"], &["trot"])
			.transitions("appear", &["stand"], &["trot"], &["trot"])
			.start_actions(&["trot", "vanish"])
			.build()?
	} else {
		builder
			.transitions("stand", &["stand"], &["trot"], &["trot"])
			.transitions("trot", &["stand"], &["trot"], &["trot"])
			.start_actions(&["trot"])
			.build()?
	};
	Ok(graph)
}

/// Builds `count` characters.
pub fn roster(count: usize) -> Result<Vec<Arc<ActionGraph>>, EngineError> {
	(0..count).map(|index| character(index).map(Arc::new)).collect()
}
