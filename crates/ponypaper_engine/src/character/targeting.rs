//! Random destination picking.

use crate::{
	geom::{Point, Rect},
	random::RandomSource,
};

/// Picks a point inside `bounds`, at least `inset` away from every edge.
pub(crate) fn on_screen<R: RandomSource + ?Sized>(bounds: Rect, inset: i32, rng: &mut R) -> Point {
	let x = bounds.left + inset + span(rng, bounds.width() - 2 * inset);
	let y = bounds.top + inset + span(rng, bounds.height() - 2 * inset);
	Point::new(x as f32, y as f32)
}

/// Picks a point `inset` past the left or right edge, at a random height.
pub(crate) fn off_screen<R: RandomSource + ?Sized>(bounds: Rect, inset: i32, rng: &mut R) -> Point {
	let x = if rng.next_bool() {
		bounds.left - inset
	} else {
		bounds.right + inset
	};
	let y = bounds.top + inset + span(rng, bounds.height() - 2 * inset);
	Point::new(x as f32, y as f32)
}

/// Draws up to `attempts` candidates from `pick` and returns the first one
/// lying within `max_angle` radians of the horizontal through `from`.
///
/// Vertical candidates never qualify. When nothing qualifies the last
/// candidate is returned anyway.
pub(crate) fn horizontally_biased<R, F>(
	from: Point,
	attempts: u32,
	max_angle: f32,
	rng: &mut R,
	mut pick: F,
) -> Point
where
	R: RandomSource + ?Sized,
	F: FnMut(&mut R) -> Point,
{
	let mut candidate = pick(rng);
	for _ in 1..attempts.max(1) {
		if is_roughly_horizontal(from, candidate, max_angle) {
			break;
		}
		candidate = pick(rng);
	}
	candidate
}

fn is_roughly_horizontal(from: Point, to: Point, max_angle: f32) -> bool {
	let dx = (to.x - from.x).abs();
	let dy = (to.y - from.y).abs();
	dx != 0.0 && (dy / dx).atan() < max_angle
}

/// Uniform offset in `[0, extent)`, or `0` for degenerate extents.
fn span<R: RandomSource + ?Sized>(rng: &mut R, extent: i32) -> i32 {
	match u32::try_from(extent) {
		Ok(extent) if extent > 0 => rng.next_int(extent) as i32,
		_ => 0,
	}
}
