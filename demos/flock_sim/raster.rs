//! Software rasterizer for draw lists.

use image::{Rgba, RgbaImage, imageops};
use ponypaper_rs::prelude::*;

/// Paints `list` onto a `width`x`height` canvas, back to front.
pub fn rasterize(list: &DrawList, width: u32, height: u32) -> RgbaImage {
	let mut canvas = RgbaImage::from_pixel(width, height, Rgba([24, 28, 40, 255]));

	for record in list {
		let Some(strip) = &record.strip else {
			continue;
		};
		let source = record.source;
		let frame = imageops::crop_imm(strip.as_ref(), source.x, source.y, source.width, source.height)
			.to_image();

		let destination = record.destination;
		let w = destination.width().round().max(1.0) as u32;
		let h = destination.height().round().max(1.0) as u32;
		let scaled = imageops::resize(&frame, w, h, imageops::FilterType::Nearest);
		imageops::overlay(
			&mut canvas,
			&scaled,
			destination.left.round() as i64,
			destination.top.round() as i64,
		);
	}

	canvas
}
