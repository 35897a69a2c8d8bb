//! Timeline: a sprite strip plus per-frame durations.

use std::{fmt, sync::Arc};

use image::RgbaImage;

use crate::{error::TimelineError, geom::FrameRect};

/// Decoded sprite strip shared between timelines and draw instructions.
pub type SpriteStrip = Arc<RgbaImage>;

/// An immutable animation strip with frame timings.
///
/// The strip holds `frame_count` equal-width frames side by side. Each frame
/// is shown for its duration; one full pass over all frames lasts
/// [`cycle_length`](Self::cycle_length) time units.
#[derive(Clone)]
pub struct Timeline {
	/// Decoded frames
	strip: SpriteStrip,

	/// Time each frame is visible
	durations: Vec<u32>,

	/// Sum of `durations`
	cycle_length: u32,

	/// Width of one frame in pixels
	frame_width: u32,
}

impl Timeline {
	/// Creates a timeline from a decoded strip and its frame durations.
	///
	/// # Errors
	///
	/// Returns an error if `durations` is empty, contains a zero, adds up to
	/// more than `u32::MAX`, or the strip is narrower than the number of frames.
	pub fn new(strip: SpriteStrip, durations: Vec<u32>) -> Result<Self, TimelineError> {
		if durations.is_empty() {
			return Err(TimelineError::EmptyDurations);
		}
		if let Some(index) = durations.iter().position(|&d| d == 0) {
			return Err(TimelineError::ZeroDuration {
				index,
			});
		}

		let frame_count = durations.len();
		let width = strip.width();
		let frame_width = width / u32::try_from(frame_count).unwrap_or(u32::MAX);
		if frame_width == 0 {
			return Err(TimelineError::SheetTooNarrow {
				width,
				frames: frame_count,
			});
		}

		let cycle_length = durations
			.iter()
			.try_fold(0u32, |total, &d| total.checked_add(d))
			.ok_or(TimelineError::CycleTooLong {
				frames: frame_count,
			})?;

		Ok(Self {
			strip,
			durations,
			cycle_length,
			frame_width,
		})
	}

	/// Creates a timeline backed by a transparent strip of the given size.
	///
	/// Useful where only timing matters, such as tests and benchmarks.
	pub fn blank(width: u32, height: u32, durations: Vec<u32>) -> Result<Self, TimelineError> {
		Self::new(Arc::new(RgbaImage::new(width, height)), durations)
	}

	/// Returns the index of the frame visible at `time`.
	///
	/// # Errors
	///
	/// Returns [`TimelineError::OutOfRange`] unless `0 <= time < cycle_length`.
	pub fn frame_at(&self, time: i64) -> Result<usize, TimelineError> {
		let out_of_range = TimelineError::OutOfRange {
			time,
			cycle_length: self.cycle_length,
		};
		if time < 0 {
			return Err(out_of_range);
		}

		let mut frame_end = 0i64;
		for (frame, &duration) in self.durations.iter().enumerate() {
			frame_end += i64::from(duration);
			if time < frame_end {
				return Ok(frame);
			}
		}

		Err(out_of_range)
	}

	/// Returns the source rectangle of `frame` inside the strip.
	///
	/// Indices past the last frame are clamped to it.
	pub fn frame_rect(&self, frame: usize) -> FrameRect {
		let frame = frame.min(self.frame_count() - 1) as u32;
		FrameRect {
			x: self.frame_width * frame,
			y: 0,
			width: self.frame_width,
			height: self.frame_height(),
		}
	}

	/// Returns the source rectangle visible at `time`.
	///
	/// # Errors
	///
	/// Same as [`frame_at`](Self::frame_at).
	pub fn source_rect_at(&self, time: i64) -> Result<FrameRect, TimelineError> {
		self.frame_at(time).map(|frame| self.frame_rect(frame))
	}

	/// Total time of one animation loop.
	#[inline]
	pub fn cycle_length(&self) -> u32 {
		self.cycle_length
	}

	/// Number of frames in the strip.
	#[inline]
	pub fn frame_count(&self) -> usize {
		self.durations.len()
	}

	/// Per-frame durations.
	#[inline]
	pub fn durations(&self) -> &[u32] {
		&self.durations
	}

	/// Width of a single frame in pixels.
	#[inline]
	pub fn frame_width(&self) -> u32 {
		self.frame_width
	}

	/// Height of a single frame in pixels.
	#[inline]
	pub fn frame_height(&self) -> u32 {
		self.strip.height()
	}

	/// The decoded strip.
	#[inline]
	pub fn strip(&self) -> &SpriteStrip {
		&self.strip
	}
}

impl fmt::Debug for Timeline {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Timeline")
			.field("strip", &format_args!("{}x{}", self.strip.width(), self.strip.height()))
			.field("durations", &self.durations)
			.field("cycle_length", &self.cycle_length)
			.finish()
	}
}

impl fmt::Display for Timeline {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Timeline({} frames of {}×{}, cycle {})",
			self.frame_count(),
			self.frame_width,
			self.frame_height(),
			self.cycle_length
		)
	}
}
