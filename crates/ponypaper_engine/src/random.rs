//! The random source threaded through every stochastic engine operation.
//!
//! Nothing in the engine owns a generator. Callers pass one in, so a seeded
//! [`SmallRng`](rand::rngs::SmallRng) reproduces a whole simulation run.

use rand::Rng;

/// Minimal random interface the engine draws from.
pub trait RandomSource {
	/// Returns a uniformly distributed boolean.
	fn next_bool(&mut self) -> bool;

	/// Returns a uniformly distributed integer in `[0, bound)`.
	///
	/// # Panics
	///
	/// Panics if `bound` is zero.
	fn next_int(&mut self, bound: u32) -> u32;

	/// Returns a uniformly distributed index into a collection of `len` items.
	fn next_index(&mut self, len: usize) -> usize {
		let bound = u32::try_from(len).unwrap_or(u32::MAX);
		self.next_int(bound) as usize
	}
}

impl<R: Rng + ?Sized> RandomSource for R {
	fn next_bool(&mut self) -> bool {
		self.random_bool(0.5)
	}

	fn next_int(&mut self, bound: u32) -> u32 {
		assert!(bound > 0, "next_int bound must be positive");
		self.random_range(0..bound)
	}
}
