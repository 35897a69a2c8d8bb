//! Engine tunables.
//!
//! Every constant that shapes character behaviour lives in [`EngineConfig`].
//! The defaults reproduce the classic wallpaper behaviour; drivers can layer
//! overrides from a file or the environment through serde.

use std::fmt::{self, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Viewport extent that maps to a scale factor of `1.0`.
pub const DEFAULT_SCALE_DIVISOR: f32 = 200.0;

/// Maximum number of characters on screen at once.
pub const DEFAULT_MAX_ACTIVE: usize = 4;

/// Behavioural constants for characters and flocks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
	/// Animation clock advance per tick, in timeline units
	pub animation_step: u32,

	/// Walking speed per tick, before scaling
	pub walk_speed: f32,

	/// Character radius used for hit testing, edge detection and target insets, before scaling
	pub radius: f32,

	/// `min(width, height) / scale_divisor` gives the scale factor
	pub scale_divisor: f32,

	/// Lower bound of the idle wait, in ticks
	pub wait_min: u32,

	/// Width of the idle wait range, in ticks; waits are drawn from `[wait_min, wait_min + wait_span)`
	pub wait_span: u32,

	/// A new target leaves the screen with probability `1 / leave_chance`
	pub leave_chance: u32,

	/// Number of candidates drawn when looking for a roughly horizontal target
	pub horizontal_attempts: u32,

	/// Maximum angle from the horizontal, in degrees, for a biased target
	pub horizontal_max_angle: f32,

	/// Size of the active set of a flock
	pub max_active: usize,

	/// Upward shift of a dragged sprite, before scaling
	pub drag_lift: f32,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			animation_step: 4,
			walk_speed: 3.0,
			radius: 30.0,
			scale_divisor: DEFAULT_SCALE_DIVISOR,
			wait_min: 25,
			wait_span: 250,
			leave_chance: 8,
			horizontal_attempts: 100,
			horizontal_max_angle: 30.0,
			max_active: DEFAULT_MAX_ACTIVE,
			drag_lift: 10.0,
		}
	}
}

impl EngineConfig {
	/// Checks that every setting keeps the engine's arithmetic in range.
	///
	/// Settings deserialized from files or the environment should pass through
	/// here before reaching a [`Flock`](crate::flock::Flock).
	///
	/// # Errors
	///
	/// Returns the first offending setting.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.animation_step == 0 {
			return Err(ConfigError::ZeroAnimationStep);
		}
		for (field, value) in [
			("walk_speed", self.walk_speed),
			("radius", self.radius),
			("scale_divisor", self.scale_divisor),
		] {
			if value.is_infinite() {
				return Err(ConfigError::NotFinite {
					field,
					value,
				});
			}
			if value.is_nan() || value <= 0.0 {
				return Err(ConfigError::NotPositive {
					field,
					value,
				});
			}
		}
		for (field, value) in [
			("horizontal_max_angle", self.horizontal_max_angle),
			("drag_lift", self.drag_lift),
		] {
			if !value.is_finite() {
				return Err(ConfigError::NotFinite {
					field,
					value,
				});
			}
		}
		if self.wait_min.checked_add(self.wait_span).is_none() {
			return Err(ConfigError::WaitOverflow {
				wait_min: self.wait_min,
				wait_span: self.wait_span,
			});
		}
		Ok(())
	}

	/// Maximum biased-target angle, in radians.
	pub fn horizontal_max_angle_radians(&self) -> f32 {
		self.horizontal_max_angle.to_radians()
	}
}

impl fmt::Display for EngineConfig {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		writeln!(f, "Engine config:")?;
		writeln!(f, "  Animation step: {}", self.animation_step)?;
		writeln!(f, "  Walk speed: {}", self.walk_speed)?;
		writeln!(f, "  Radius: {}", self.radius)?;
		writeln!(f, "  Scale divisor: {}", self.scale_divisor)?;
		writeln!(f, "  Wait: [{}, {})", self.wait_min, self.wait_min + self.wait_span)?;
		writeln!(f, "  Leave chance: 1/{}", self.leave_chance)?;
		writeln!(
			f,
			"  Horizontal bias: {} attempts, < {} deg",
			self.horizontal_attempts, self.horizontal_max_angle
		)?;
		writeln!(f, "  Max active: {}", self.max_active)?;
		writeln!(f, "  Drag lift: {}", self.drag_lift)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = EngineConfig::default();
		assert_eq!(config.animation_step, 4);
		assert_eq!(config.walk_speed, 3.0);
		assert_eq!(config.radius, 30.0);
		assert_eq!(config.wait_min, 25);
		assert_eq!(config.wait_min + config.wait_span, 275);
		assert_eq!(config.leave_chance, 8);
		assert_eq!(config.max_active, 4);
		assert!((config.horizontal_max_angle_radians() - std::f32::consts::FRAC_PI_6).abs() < 1e-6);
		assert_eq!(config.validate(), Ok(()));
	}

	#[test]
	fn test_validate_rejects_broken_settings() {
		let broken = |config: EngineConfig| config.validate().unwrap_err();

		assert_eq!(
			broken(EngineConfig {
				animation_step: 0,
				..EngineConfig::default()
			}),
			ConfigError::ZeroAnimationStep
		);
		assert_eq!(
			broken(EngineConfig {
				scale_divisor: 0.0,
				..EngineConfig::default()
			}),
			ConfigError::NotPositive {
				field: "scale_divisor",
				value: 0.0
			}
		);
		assert_eq!(
			broken(EngineConfig {
				radius: -30.0,
				..EngineConfig::default()
			}),
			ConfigError::NotPositive {
				field: "radius",
				value: -30.0
			}
		);
		assert_eq!(
			broken(EngineConfig {
				walk_speed: f32::INFINITY,
				..EngineConfig::default()
			}),
			ConfigError::NotFinite {
				field: "walk_speed",
				value: f32::INFINITY
			}
		);
		assert!(matches!(
			broken(EngineConfig {
				walk_speed: f32::NAN,
				..EngineConfig::default()
			}),
			ConfigError::NotPositive {
				field: "walk_speed",
				..
			}
		));
		assert!(matches!(
			broken(EngineConfig {
				drag_lift: f32::NAN,
				..EngineConfig::default()
			}),
			ConfigError::NotFinite {
				field: "drag_lift",
				..
			}
		));
		assert_eq!(
			broken(EngineConfig {
				wait_min: u32::MAX,
				..EngineConfig::default()
			}),
			ConfigError::WaitOverflow {
				wait_min: u32::MAX,
				wait_span: 250
			}
		);
	}
}
