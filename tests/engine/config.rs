use ponypaper_rs::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};

#[test]
fn test_partial_config_keeps_defaults() {
	let config: EngineConfig =
		serde_json::from_str(r#"{ "walk_speed": 5.0, "max_active": 2 }"#).unwrap();

	assert_eq!(config.walk_speed, 5.0);
	assert_eq!(config.max_active, 2);
	assert_eq!(config.animation_step, 4);
	assert_eq!(config.radius, 30.0);
	assert_eq!(config.wait_min, 25);
	assert_eq!(config.wait_span, 250);
	assert_eq!(config.leave_chance, 8);
}

#[test]
fn test_config_round_trip_through_json() {
	let config = EngineConfig {
		drag_lift: 0.0,
		horizontal_max_angle: 45.0,
		..EngineConfig::default()
	};
	let json = serde_json::to_string(&config).unwrap();
	let back: EngineConfig = serde_json::from_str(&json).unwrap();
	assert_eq!(back, config);
}

#[test]
fn test_config_crate_layering() {
	let config: EngineConfig = ::config::Config::builder()
		.add_source(::config::File::from_str(
			"walk_speed = 6.0\nleave_chance = 2\n",
			::config::FileFormat::Toml,
		))
		.build()
		.unwrap()
		.try_deserialize()
		.unwrap();

	assert_eq!(config.walk_speed, 6.0);
	assert_eq!(config.leave_chance, 2);
	assert_eq!(config.max_active, 4);
}

#[test]
fn test_layered_settings_are_validated() {
	let config: EngineConfig = ::config::Config::builder()
		.add_source(::config::File::from_str("scale_divisor = 0.0\n", ::config::FileFormat::Toml))
		.build()
		.unwrap()
		.try_deserialize()
		.unwrap();

	assert_eq!(
		config.validate().unwrap_err(),
		ConfigError::NotPositive {
			field: "scale_divisor",
			value: 0.0
		}
	);

	let mut rng = SmallRng::seed_from_u64(2);
	let err = Flock::try_new(vec![crate::stand_and_trot(); 2], config, &mut rng).unwrap_err();
	assert!(matches!(err, EngineError::Config(_)));
}

#[test]
fn test_max_active_caps_the_flock() {
	let mut rng = SmallRng::seed_from_u64(1);
	let config = EngineConfig {
		max_active: 2,
		..EngineConfig::default()
	};
	let roster = vec![crate::stand_and_trot(); 6];
	let mut flock = Flock::new(roster, config, &mut rng);
	for _ in 0..200 {
		assert_eq!(flock.update(crate::SCREEN, &mut rng).len(), 2);
	}
	assert_eq!(flock.pool_len(), 4);
}
