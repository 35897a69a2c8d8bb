use ponypaper_rs::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};

/// Checks every command against the timeline it points into.
#[derive(Default)]
struct CheckingRenderer {
	drawn: usize,
	last_y: f32,
}

impl Renderer for CheckingRenderer {
	fn draw(&mut self, command: DrawCommand<'_>) {
		assert!(command.frame < command.timeline.frame_count());
		assert_eq!(command.source, command.timeline.frame_rect(command.frame));
		assert_eq!(command.source.width, command.timeline.frame_width());
		assert_eq!(command.source.height, command.timeline.frame_height());

		let scale = 720.0 / 200.0;
		let width = command.destination.width();
		assert!((width - command.source.width as f32 * scale).abs() < 1e-3);

		// Back to front, ignoring the lift of a held character.
		let bottom = command.destination.bottom;
		if self.drawn > 0 {
			assert!(bottom + 100.0 >= self.last_y);
		}
		self.last_y = bottom;
		self.drawn += 1;
	}
}

#[test]
fn test_commands_match_timelines() {
	let mut rng = SmallRng::seed_from_u64(21);
	let roster = vec![crate::stand_and_trot(), crate::teleporter(), crate::teleporter()];
	let mut flock = Flock::new(roster, EngineConfig::default(), &mut rng);

	for _ in 0..1000 {
		let mut renderer = CheckingRenderer::default();
		flock.update_and_draw(crate::SCREEN, &mut rng, &mut renderer);
		assert_eq!(renderer.drawn, 3);
	}
}

#[test]
fn test_draw_list_serializes_without_pixels() {
	let mut rng = SmallRng::seed_from_u64(22);
	let mut flock = Flock::new(vec![crate::stand_and_trot()], EngineConfig::default(), &mut rng);
	let list = flock.update(crate::SCREEN, &mut rng);
	assert!(list.records()[0].strip.is_some());

	let json = serde_json::to_value(list.records()).unwrap();
	let record = &json[0];
	assert!(record.get("strip").is_none());
	assert!(record["action"].is_u64());
	assert!(matches!(record["facing"].as_str(), Some("left" | "right")));
	assert_eq!(record["frame"], 0);
	assert_eq!(record["source"]["x"], 0);
	assert!(record["destination"]["left"].is_f64());

	let back: Vec<DrawRecord> = serde_json::from_value(json).unwrap();
	assert_eq!(back.len(), 1);
	assert_eq!(back[0].destination, list.records()[0].destination);
	assert!(back[0].strip.is_none());
}
