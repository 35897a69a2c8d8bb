use ponypaper_rs::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};

#[test_log::test]
fn test_stand_and_trot_stays_in_view() {
	let mut rng = SmallRng::seed_from_u64(2000);
	let mut pony = CharacterState::new(crate::stand_and_trot(), EngineConfig::default(), &mut rng);
	let margin = 30.0 * 720.0 / 200.0;

	for tick in 0..2000 {
		pony.update(crate::SCREEN, &mut rng);
		let p = pony.position();
		if pony.leaving_mode() != LeavingMode::Exiting {
			assert!(crate::SCREEN.contains_with_margin(p, margin + 1e-3), "tick {tick}: {p}");
		}
		assert!(pony.animation_clock() < pony.cycle_length());
	}
}

#[test]
fn test_clock_stays_in_cycle_for_many_seeds() {
	for seed in 0..16 {
		let mut rng = SmallRng::seed_from_u64(seed);
		let mut pony = CharacterState::new(crate::teleporter(), EngineConfig::default(), &mut rng);
		for _ in 0..1500 {
			pony.update(crate::SCREEN, &mut rng);
			assert!(pony.animation_clock() < pony.cycle_length(), "seed {seed}: {pony:?}");
			if pony.gone_off_screen() {
				pony.reset();
			}
		}
	}
}

#[test]
fn test_teleports_never_pass_through() {
	let graph = crate::teleporter();
	let vanish = graph.find("vanish").unwrap();
	let mut snaps = 0;

	for seed in 0..8 {
		let mut rng = SmallRng::seed_from_u64(seed);
		let mut pony = CharacterState::new(graph.clone(), EngineConfig::default(), &mut rng);
		pony.update(crate::SCREEN, &mut rng);

		for _ in 0..3000 {
			let teleporting =
				pony.current_action() == Some(vanish) && pony.motion() == MotionState::Special;
			let (before, target) = (pony.position(), pony.target());
			pony.update(crate::SCREEN, &mut rng);

			if teleporting {
				if pony.current_action() == Some(vanish) {
					assert_eq!(pony.position(), before);
				} else {
					assert_eq!(Some(pony.position()), target);
					snaps += 1;
				}
			}
			if pony.gone_off_screen() {
				pony.reset();
				pony.update(crate::SCREEN, &mut rng);
			}
		}
	}

	assert!(snaps > 0);
}

#[test]
fn test_drop_near_left_edge_leaves_left() {
	let mut rng = SmallRng::seed_from_u64(3);
	let mut pony = CharacterState::new(crate::stand_and_trot(), EngineConfig::default(), &mut rng);
	pony.update(crate::SCREEN, &mut rng);

	pony.start_drag(&mut rng);
	assert_eq!(pony.target(), None);
	assert_eq!(pony.motion(), MotionState::Dragged);

	pony.move_to(Point::new(20.0, 400.0));
	pony.stop_drag(&mut rng);
	assert_eq!(pony.leaving_mode(), LeavingMode::Exiting);
	let target = pony.target().unwrap();
	assert!(target.x < 0.0);
	assert_eq!(target.y, 400.0);
}
