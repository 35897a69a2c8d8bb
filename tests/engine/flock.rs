use std::collections::BTreeSet;

use ponypaper_rs::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};

fn held(flock: &Flock) -> usize {
	flock.members().iter().filter(|pony| pony.motion() == MotionState::Dragged).count()
}

#[test_log::test]
fn test_restless_flock_rotates() {
	let mut rng = SmallRng::seed_from_u64(31);
	let config = EngineConfig {
		leave_chance: 1,
		..EngineConfig::default()
	};
	let roster = vec![crate::stand_and_trot(); 3]
		.into_iter()
		.chain(vec![crate::teleporter(); 3])
		.collect::<Vec<_>>();
	let mut flock = Flock::new(roster, config, &mut rng);

	let mut seen = BTreeSet::new();
	for _ in 0..5000 {
		flock.update(crate::SCREEN, &mut rng);
		assert_eq!(flock.active_len(), 4);
		assert_eq!(flock.pool_len(), 2);
		seen.extend(flock.active_indices().iter().copied());
	}
	assert!(seen.len() > 4, "nobody rotated in: {seen:?}");
}

#[test_log::test]
fn test_single_drag_under_pointer_storm() {
	let mut rng = SmallRng::seed_from_u64(32);
	let roster = vec![crate::teleporter(); 5];
	let mut flock = Flock::new(roster, EngineConfig::default(), &mut rng);
	let kinds = [
		PointerEventKind::Down,
		PointerEventKind::Move,
		PointerEventKind::Move,
		PointerEventKind::Up,
		PointerEventKind::Cancel,
		PointerEventKind::SecondaryUp,
	];

	for tick in 0..3000 {
		flock.update(crate::SCREEN, &mut rng);
		for _ in 0..rng.next_int(3) {
			let target = flock.active().nth(rng.next_index(4)).map(CharacterState::position);
			let position = target.unwrap_or_else(|| {
				Point::new(rng.next_int(1280) as f32, rng.next_int(720) as f32)
			});
			let kind = kinds[rng.next_index(kinds.len())];
			flock.on_pointer_event(PointerEvent::new(kind, rng.next_int(3), position), &mut rng);
		}
		assert!(held(&flock) <= 1, "tick {tick}:\n{flock}");
		assert_eq!(flock.active_len(), 4);
	}
}

#[test]
fn test_seeded_flocks_agree() {
	let run = |seed| {
		let mut rng = SmallRng::seed_from_u64(seed);
		let mut flock = Flock::new(vec![crate::teleporter(); 6], EngineConfig::default(), &mut rng);
		let mut trail = Vec::new();
		for tick in 0..800 {
			if tick == 300 {
				let at = flock.active().next().map(CharacterState::position).unwrap();
				flock.on_pointer_event(PointerEvent::down(0, at), &mut rng);
			}
			if tick == 320 {
				flock.on_pointer_event(PointerEvent::up(0, Point::new(5.0, 300.0)), &mut rng);
			}
			let list = flock.update(crate::SCREEN, &mut rng);
			trail.extend(list.iter().map(|record| (record.action, record.destination)));
		}
		trail
	};

	assert_eq!(run(7), run(7));
}
