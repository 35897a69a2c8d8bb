//! Benchmark suite for the per-tick engine cost
//!
//! Measures flock updates at typical roster sizes and viewports, plus the
//! timeline lookup that every draw performs.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ponypaper_benches::{synthetic_roster, viewports};
use ponypaper_engine::{
	anim::Timeline,
	config::EngineConfig,
	flock::{Flock, PointerEvent},
	geom::{Point, Rect},
	render::DrawList,
};
use rand::{SeedableRng, rngs::SmallRng};

/// One tick of a warmed-up flock, collecting into a fresh draw list
fn bench_flock_update(c: &mut Criterion) {
	let mut group = c.benchmark_group("flock_update");

	for roster in [1usize, 4, 16, 64] {
		let mut rng = SmallRng::seed_from_u64(roster as u64);
		let mut flock = Flock::new(synthetic_roster(roster), EngineConfig::default(), &mut rng);
		let screen = Rect::from_size(viewports::FULL_HD.0, viewports::FULL_HD.1);
		for _ in 0..500 {
			flock.update(screen, &mut rng);
		}

		group.throughput(Throughput::Elements(flock.active_len() as u64));
		group.bench_with_input(BenchmarkId::new("roster", roster), &screen, |b, &screen| {
			b.iter(|| black_box(flock.update(black_box(screen), &mut rng)));
		});
	}

	group.finish();
}

/// Streaming into a reused draw list instead of allocating one per tick
fn bench_flock_streaming(c: &mut Criterion) {
	let mut group = c.benchmark_group("flock_streaming");

	for (name, (width, height)) in
		[("phone", viewports::PHONE), ("full_hd", viewports::FULL_HD), ("uhd", viewports::UHD)]
	{
		let mut rng = SmallRng::seed_from_u64(11);
		let mut flock = Flock::new(synthetic_roster(8), EngineConfig::default(), &mut rng);
		let screen = Rect::from_size(width, height);
		let mut list = DrawList::new();

		group.bench_function(name, |b| {
			b.iter(|| {
				list.clear();
				flock.update_and_draw(screen, &mut rng, &mut list);
				black_box(list.len())
			});
		});
	}

	group.finish();
}

/// A full drag gesture followed by ticks while the character is held
fn bench_drag_gesture(c: &mut Criterion) {
	let mut group = c.benchmark_group("flock_drag");

	let mut rng = SmallRng::seed_from_u64(5);
	let mut flock = Flock::new(synthetic_roster(8), EngineConfig::default(), &mut rng);
	let screen = Rect::from_size(viewports::FULL_HD.0, viewports::FULL_HD.1);
	for _ in 0..200 {
		flock.update(screen, &mut rng);
	}

	group.bench_function("pick_move_drop", |b| {
		b.iter(|| {
			let at = flock.active().next().map_or(Point::new(0.0, 0.0), |pony| pony.position());
			flock.on_pointer_event(PointerEvent::down(0, at), &mut rng);
			for step in 0..10 {
				let to = Point::new(960.0 + step as f32 * 4.0, 540.0);
				flock.on_pointer_event(PointerEvent::moved(0, to), &mut rng);
				flock.update(screen, &mut rng);
			}
			flock.on_pointer_event(PointerEvent::up(0, at), &mut rng);
			black_box(flock.drag_grip())
		});
	});

	group.finish();
}

/// Frame lookup over a whole cycle
fn bench_frame_lookup(c: &mut Criterion) {
	let mut group = c.benchmark_group("timeline_frame_at");

	for frames in [4u32, 16, 64] {
		let durations: Vec<u32> = (0..frames).map(|i| 2 + i % 7).collect();
		let timeline = Timeline::blank(16 * frames, 16, durations).unwrap();
		let cycle = i64::from(timeline.cycle_length());

		group.throughput(Throughput::Elements(cycle as u64));
		group.bench_with_input(BenchmarkId::new("frames", frames), &timeline, |b, timeline| {
			b.iter(|| {
				let mut sum = 0usize;
				for time in 0..cycle {
					sum += timeline.frame_at(black_box(time)).unwrap();
				}
				black_box(sum)
			});
		});
	}

	group.finish();
}

criterion_group!(
	benches,
	bench_flock_update,
	bench_flock_streaming,
	bench_drag_gesture,
	bench_frame_lookup,
);

criterion_main!(benches);
