//! Headless flock simulator
//!
//! Runs a synthetic roster through the engine, logging every rotation, and
//! optionally dumps the final frame as JSON draw records or a PNG snapshot.
//!
//! # Usage
//!
//! ```bash
//! # 1000 ticks of 8 characters, reproducible
//! cargo run --example flock_sim -- --roster 8 --ticks 1000 --seed 42
//!
//! # Tweak the engine from a TOML file and the environment
//! PONYPAPER_WALK_SPEED=5 cargo run --example flock_sim -- --config ponypaper.toml
//!
//! # Pick a character up, carry it to the left edge and watch it leave
//! RUST_LOG=debug cargo run --example flock_sim -- --drag --png frame.png
//! ```

mod raster;
mod roster;

use std::{
	fs::File,
	io::BufWriter,
	path::PathBuf,
	thread,
	time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use ponypaper_rs::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};

/// Fixed tick interval of a live wallpaper.
const TICK: Duration = Duration::from_millis(40);

#[derive(Parser)]
#[command(name = "flock_sim")]
#[command(author = "ponypaper-rs project")]
#[command(version)]
#[command(about = "Run a synthetic flock headlessly and dump what it draws", long_about = None)]
struct Cli {
	/// Number of characters in the roster
	#[arg(short, long, default_value_t = 6)]
	roster: usize,

	/// Number of ticks to simulate
	#[arg(short, long, default_value_t = 500)]
	ticks: u32,

	/// Random seed; a fresh one is drawn when omitted
	#[arg(short, long)]
	seed: Option<u64>,

	/// Viewport width in pixels
	#[arg(long, default_value_t = 1280)]
	width: u32,

	/// Viewport height in pixels
	#[arg(long, default_value_t = 720)]
	height: u32,

	/// TOML file with engine settings, overridable through `PONYPAPER_*` variables
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Write the final draw list as JSON
	#[arg(long, value_name = "FILE")]
	json: Option<PathBuf>,

	/// Write the final frame as PNG
	#[arg(long, value_name = "FILE")]
	png: Option<PathBuf>,

	/// Drag the front-most character to the left edge a third of the way through
	#[arg(long, default_value_t = false)]
	drag: bool,

	/// Pace ticks at 25 per second instead of running flat out
	#[arg(long, default_value_t = false)]
	realtime: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
	let mut builder = config::Config::builder();
	if let Some(path) = path {
		builder = builder.add_source(config::File::from(path.as_path()).required(true));
	}
	let config: EngineConfig = builder
		.add_source(config::Environment::with_prefix("PONYPAPER").try_parsing(true))
		.build()
		.context("Failed to read engine settings")?
		.try_deserialize()
		.context("Invalid engine settings")?;
	config.validate().context("Invalid engine settings")?;
	Ok(config)
}

/// Scripted drag: pick up, carry left over 20 ticks, drop near the edge.
struct DragScript {
	start: u32,
	from: Option<Point>,
}

impl DragScript {
	const STEPS: u32 = 20;

	fn drive(&mut self, tick: u32, flock: &mut Flock, rng: &mut SmallRng) {
		if tick == self.start {
			let Some(from) = flock.active().last().map(CharacterState::position) else {
				return;
			};
			flock.on_pointer_event(PointerEvent::down(0, from), rng);
			match flock.dragged() {
				Some(pony) => info!("Picked up {}", pony),
				None => info!("Missed at {}", from),
			}
			self.from = Some(from);
		} else if let Some(from) = self.from {
			let step = tick - self.start;
			let to = Point::new(from.x - (from.x - 5.0) * step as f32 / Self::STEPS as f32, from.y);
			if step < Self::STEPS {
				flock.on_pointer_event(PointerEvent::moved(0, to), rng);
			} else {
				flock.on_pointer_event(PointerEvent::up(0, to), rng);
				self.from = None;
				info!("Dropped at {}", to);
			}
		}
	}
}

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let config = load_config(cli.config.as_ref())?;
	debug!("{}", config);

	let seed = cli.seed.unwrap_or_else(rand::random);
	info!("Seed {}", seed);
	let mut rng = SmallRng::seed_from_u64(seed);

	let width = i32::try_from(cli.width).context("Viewport too wide")?;
	let height = i32::try_from(cli.height).context("Viewport too tall")?;
	let screen = Rect::from_size(width, height);

	let mut flock = Flock::try_new(roster::roster(cli.roster)?, config, &mut rng)?;
	let mut script = DragScript {
		start: cli.ticks / 3,
		from: None,
	};

	let started = Instant::now();
	let mut list = DrawList::new();
	for tick in 0..cli.ticks {
		let tick_started = Instant::now();
		if cli.drag {
			script.drive(tick, &mut flock, &mut rng);
		}

		list.clear();
		flock.update_and_draw(screen, &mut rng, &mut list);

		if tick % 100 == 0 {
			debug!("Tick {}\n{}", tick, flock);
		}
		if cli.realtime {
			thread::sleep(TICK.saturating_sub(tick_started.elapsed()));
		}
	}
	info!("Simulated {} ticks in {:?}", cli.ticks, started.elapsed());
	info!("{}", flock);

	if let Some(path) = &cli.json {
		let file = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
		serde_json::to_writer_pretty(BufWriter::new(file), list.records())?;
		info!("Wrote {} draw records to {}", list.len(), path.display());
	}

	if let Some(path) = &cli.png {
		raster::rasterize(&list, cli.width, cli.height)
			.save(path)
			.with_context(|| format!("Cannot write {}", path.display()))?;
		info!("Wrote snapshot to {}", path.display());
	}

	Ok(())
}
