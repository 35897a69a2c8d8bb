//! Timeline CLI Utility
//!
//! Loads a sprite strip and its frame durations and shows how the engine
//! slices and schedules it.
//!
//! # Usage
//!
//! ```bash
//! # Frame layout and the frame shown at every time unit of one cycle
//! cargo run --example timeline_utils -- inspect trot.png 4,4,4,10
//!
//! # Same, sampled the way a character sees it (every 4 time units)
//! cargo run --example timeline_utils -- inspect trot.png 4,4,4,10 --step 4
//!
//! # Cut the strip into one PNG per frame
//! cargo run --example timeline_utils -- split trot.png 4,4,4,10 out/
//! ```

use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use image::imageops;
use log::info;
use ponypaper_rs::prelude::*;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Inspect(opts) => run_inspect(opts),
		Command::Split(opts) => run_split(opts),
	}
}

#[derive(Parser)]
#[command(name = "timeline_utils")]
#[command(author = "ponypaper-rs project")]
#[command(version)]
#[command(about = "Inspect sprite strips as animation timelines", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Print the frame layout and the visible frame over one cycle
	Inspect(InspectArgs),
	/// Write every frame of a strip to its own PNG
	Split(SplitArgs),
}

#[derive(Args)]
struct StripArgs {
	/// Sprite strip image, frames laid side by side
	#[arg(value_name = "IMAGE")]
	image: PathBuf,

	/// Comma-separated frame durations, e.g. `4,4,4,10`
	#[arg(value_name = "DURATIONS", value_delimiter = ',', required = true)]
	durations: Vec<u32>,
}

#[derive(Args)]
struct InspectArgs {
	#[command(flatten)]
	strip: StripArgs,

	/// Sample the cycle every STEP time units
	#[arg(short, long, value_name = "STEP", default_value_t = 1)]
	step: u32,
}

#[derive(Args)]
struct SplitArgs {
	#[command(flatten)]
	strip: StripArgs,

	/// Directory to write `frame_NN.png` files into
	#[arg(value_name = "OUTPUT_DIR")]
	output: PathBuf,
}

fn load(args: &StripArgs) -> Result<Timeline> {
	let image = image::open(&args.image)
		.with_context(|| format!("Cannot open {}", args.image.display()))?
		.to_rgba8();
	let timeline = Timeline::new(Arc::new(image), args.durations.clone())
		.with_context(|| format!("{} is not a valid strip", args.image.display()))?;
	Ok(timeline)
}

fn run_inspect(opts: InspectArgs) -> Result<()> {
	if opts.step == 0 {
		bail!("Step must be positive");
	}
	let timeline = load(&opts.strip)?;

	info!("{}", timeline);
	info!(
		"{} frames of {}x{}, cycle length {}",
		timeline.frame_count(),
		timeline.frame_width(),
		timeline.frame_height(),
		timeline.cycle_length()
	);
	for (index, duration) in timeline.durations().iter().enumerate() {
		let rect = timeline.frame_rect(index);
		info!("  frame {:>2}: x {:>4}, {:>3} time units", index, rect.x, duration);
	}

	let mut line = String::new();
	let mut time = 0;
	while time < timeline.cycle_length() {
		let frame = timeline.frame_at(i64::from(time))?;
		line.push_str(&format!("{time}:{frame} "));
		time += opts.step;
	}
	info!("time:frame  {}", line.trim_end());

	if opts.step > 1 && timeline.cycle_length() % opts.step != 0 {
		info!(
			"Cycle is not a multiple of the step; a character wraps to {} after the last sample",
			time - timeline.cycle_length()
		);
	}
	Ok(())
}

fn run_split(opts: SplitArgs) -> Result<()> {
	let timeline = load(&opts.strip)?;
	fs::create_dir_all(&opts.output)
		.with_context(|| format!("Cannot create {}", opts.output.display()))?;

	for index in 0..timeline.frame_count() {
		let rect = timeline.frame_rect(index);
		let frame =
			imageops::crop_imm(timeline.strip().as_ref(), rect.x, rect.y, rect.width, rect.height)
				.to_image();
		let path = opts.output.join(format!("frame_{index:02}.png"));
		frame.save(&path).with_context(|| format!("Cannot write {}", path.display()))?;
		info!("Wrote {}", path.display());
	}
	Ok(())
}
