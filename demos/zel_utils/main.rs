//! ZEL container CLI utility
//!
//! A command-line tool for inspecting ZEL animation files and dumping decoded
//! frame data.
//!
//! # Features
//!
//! - **info**: Display header and timing information about a ZEL file
//! - **frames**: List per-frame metadata, optionally as JSON
//! - **palette**: Print the resolved global palette entries
//! - **timeline**: Sample the animation timeline at a fixed step
//! - **dump**: Decode one frame to a raw binary file
//!
//! # Usage
//!
//! ```bash
//! # Show file information
//! cargo run --example zel_utils -- info BOOT.ZEL
//!
//! # List frames as JSON
//! cargo run --example zel_utils -- frames BOOT.ZEL --json
//!
//! # Print the global palette in big-endian byte order
//! cargo run --example zel_utils -- palette BOOT.ZEL --big-endian
//!
//! # Sample the timeline every 50 ms
//! cargo run --example zel_utils -- timeline BOOT.ZEL --step-ms 50
//!
//! # Dump frame 3 as raw RGB565 words
//! cargo run --example zel_utils -- dump BOOT.ZEL 3 --rgb565 -o frame3.bin
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use zel_rs::prelude::*;

#[derive(Parser)]
#[command(name = "zel_utils")]
#[command(author = "zel-rs project")]
#[command(version = "1.0")]
#[command(about = "ZEL container utility - inspect files and dump decoded frames", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Display information about a ZEL file
	Info {
		/// Input ZEL file path
		#[arg(value_name = "INPUT_ZEL")]
		input: PathBuf,
	},

	/// List per-frame metadata
	Frames {
		/// Input ZEL file path
		#[arg(value_name = "INPUT_ZEL")]
		input: PathBuf,

		/// Emit machine-readable JSON instead of a table
		#[arg(short, long)]
		json: bool,
	},

	/// Print the resolved global palette
	Palette {
		/// Input ZEL file path
		#[arg(value_name = "INPUT_ZEL")]
		input: PathBuf,

		/// Resolve entries in big-endian byte order
		#[arg(short, long)]
		big_endian: bool,
	},

	/// Sample the animation timeline at a fixed step
	Timeline {
		/// Input ZEL file path
		#[arg(value_name = "INPUT_ZEL")]
		input: PathBuf,

		/// Sampling step in milliseconds
		#[arg(long, default_value_t = 100)]
		step_ms: u32,
	},

	/// Decode one frame to a raw binary file
	Dump {
		/// Input ZEL file path
		#[arg(value_name = "INPUT_ZEL")]
		input: PathBuf,

		/// Frame index to decode
		#[arg(value_name = "FRAME")]
		frame: u16,

		/// Expand palette indices to RGB565 words
		#[arg(long)]
		rgb565: bool,

		/// Output path (defaults to `<input>.frame<N>.bin`)
		#[arg(short, long, value_name = "OUTPUT")]
		output: Option<PathBuf>,
	},
}

#[derive(Serialize)]
struct FrameRow {
	index: u16,
	offset: u32,
	size: u32,
	duration_ms: u16,
	keyframe: bool,
	local_palette: bool,
}

fn main() -> anyhow::Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Commands::Info {
			input,
		} => cmd_info(&input),
		Commands::Frames {
			input,
			json,
		} => cmd_frames(&input, json),
		Commands::Palette {
			input,
			big_endian,
		} => cmd_palette(&input, big_endian),
		Commands::Timeline {
			input,
			step_ms,
		} => cmd_timeline(&input, step_ms),
		Commands::Dump {
			input,
			frame,
			rgb565,
			output,
		} => cmd_dump(&input, frame, rgb565, output),
	}
}

fn cmd_info(input: &Path) -> anyhow::Result<()> {
	let zel = ZelDecoder::open(input)?;

	println!("{}", zel.file_header());
	println!("- Zones: {} per frame ({}x{} grid)", zel.zone_count(), zel.zones_per_row(), zel.zones_per_col());
	println!("- Output Encoding: {}", zel.output_color_encoding());
	println!("- Total Duration: {} ms", zel.total_duration_ms());

	let keyframes = zel.frames().filter(|f| f.keyframe).count();
	let local_palettes = zel.frames().filter(|f| f.has_local_palette).count();
	println!("- Keyframes: {keyframes}");
	println!("- Frames With Local Palettes: {local_palettes}");

	Ok(())
}

fn cmd_frames(input: &Path, json: bool) -> anyhow::Result<()> {
	let zel = ZelDecoder::open(input)?;

	if json {
		let rows: Vec<FrameRow> = zel
			.frames()
			.map(|info| FrameRow {
				index: info.index,
				offset: info.offset,
				size: info.size,
				duration_ms: info.duration_ms,
				keyframe: info.keyframe,
				local_palette: info.has_local_palette,
			})
			.collect();
		println!("{}", serde_json::to_string_pretty(&rows)?);
	} else {
		for info in zel.frames() {
			println!("{info}");
		}
	}

	Ok(())
}

fn cmd_palette(input: &Path, big_endian: bool) -> anyhow::Result<()> {
	let mut zel = ZelDecoder::open(input)?;

	if big_endian {
		zel.set_output_color_encoding(ColorEncoding::Rgb565Be);
	}
	println!("Encoding: {}", zel.output_color_encoding());

	let palette = zel.global_palette()?;
	for (index, word) in palette.iter().enumerate() {
		println!("{index:3}: 0x{word:04X}");
	}

	Ok(())
}

fn cmd_timeline(input: &Path, step_ms: u32) -> anyhow::Result<()> {
	anyhow::ensure!(step_ms > 0, "step must be positive");
	let zel = ZelDecoder::open(input)?;

	let total = zel.total_duration_ms();
	println!("Total duration: {total} ms");

	let mut time = 0u32;
	while time < total {
		let (frame, start) = zel.find_frame_by_time_ms(time)?;
		println!("{time:6} ms -> frame {frame} (window starts at {start} ms)");
		time += step_ms;
	}

	Ok(())
}

fn cmd_dump(input: &Path, frame: u16, rgb565: bool, output: Option<PathBuf>) -> anyhow::Result<()> {
	let mut zel = ZelDecoder::open(input)?;

	let width = zel.width() as usize;
	let height = zel.height() as usize;
	let output = output.unwrap_or_else(|| {
		let mut name = input.as_os_str().to_os_string();
		name.push(format!(".frame{frame}.bin"));
		PathBuf::from(name)
	});

	if rgb565 {
		let mut pixels = vec![0u16; width * height];
		zel.decode_frame_rgb565(frame, &mut pixels, width)?;
		let mut bytes = Vec::with_capacity(pixels.len() * 2);
		for word in pixels {
			bytes.extend_from_slice(&word.to_le_bytes());
		}
		std::fs::write(&output, bytes)?;
	} else {
		let mut pixels = vec![0u8; width * height];
		zel.decode_frame_index8(frame, &mut pixels, width)?;
		std::fs::write(&output, pixels)?;
	}

	log::info!("wrote {}x{} frame {} to {}", width, height, frame, output.display());
	Ok(())
}
