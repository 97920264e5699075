//! Benchmark helper utilities for zel-rs
//!
//! This module generates synthetic ZEL files for benchmarking the decoder
//! without shipping binary fixtures. The generated files carry a 256-entry
//! global palette and a gradient-plus-noise pixel pattern that compresses
//! realistically under LZ4.

use zel_types::Compression;

/// Sizes of the fixed on-disk structures, kept in sync with `zel_types`.
mod layout {
	pub const FILE_HEADER_SIZE: usize = 34;
	pub const PALETTE_HEADER_SIZE: usize = 8;
	pub const FRAME_HEADER_SIZE: usize = 14;
	pub const FRAME_INDEX_ENTRY_SIZE: usize = 11;
}

/// Generates a valid single-frame ZEL file with the specified geometry.
///
/// The pixel pattern mixes a horizontal gradient with a per-row offset so
/// neighbouring zones differ; `compression` selects raw or LZ4 zone chunks.
pub fn generate_test_zel_data(
	width: u16,
	height: u16,
	zone_width: u16,
	zone_height: u16,
	compression: Compression,
) -> Vec<u8> {
	assert!(width % zone_width == 0 && height % zone_height == 0);

	let pixels = generate_pixels(width as usize, height as usize);
	let mut data = Vec::new();

	// File header
	data.extend_from_slice(b"ZEL0");
	data.extend_from_slice(&1u16.to_le_bytes());
	data.extend_from_slice(&(layout::FILE_HEADER_SIZE as u32).to_le_bytes());
	data.extend_from_slice(&width.to_le_bytes());
	data.extend_from_slice(&height.to_le_bytes());
	data.extend_from_slice(&zone_width.to_le_bytes());
	data.extend_from_slice(&zone_height.to_le_bytes());
	data.push(0); // indexed-8
	data.push(0b101); // global palette + frame index table
	data.extend_from_slice(&1u16.to_le_bytes()); // frame count
	data.extend_from_slice(&16u16.to_le_bytes()); // default duration
	data.extend_from_slice(&[0u8; 10]);

	// Global palette: 256 little-endian RGB565 entries
	data.push(0); // global
	data.push(layout::PALETTE_HEADER_SIZE as u8);
	data.extend_from_slice(&256u16.to_le_bytes());
	data.push(0); // RGB565-LE
	data.extend_from_slice(&[0u8; 3]);
	for i in 0..=255u8 {
		let r = u16::from(i >> 3);
		let g = u16::from(i >> 2);
		let b = u16::from(i.wrapping_mul(3) >> 3);
		let word = (r << 11) | (g << 5) | b;
		data.extend_from_slice(&word.to_le_bytes());
	}

	// Frame index table (patched after the frame block is written)
	let table_pos = data.len();
	data.resize(table_pos + layout::FRAME_INDEX_ENTRY_SIZE, 0);

	let frame_offset = data.len() as u32;
	let block = build_frame_block(&pixels, width, zone_width, zone_height, compression);
	data[table_pos..table_pos + 4].copy_from_slice(&frame_offset.to_le_bytes());
	data[table_pos + 4..table_pos + 8].copy_from_slice(&(block.len() as u32).to_le_bytes());
	data[table_pos + 8] = 0b001; // keyframe
	data[table_pos + 9..table_pos + 11].copy_from_slice(&16u16.to_le_bytes());
	data.extend_from_slice(&block);

	data
}

fn generate_pixels(width: usize, height: usize) -> Vec<u8> {
	let mut pixels = Vec::with_capacity(width * height);
	for y in 0..height {
		for x in 0..width {
			pixels.push(((x + y * 7) % 256) as u8);
		}
	}
	pixels
}

fn build_frame_block(
	pixels: &[u8],
	width: u16,
	zone_width: u16,
	zone_height: u16,
	compression: Compression,
) -> Vec<u8> {
	let zones_per_row = (width / zone_width) as usize;
	let zone_count = zones_per_row * (pixels.len() / usize::from(width) / usize::from(zone_height));

	let mut block = Vec::new();
	block.push(1); // block type
	block.push(layout::FRAME_HEADER_SIZE as u8);
	block.push(0b001); // keyframe
	block.push(compression as u8);
	block.extend_from_slice(&(zone_count as u16).to_le_bytes());
	block.extend_from_slice(&0u16.to_le_bytes());
	block.extend_from_slice(&0u16.to_le_bytes());
	block.extend_from_slice(&[0u8; 4]);

	let zw = usize::from(zone_width);
	let zh = usize::from(zone_height);
	for zone in 0..zone_count {
		let x0 = (zone % zones_per_row) * zw;
		let y0 = (zone / zones_per_row) * zh;
		let mut tile = Vec::with_capacity(zw * zh);
		for row in 0..zh {
			let start = (y0 + row) * usize::from(width) + x0;
			tile.extend_from_slice(&pixels[start..start + zw]);
		}

		let payload = match compression {
			Compression::Lz4 => lz4_flex::block::compress(&tile),
			_ => tile,
		};
		block.extend_from_slice(&(payload.len() as u32).to_le_bytes());
		block.extend_from_slice(&payload);
	}

	block
}

/// Common benchmark geometries.
pub mod sizes {
	/// Tiny icon animation: 32x32 in 8x8 zones
	pub const TINY: (u16, u16, u16, u16) = (32, 32, 8, 8);
	/// Small sprite: 64x64 in 16x16 zones
	pub const SMALL: (u16, u16, u16, u16) = (64, 64, 16, 16);
	/// Quarter-VGA frame: 320x240 in 32x24 zones
	pub const QVGA: (u16, u16, u16, u16) = (320, 240, 32, 24);
	/// Small TFT panel: 240x135 in 48x27 zones
	pub const TFT: (u16, u16, u16, u16) = (240, 135, 48, 27);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generated_file_decodes() {
		let data = generate_test_zel_data(32, 16, 8, 8, Compression::None);
		let mut zel = zel_types::ZelDecoder::from_bytes(&data).unwrap();
		assert_eq!(zel.width(), 32);
		assert_eq!(zel.height(), 16);
		assert_eq!(zel.frame_count(), 1);

		let mut dst = vec![0u8; 32 * 16];
		zel.decode_frame_index8(0, &mut dst, 32).unwrap();
		assert_eq!(dst[0], 0);
		assert_eq!(dst[33], (1 + 7) as u8);
	}

	#[test]
	fn test_lz4_variant_matches_raw() {
		let raw = generate_test_zel_data(32, 16, 8, 8, Compression::None);
		let lz4 = generate_test_zel_data(32, 16, 8, 8, Compression::Lz4);

		let mut raw_zel = zel_types::ZelDecoder::from_bytes(&raw).unwrap();
		let mut lz4_zel = zel_types::ZelDecoder::from_bytes(&lz4).unwrap();

		let mut a = vec![0u8; 32 * 16];
		let mut b = vec![0u8; 32 * 16];
		raw_zel.decode_frame_index8(0, &mut a, 32).unwrap();
		lz4_zel.decode_frame_index8(0, &mut b, 32).unwrap();
		assert_eq!(a, b);
	}
}
